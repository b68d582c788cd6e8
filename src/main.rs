use {
  alert_view::AlertView,
  analysis::{Analysis, deserialize_analysis},
  analysis_view::render_analysis,
  anyhow::Context,
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_list::render_comments,
  comments_response::CommentsResponse,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  cycle_guard::CycleGuard,
  effect::Effect,
  event::Event,
  fetch_error::FetchError,
  focus::Focus,
  help_view::HelpView,
  node::{Node, fragment_html},
  page::{render_page, write_page},
  phase::Phase,
  popup::draw_popup,
  projection::project,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
  },
  regex::Regex,
  renderer::Renderer,
  results_view::ResultsView,
  sentiment::{Sentiment, parse_percent},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    sync::{LazyLock, Mutex},
    time::{Duration, Instant},
  },
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  tracing::{debug, info, warn},
  tracing_subscriber::EnvFilter,
  transient_message::TransientMessage,
  url_input::UrlInput,
  utils::{deserialize_optional_string, escape_html, strip_markup, truncate},
  video_url::is_valid_video_url,
};

mod alert_view;
mod analysis;
mod analysis_view;
mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_list;
mod comments_response;
mod config;
mod cycle_guard;
mod effect;
mod event;
mod fetch_error;
mod focus;
mod help_view;
mod node;
mod page;
mod phase;
mod popup;
mod projection;
mod renderer;
mod results_view;
mod sentiment;
mod state;
mod transient_message;
mod url_input;
mod utils;
mod video_url;

const ALERT_HINT: &str = "Press enter to continue.";
const ALERT_TITLE: &str = "Invalid link";

const HELP_TEXT: &str = "\
Link input:
  type    edit the video link
  enter   fetch comments and analysis
  ctrl+u  clear the link
  esc     move to the results

Results:
  ↑ / k   scroll up
  ↓ / j   scroll down
  pg↓     page down
  pg↑     page up
  ctrl+d  page down
  ctrl+u  page up
  home/g  jump to the top
  end/G   jump to the bottom
  / or i  enter a new link
  o       open the results in your browser
  ?       toggle this help
  q/esc   quit

ctrl+c quits from anywhere.
";

const HELP_TITLE: &str = "Help";

const INPUT_STATUS: &str =
  "type a video link • enter fetch • esc results • ctrl+u clear • ctrl+c quit";

const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube link.";

const LOADING_MESSAGE: &str = "Fetching and analysing all comments... This \
can take a minute or two depending on how many comments there are. Please \
wait.";

const LOADING_STATUS: &str = "Loading comments and analysis...";

const NOTHING_TO_OPEN_STATUS: &str = "Nothing to open yet.";

const PLACEHOLDER_AVATAR: &str =
  "https://www.gravatar.com/avatar/00000000000000000000000000000000?d=mp&f=y";

const RESULTS_STATUS: &str = "↑/k up • ↓/j down • / new link • o open in browser • q/esc quit • ? help";

const WELCOME_TEXT: &str = "Paste a YouTube video link above (for example \
https://www.youtube.com/watch?v=dQw4w9WgXcQ) and press enter.";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging(config: &Config, interactive: bool) -> Result {
  let filter = EnvFilter::try_new(&config.log_filter)
    .with_context(|| format!("invalid log filter `{}`", config.log_filter))?;

  if let Some(path) = &config.log_file {
    let file = fs::OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("could not open log file {}", path.display()))?;

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_ansi(false)
      .with_writer(Mutex::new(file))
      .init();
  } else if !interactive {
    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(io::stderr)
      .init();
  }

  Ok(())
}

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn render_once(client: &Client, url: &str) -> Result {
  if !is_valid_video_url(url) {
    anyhow::bail!("{INVALID_URL_MESSAGE}");
  }

  let mut renderer = Renderer::default();

  let phase = renderer.run_cycle(client, url).await;

  info!(phase = phase.label(), "render cycle finished");

  println!("{}", renderer.html());

  Ok(())
}

async fn run() -> Result {
  let config = Config::from_env();

  let url = env::args().nth(1);

  initialize_logging(&config, url.is_none())?;

  let client = Client::new(&config.server);

  debug!(endpoint = client.endpoint(), "using comments endpoint");

  if let Some(url) = url {
    return render_once(&client, url.trim()).await;
  }

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, config.page_file);

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
