use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  page_file: PathBuf,
  state: State,
}

impl App {
  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.draw_input(frame, layout[0]);

    let results_area = layout[1];

    self
      .state
      .set_results_height(results_area.height.saturating_sub(2) as usize);

    let html = self.state.renderer().html();

    let results = self.state.results_mut();

    results.sync(&html, results_area.width.saturating_sub(2).max(1) as usize);

    let lines: Vec<Line> = if results.lines().is_empty() {
      vec![Line::from(Span::styled(
        WELCOME_TEXT,
        Style::default().fg(Color::DarkGray),
      ))]
    } else {
      results
        .lines()
        .iter()
        .skip(results.offset())
        .map(|line| Line::from(line.clone()))
        .collect()
    };

    let results_border = if self.state.focus() == Focus::Results {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    };

    let title = match self.state.renderer().title() {
      Some(title) => format!(" {} ", truncate(&title, 60)),
      None => " Results ".to_string(),
    };

    frame.render_widget(
      Paragraph::new(lines).block(
        Block::default()
          .title(title)
          .borders(Borders::ALL)
          .border_style(results_border),
      ),
      results_area,
    );

    let status = Paragraph::new(self.state.status())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
    self.state.alert().draw(frame);
  }

  fn draw_input(&self, frame: &mut Frame, area: Rect) {
    let focused = self.state.focus() == Focus::Input;

    let border = if focused {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    };

    let mut title = vec![Span::raw(" Video URL ")];

    if self.state.renderer().is_loading() {
      title.push(Span::styled(
        "loading... ",
        Style::default()
          .fg(Color::Yellow)
          .add_modifier(Modifier::BOLD),
      ));
    }

    let prompt = self.state.input().prompt();

    let input = Paragraph::new(prompt.clone()).block(
      Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(border),
    );

    frame.render_widget(input, area);

    if focused && !self.state.alert().is_visible() {
      let width = u16::try_from(prompt.chars().count()).unwrap_or(u16::MAX);

      frame.set_cursor_position((
        area.x.saturating_add(1).saturating_add(width),
        area.y.saturating_add(1),
      ));
    }
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchComments { request_id, url } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        let handle = self.handle.clone();

        handle.spawn(async move {
          let guard = CycleGuard::new(request_id, sender);

          guard.complete(client.fetch_comments(&url).await);
        });
      }
      Effect::OpenPage { html, title } => {
        let page = render_page(title.as_deref(), &html);

        let opened = write_page(&self.page_file, &page).and_then(|()| {
          webbrowser::open(&self.page_file.to_string_lossy())
            .context("could not launch a browser")
        });

        match opened {
          Ok(()) => {
            self.state.set_transient_message(format!(
              "Opened in browser: {}",
              truncate(&self.page_file.to_string_lossy(), 80)
            ));
          }
          Err(error) => {
            warn!(%error, "could not open page");
            self
              .state
              .set_transient_message(format!("Could not open page: {error}"));
          }
        }
      }
    }
  }

  pub(crate) fn new(client: Client, page_file: PathBuf) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      page_file,
      state: State::new(),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = self.state.handle_key(key);

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          self.state.clear_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
