use super::*;

pub(crate) struct State {
  alert: AlertView,
  focus: Focus,
  help: HelpView,
  input: UrlInput,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  renderer: Renderer,
  results: ResultsView,
  results_height: usize,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn alert(&self) -> &AlertView {
    &self.alert
  }

  pub(crate) fn clear_pending_effects(&mut self) {
    self.pending_effects.clear();
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    let page = self.results_height.max(1);

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::DismissAlert => self.alert.dismiss(),
      Command::FocusInput => self.focus = Focus::Input,
      Command::FocusResults => self.focus = Focus::Results,
      Command::ShowHelp => self.help.show(),
      Command::HideHelp => self.help.hide(),
      Command::OpenPage => self.open_page(),
      Command::ScrollDown => self.results.scroll_down(1),
      Command::ScrollUp => self.results.scroll_up(1),
      Command::ScrollPageDown => self.results.scroll_down(page),
      Command::ScrollPageUp => self.results.scroll_up(page),
      Command::ScrollTop => self.results.scroll_to_top(),
      Command::ScrollBottom => self.results.scroll_to_bottom(),
      Command::SubmitUrl => self.submit_url(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn focus(&self) -> Focus {
    self.focus
  }

  /// Applies a finished request. Completions are never discarded: the most
  /// recent one to arrive owns the container.
  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Comments { request_id, result } => {
        let phase = self.renderer.finish(result);

        info!(request_id, phase = phase.label(), "render cycle finished");
      }
    }
  }

  /// Routes a key press to whichever layer currently owns the keyboard.
  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    if key.code == KeyCode::Char('c')
      && key.modifiers.contains(KeyModifiers::CONTROL)
    {
      return Command::Quit;
    }

    if self.alert.is_visible() {
      return AlertView::handle_key(key);
    }

    if self.help.is_visible() {
      return HelpView::handle_key(key);
    }

    match self.focus {
      Focus::Input => self.input.handle_key(key),
      Focus::Results => Focus::handle_results_key(key),
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn input(&self) -> &UrlInput {
    &self.input
  }

  pub(crate) fn new() -> Self {
    Self {
      alert: AlertView::default(),
      focus: Focus::Input,
      help: HelpView::default(),
      input: UrlInput::default(),
      next_request_id: 0,
      pending_effects: Vec::new(),
      renderer: Renderer::default(),
      results: ResultsView::default(),
      results_height: 0,
      transient_message: None,
    }
  }

  fn open_page(&mut self) {
    if self.renderer.container().is_empty() {
      self.set_transient_message(NOTHING_TO_OPEN_STATUS.into());
      return;
    }

    self.pending_effects.push(Effect::OpenPage {
      html: self.renderer.html(),
      title: self.renderer.title(),
    });
  }

  pub(crate) fn renderer(&self) -> &Renderer {
    &self.renderer
  }

  pub(crate) fn results_mut(&mut self) -> &mut ResultsView {
    &mut self.results
  }

  pub(crate) fn set_results_height(&mut self, height: usize) {
    self.results_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    self.transient_message = Some(TransientMessage::new(message));
  }

  pub(crate) fn status(&self) -> String {
    if let Some(transient) = &self.transient_message {
      return transient.text().to_string();
    }

    if self.renderer.is_loading() {
      return LOADING_STATUS.into();
    }

    match self.focus {
      Focus::Input => INPUT_STATUS.into(),
      Focus::Results => RESULTS_STATUS.into(),
    }
  }

  fn submit_url(&mut self) {
    let url = self.input.value().to_string();

    if !is_valid_video_url(&url) {
      debug!(%url, "rejected video URL");
      self.alert.show(INVALID_URL_MESSAGE);
      return;
    }

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    info!(request_id, %url, "starting render cycle");

    self.renderer.begin();

    self.focus = Focus::Results;

    self
      .pending_effects
      .push(Effect::FetchComments { request_id, url });
  }

  pub(crate) fn update_transient_message(&mut self) {
    if self
      .transient_message
      .as_ref()
      .is_some_and(TransientMessage::is_expired)
    {
      self.transient_message = None;
    }
  }
}
