use super::*;

/// Blocking prompt; while visible every key except its dismissal is ignored.
#[derive(Default)]
pub(crate) struct AlertView {
  message: Option<String>,
}

impl AlertView {
  pub(crate) fn dismiss(&mut self) {
    self.message = None;
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    if let Some(message) = &self.message {
      draw_popup(frame, ALERT_TITLE, &format!("{message}\n\n{ALERT_HINT}"));
    }
  }

  pub(crate) fn handle_key(key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
        Command::DismissAlert
      }
      _ => Command::None,
    }
  }

  pub(crate) fn is_visible(&self) -> bool {
    self.message.is_some()
  }

  pub(crate) fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }

  pub(crate) fn show(&mut self, message: impl Into<String>) {
    self.message = Some(message.into());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_confirmation_keys_dismiss() {
    for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char(' ')] {
      assert_eq!(
        AlertView::handle_key(KeyEvent::new(code, KeyModifiers::NONE)),
        Command::DismissAlert
      );
    }

    assert_eq!(
      AlertView::handle_key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::NONE
      )),
      Command::None
    );
  }

  #[test]
  fn show_and_dismiss_toggle_visibility() {
    let mut alert = AlertView::default();
    assert!(!alert.is_visible());

    alert.show("bad link");
    assert_eq!(alert.message(), Some("bad link"));

    alert.dismiss();
    assert!(!alert.is_visible());
  }
}
