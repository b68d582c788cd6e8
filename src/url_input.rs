use super::*;

#[derive(Default)]
pub(crate) struct UrlInput {
  buffer: String,
}

impl UrlInput {
  pub(crate) fn buffer(&self) -> &str {
    &self.buffer
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Enter => Command::SubmitUrl,
      KeyCode::Esc => Command::FocusResults,
      KeyCode::Backspace => {
        self.buffer.pop();
        Command::None
      }
      KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
        self.buffer.clear();
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        self.buffer.push(ch);

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn prompt(&self) -> String {
    format!("URL: {}", self.buffer)
  }

  pub(crate) fn value(&self) -> &str {
    self.buffer.trim()
  }
}
