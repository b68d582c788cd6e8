use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Focus {
  Input,
  Results,
}

impl Focus {
  pub(crate) fn handle_results_key(key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Char('/' | 'i') => Command::FocusInput,
      KeyCode::Char('o' | 'O') => Command::OpenPage,
      KeyCode::Down | KeyCode::Char('j') => Command::ScrollDown,
      KeyCode::Up | KeyCode::Char('k') => Command::ScrollUp,
      KeyCode::PageDown => Command::ScrollPageDown,
      KeyCode::PageUp => Command::ScrollPageUp,
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::ScrollPageDown
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        Command::ScrollPageUp
      }
      KeyCode::Home | KeyCode::Char('g') => Command::ScrollTop,
      KeyCode::End | KeyCode::Char('G') => Command::ScrollBottom,
      _ => Command::None,
    }
  }
}
