#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  DismissAlert,
  FocusInput,
  FocusResults,
  HideHelp,
  None,
  OpenPage,
  Quit,
  ScrollBottom,
  ScrollDown,
  ScrollPageDown,
  ScrollPageUp,
  ScrollTop,
  ScrollUp,
  ShowHelp,
  SubmitUrl,
}
