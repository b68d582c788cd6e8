#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Phase {
  Empty,
  Error,
  #[default]
  Idle,
  Loading,
  Success,
}

impl Phase {
  pub(crate) fn label(self) -> &'static str {
    match self {
      Phase::Empty => "empty",
      Phase::Error => "error",
      Phase::Idle => "idle",
      Phase::Loading => "loading",
      Phase::Success => "success",
    }
  }
}
