use super::*;

/// Held by a spawned request task. Reports the cycle's result exactly once;
/// if the task ends without reporting, dropping the guard reports
/// `FetchError::Interrupted` so the loading flag is still released.
pub(crate) struct CycleGuard {
  request_id: u64,
  sender: Option<UnboundedSender<Event>>,
}

impl CycleGuard {
  pub(crate) fn complete(
    mut self,
    result: Result<CommentsResponse, FetchError>,
  ) {
    if let Some(sender) = self.sender.take() {
      let _ = sender.send(Event::Comments {
        request_id: self.request_id,
        result,
      });
    }
  }

  pub(crate) fn new(request_id: u64, sender: UnboundedSender<Event>) -> Self {
    Self {
      request_id,
      sender: Some(sender),
    }
  }
}

impl Drop for CycleGuard {
  fn drop(&mut self) {
    if let Some(sender) = self.sender.take() {
      warn!(
        request_id = self.request_id,
        "request task ended without a result"
      );

      let _ = sender.send(Event::Comments {
        request_id: self.request_id,
        result: Err(FetchError::Interrupted),
      });
    }
  }
}
