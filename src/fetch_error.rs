use super::*;

/// Failures of a single request cycle. Transport-class variants display a
/// generic message; their details are only logged.
#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("{0}")]
  Application(String),
  #[error("the server returned a response that could not be read")]
  Decode(#[source] reqwest::Error),
  #[error("the request ended before the server answered")]
  Interrupted,
  #[error("the server is not responding or returned an error")]
  Status(reqwest::StatusCode),
  #[error("the server could not be reached")]
  Transport(#[source] reqwest::Error),
}
