use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct CommentsResponse {
  #[serde(default, deserialize_with = "deserialize_analysis")]
  pub(crate) analysis: Option<Analysis>,
  #[serde(default)]
  pub(crate) comments: Option<Vec<Comment>>,
  #[serde(default)]
  pub(crate) error: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) total_comments: Option<String>,
  #[serde(default)]
  pub(crate) video_title: Option<String>,
  #[serde(default)]
  pub(crate) warning: Option<String>,
}

impl CommentsResponse {
  pub(crate) fn comments(&self) -> &[Comment] {
    self.comments.as_deref().unwrap_or_default()
  }

  pub(crate) fn error(&self) -> Option<&str> {
    self.error.as_deref().filter(|error| !error.is_empty())
  }

  /// The server-reported total, hidden when it is missing or zero.
  pub(crate) fn total_comments(&self) -> Option<&str> {
    self
      .total_comments
      .as_deref()
      .map(str::trim)
      .filter(|total| !total.is_empty() && *total != "0")
  }
}
