use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  #[serde(default)]
  pub(crate) author_display_name: Option<String>,
  #[serde(default)]
  pub(crate) author_profile_image_url: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub(crate) like_count: Option<String>,
  #[serde(default)]
  pub(crate) published_at: Option<String>,
  #[serde(default)]
  pub(crate) text_display: Option<String>,
}

impl Comment {
  pub(crate) fn avatar_url(&self) -> &str {
    self
      .author_profile_image_url
      .as_deref()
      .filter(|url| !url.is_empty())
      .unwrap_or(PLACEHOLDER_AVATAR)
  }
}
