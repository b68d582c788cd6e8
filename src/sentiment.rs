use super::*;

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Sentiment {
  #[serde(
    default,
    deserialize_with = "deserialize_optional_string",
    rename = "negatif"
  )]
  pub(crate) negative: Option<String>,
  #[serde(
    default,
    deserialize_with = "deserialize_optional_string",
    rename = "notr"
  )]
  pub(crate) neutral: Option<String>,
  #[serde(
    default,
    deserialize_with = "deserialize_optional_string",
    rename = "pozitif"
  )]
  pub(crate) positive: Option<String>,
}

/// Reads the leading integer of a percentage string such as `"42%"` or
/// `" 42.5 %"`. Anything without leading digits yields `0`; results are
/// clamped to `0..=100` so they can be used directly as a bar width.
pub(crate) fn parse_percent(value: Option<&str>) -> u8 {
  let Some(value) = value else {
    return 0;
  };

  let value = value.trim_start();

  let (negative, digits) = match value.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, value.strip_prefix('+').unwrap_or(value)),
  };

  let end = digits
    .find(|ch: char| !ch.is_ascii_digit())
    .unwrap_or(digits.len());

  if negative || end == 0 {
    return 0;
  }

  digits[..end]
    .parse::<u64>()
    .map_or(100, |percent| u8::try_from(percent.min(100)).unwrap_or(100))
}
