use super::*;

/// Structured output of the server-side comment analysis. Every field is
/// optional; a missing field means its section is not rendered.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub(crate) struct Analysis {
  #[serde(default, rename = "tartismali_noktalar")]
  pub(crate) contentious_points: Option<Vec<String>>,
  #[serde(default)]
  pub(crate) error: Option<String>,
  #[serde(default, rename = "genel_izlenim")]
  pub(crate) impression: Option<String>,
  #[serde(default)]
  pub(crate) raw_response: Option<String>,
  #[serde(default, rename = "genel_duygu")]
  pub(crate) sentiment: Option<Sentiment>,
  #[serde(default, rename = "oneriler")]
  pub(crate) suggestions: Option<Vec<String>>,
  #[serde(default, rename = "ozet")]
  pub(crate) summary: Option<String>,
  #[serde(default, rename = "one_cikan_konular")]
  pub(crate) topics: Option<Vec<String>>,
}

impl Analysis {
  pub(crate) fn error(&self) -> Option<&str> {
    self.error.as_deref().filter(|error| !error.is_empty())
  }
}

/// Decodes the free-form analysis object. A payload of the wrong shape
/// becomes an analysis-level error carrying the raw JSON, so the rest of the
/// response still renders.
pub(crate) fn deserialize_analysis<'de, D>(
  deserializer: D,
) -> Result<Option<Analysis>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  let Some(value) = value.filter(|value| !value.is_null()) else {
    return Ok(None);
  };

  match Analysis::deserialize(&value) {
    Ok(analysis) => Ok(Some(analysis)),
    Err(error) => {
      warn!(%error, "analysis has an unexpected shape");

      Ok(Some(Analysis {
        error: Some(format!("unexpected analysis format ({error})")),
        raw_response: Some(value.to_string()),
        ..Analysis::default()
      }))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_full_analysis() {
    let analysis = serde_json::from_str::<Analysis>(
      r#"{
        "genel_duygu": {"pozitif": "60%", "negatif": "15%", "notr": "25%"},
        "genel_izlenim": "Mostly positive",
        "one_cikan_konular": ["music", "lyrics"],
        "tartismali_noktalar": ["tempo"],
        "oneriler": ["live version"],
        "ozet": "Fans love it"
      }"#,
    )
    .unwrap();

    assert_eq!(analysis.impression.as_deref(), Some("Mostly positive"));
    assert_eq!(
      analysis.topics,
      Some(vec!["music".to_string(), "lyrics".to_string()])
    );
    assert_eq!(analysis.contentious_points, Some(vec!["tempo".to_string()]));
    assert_eq!(analysis.suggestions, Some(vec!["live version".to_string()]));
    assert_eq!(analysis.summary.as_deref(), Some("Fans love it"));
    assert!(analysis.error().is_none());
  }

  #[test]
  fn empty_error_is_not_an_error() {
    let analysis =
      serde_json::from_str::<Analysis>(r#"{"error": ""}"#).unwrap();

    assert!(analysis.error().is_none());
  }

  #[test]
  fn error_keeps_raw_response() {
    let analysis = serde_json::from_str::<Analysis>(
      r#"{"error": "no JSON found", "raw_response": "I cannot do that"}"#,
    )
    .unwrap();

    assert_eq!(analysis.error(), Some("no JSON found"));
    assert_eq!(analysis.raw_response.as_deref(), Some("I cannot do that"));
  }

  #[derive(Debug, Deserialize)]
  struct Wrapper {
    #[serde(default, deserialize_with = "deserialize_analysis")]
    analysis: Option<Analysis>,
  }

  fn parse_wrapped(json: &str) -> Option<Analysis> {
    serde_json::from_str::<Wrapper>(json).unwrap().analysis
  }

  #[test]
  fn null_or_missing_analysis_is_absent() {
    assert_eq!(parse_wrapped("{}"), None);
    assert_eq!(parse_wrapped(r#"{"analysis": null}"#), None);
  }

  #[test]
  fn misshapen_analysis_becomes_an_inline_error() {
    let analysis =
      parse_wrapped(r#"{"analysis": {"one_cikan_konular": "music"}}"#)
        .unwrap();

    assert!(
      analysis
        .error()
        .is_some_and(|error| error.starts_with("unexpected analysis format"))
    );
    assert_eq!(
      analysis.raw_response.as_deref(),
      Some(r#"{"one_cikan_konular":"music"}"#)
    );
    assert_eq!(analysis.topics, None);
  }

  #[test]
  fn non_object_analysis_becomes_an_inline_error() {
    let analysis = parse_wrapped(r#"{"analysis": "oops"}"#).unwrap();

    assert!(analysis.error().is_some());
    assert_eq!(analysis.raw_response.as_deref(), Some(r#""oops""#));
  }
}
