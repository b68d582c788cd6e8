use super::*;

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

/// Escapes `&`, `<`, `>`, `"` and `'` so the result is safe both as element
/// text and inside a quoted attribute value.
pub(crate) fn escape_html(text: &str) -> String {
  html_escape::encode_quoted_attribute(text).into_owned()
}

const BLOCK_TAGS: [&str; 10] =
  ["br", "div", "h2", "h3", "h4", "hr", "li", "p", "pre", "ul"];

/// Plain-text fallback for fragments `html2text` refuses to render. Block
/// elements start a new line; entities are decoded only after the tags are
/// gone, so escaped markup stays literal text.
pub(crate) fn strip_markup(html: &str) -> String {
  let mut text = String::with_capacity(html.len());
  let mut rest = html;

  while let Some(start) = rest.find('<') {
    text.push_str(&rest[..start]);

    let Some(end) = rest[start..].find('>') else {
      rest = "";
      break;
    };

    let name = rest[start + 1..start + end]
      .trim_start_matches('/')
      .split(|ch: char| ch.is_whitespace() || ch == '/')
      .next()
      .unwrap_or_default()
      .to_ascii_lowercase();

    text.push(if BLOCK_TAGS.contains(&name.as_str()) {
      '\n'
    } else {
      ' '
    });

    rest = &rest[start + end + 1..];
  }

  text.push_str(rest);

  text
    .lines()
    .map(|line| {
      html_escape::decode_html_entities(line)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
    })
    .filter(|line| !line.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}
