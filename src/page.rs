use super::*;

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; max-width: 860px; margin: 2rem auto; }
.stats-box { display: flex; gap: 2rem; }
.stat-value { font-size: 1.5rem; font-weight: bold; margin-right: .5rem; }
.chart-labels { display: flex; justify-content: space-between; }
.chart-bars { display: flex; height: 1.5rem; background: #eee; }
.bar { color: #fff; text-align: center; overflow: hidden; }
.bar.positive { background: #2e7d32; }
.bar.neutral { background: #757575; }
.bar.negative { background: #c62828; }
.info-message { color: #555; margin: .5rem 0; }
.error-box { border: 1px solid #c62828; padding: 1rem; }
.error { color: #c62828; }
.raw-response { white-space: pre-wrap; }
.comment { border-bottom: 1px solid #ddd; padding: .75rem 0; }
.comment-header { display: flex; align-items: center; gap: .5rem; }
.author-img { width: 32px; height: 32px; border-radius: 50%; }
.author-name { font-weight: bold; }
.comment-date, .likes { color: #777; font-size: .9rem; }
";

/// Wraps a rendered fragment in a standalone document whose results
/// container carries the `comments-container` id.
pub(crate) fn render_page(title: Option<&str>, fragment: &str) -> String {
  let title = escape_html(title.unwrap_or("commentlens"));

  format!(
    "<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
     <title>{title}</title>\n<style>\n{PAGE_STYLE}</style>\n</head>\n<body>\n\
     <div id=\"comments-container\">{fragment}</div>\n</body>\n</html>\n"
  )
}

pub(crate) fn write_page(path: &Path, contents: &str) -> Result {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }

  fs::write(path, contents)
    .with_context(|| format!("could not write page to {}", path.display()))?;

  Ok(())
}
