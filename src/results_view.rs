use super::*;

/// Terminal commit target for the renderer's container: the fragment is
/// flattened to wrapped text and scrolled.
#[derive(Default)]
pub(crate) struct ResultsView {
  html: String,
  lines: Vec<String>,
  offset: usize,
  width: usize,
}

impl ResultsView {
  fn flatten(html: &str, width: usize) -> Vec<String> {
    if html.is_empty() {
      return Vec::new();
    }

    let text = html2text::from_read(html.as_bytes(), width.max(1))
      .unwrap_or_else(|error| {
        debug!(%error, "falling back to plain text rendering");
        strip_markup(html)
      });

    text.lines().map(str::to_owned).collect()
  }

  pub(crate) fn lines(&self) -> &[String] {
    &self.lines
  }

  fn max_offset(&self) -> usize {
    self.lines.len().saturating_sub(1)
  }

  pub(crate) fn offset(&self) -> usize {
    self.offset
  }

  pub(crate) fn scroll_down(&mut self, amount: usize) {
    self.offset = self.offset.saturating_add(amount).min(self.max_offset());
  }

  pub(crate) fn scroll_to_bottom(&mut self) {
    self.offset = self.max_offset();
  }

  pub(crate) fn scroll_to_top(&mut self) {
    self.offset = 0;
  }

  pub(crate) fn scroll_up(&mut self, amount: usize) {
    self.offset = self.offset.saturating_sub(amount);
  }

  /// Re-flattens when the fragment or the width changed. A new fragment
  /// scrolls back to the top.
  pub(crate) fn sync(&mut self, html: &str, width: usize) {
    if html == self.html && width == self.width {
      return;
    }

    if html != self.html {
      self.offset = 0;
      self.html = html.to_string();
    }

    self.width = width;
    self.lines = Self::flatten(html, width);
    self.offset = self.offset.min(self.max_offset());
  }
}
