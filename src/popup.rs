use super::*;

/// Centers a box sized to fit `text` plus its border inside `area`.
pub(crate) fn popup_area(area: Rect, text: &str) -> Rect {
  fn saturating_usize_to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
  }

  let (line_count, max_line_width) =
    text
      .lines()
      .fold((0usize, 0usize), |(count, width), line| {
        (count.saturating_add(1), width.max(line.chars().count()))
      });

  let desired_width =
    saturating_usize_to_u16(max_line_width.saturating_add(4)).max(1);

  let desired_height =
    saturating_usize_to_u16(line_count.saturating_add(2)).max(1);

  let available_width = area.width.saturating_sub(2).max(1);
  let available_height = area.height.saturating_sub(2).max(1);

  let width = available_width.clamp(1, desired_width).min(area.width);
  let height = available_height.clamp(1, desired_height).min(area.height);

  let x = area.x + (area.width.saturating_sub(width)) / 2;
  let y = area.y + (area.height.saturating_sub(height)) / 2;

  Rect::new(x, y, width, height)
}

pub(crate) fn draw_popup(frame: &mut Frame, title: &str, text: &str) {
  let area = popup_area(frame.area(), text);

  frame.render_widget(Clear, area);

  let popup = Paragraph::new(text.to_string())
    .block(Block::default().title(title.to_string()).borders(Borders::ALL))
    .wrap(Wrap { trim: true });

  frame.render_widget(popup, area);
}
