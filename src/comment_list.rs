use super::*;

/// One `div.comment` per element, in server order.
pub(crate) fn render_comments(comments: &[Comment]) -> Vec<Node> {
  comments.iter().map(render_comment).collect()
}

fn render_comment(comment: &Comment) -> Node {
  let author = comment.author_display_name.as_deref().unwrap_or_default();

  let header = Node::element("div")
    .class("comment-header")
    .child(
      Node::element("img")
        .attr("src", comment.avatar_url())
        .attr("alt", author)
        .class("author-img")
        .attr("onerror", format!("this.src='{PLACEHOLDER_AVATAR}'")),
    )
    .child(Node::with_text("span", author).class("author-name"))
    .child(
      Node::with_text(
        "span",
        comment.published_at.as_deref().unwrap_or_default(),
      )
      .class("comment-date"),
    );

  let likes = comment.like_count.as_deref().unwrap_or_default();

  Node::element("div")
    .class("comment")
    .child(header)
    .child(
      Node::with_text(
        "div",
        comment.text_display.as_deref().unwrap_or_default(),
      )
      .class("comment-text"),
    )
    .child(
      Node::element("div")
        .class("likes")
        .child(Node::with_text("span", format!("👍 {likes}"))),
    )
}
