use super::*;

const EMPTY_HELP: &str = "YouTube may have turned off the comment section, \
or the service could not reach the comments.";

const EMPTY_MESSAGE: &str =
  "No comments were found for this video, or they could not be accessed.";

const ERROR_HELP: &str = "Please try again with another YouTube link. Only \
standard YouTube videos are currently supported.";

/// Maps the outcome of one request to the nodes that replace the container
/// and the terminal phase the cycle ends in.
pub(crate) fn project(
  result: &Result<CommentsResponse, FetchError>,
) -> (Vec<Node>, Phase) {
  match result {
    Ok(response) => match response.error() {
      Some(error) => (error_box(error), Phase::Error),
      None => project_response(response),
    },
    Err(error) => (error_box(&error.to_string()), Phase::Error),
  }
}

pub(crate) fn error_box(message: &str) -> Vec<Node> {
  vec![
    Node::element("div")
      .class("error-box")
      .child(
        Node::with_text("p", format!("An error occurred: {message}"))
          .class("error"),
      )
      .child(Node::with_text("p", ERROR_HELP).class("error-help")),
  ]
}

pub(crate) fn format_count(count: usize) -> String {
  match count {
    1 => "Showing 1 comment.".to_string(),
    _ => format!("Showing {count} comments."),
  }
}

fn project_response(response: &CommentsResponse) -> (Vec<Node>, Phase) {
  let mut nodes = Vec::new();

  let comments = response.comments();

  if let Some(title) = response.video_title.as_deref().filter(|t| !t.is_empty())
  {
    nodes.push(Node::with_text("h2", title).class("video-title"));
    nodes.push(stats_block(comments.len(), response.total_comments()));
  }

  if let Some(warning) = response.warning.as_deref().filter(|w| !w.is_empty())
  {
    nodes.push(Node::with_text("div", warning).class("info-message warning"));
  }

  if let Some(analysis) = &response.analysis {
    nodes.push(render_analysis(analysis));
  }

  if comments.is_empty() {
    nodes.push(
      Node::element("div")
        .class("error-box")
        .child(Node::with_text("p", EMPTY_MESSAGE).class("no-comments"))
        .child(Node::with_text("p", EMPTY_HELP).class("error-help")),
    );

    return (nodes, Phase::Empty);
  }

  nodes.push(Node::with_text("h3", "Comments").class("comments-heading"));
  nodes.push(
    Node::with_text("div", format_count(comments.len())).class("info-message"),
  );
  nodes.extend(render_comments(comments));

  (nodes, Phase::Success)
}

fn stats_block(fetched: usize, total: Option<&str>) -> Node {
  let stat = |value: String, label: &str| {
    Node::element("div")
      .class("stat-item")
      .child(Node::with_text("span", value).class("stat-value"))
      .child(Node::with_text("span", label).class("stat-label"))
  };

  let mut stats = Node::element("div")
    .class("stats-box")
    .child(stat(fetched.to_string(), "Fetched comments"));

  if let Some(total) = total {
    stats = stats.child(stat(total.to_string(), "Total comments"));
  }

  Node::element("div").class("stats-container").child(stats)
}
