use super::*;

const ANALYSIS_TITLE: &str = "AI Analysis";

const SENTIMENT_BARS: [(&str, &str); 3] = [
  ("positive", "Positive"),
  ("neutral", "Neutral"),
  ("negative", "Negative"),
];

/// Projects an analysis into its container. An analysis-level error replaces
/// every other section.
pub(crate) fn render_analysis(analysis: &Analysis) -> Node {
  let container = Node::element("div")
    .class("analysis-container")
    .child(Node::with_text("h3", ANALYSIS_TITLE).class("analysis-title"));

  if let Some(error) = analysis.error() {
    let container = container.child(
      Node::with_text("p", format!("Analysis error: {error}")).class("error"),
    );

    let raw = analysis.raw_response.as_deref().filter(|raw| !raw.is_empty());

    return match raw {
      Some(raw) => container
        .child(Node::with_text("pre", raw).class("raw-response")),
      None => container,
    };
  }

  let mut sections = Vec::new();

  if let Some(sentiment) = &analysis.sentiment {
    sections.push(sentiment_section(sentiment));
  }

  if let Some(impression) =
    analysis.impression.as_deref().filter(|text| !text.is_empty())
  {
    sections.push(paragraph_section("Overall Impression", impression, None));
  }

  let lists = [
    ("Highlighted Topics", &analysis.topics),
    ("Contentious Points", &analysis.contentious_points),
    ("Suggestions and Requests", &analysis.suggestions),
  ];

  for (title, items) in lists {
    if let Some(items) = items.as_deref().filter(|items| !items.is_empty()) {
      sections.push(list_section(title, items));
    }
  }

  if let Some(summary) =
    analysis.summary.as_deref().filter(|text| !text.is_empty())
  {
    sections.push(paragraph_section("Summary", summary, Some("summary")));
  }

  container.children(sections)
}

fn list_section(title: &str, items: &[String]) -> Node {
  Node::element("div")
    .class("analysis-section")
    .child(Node::with_text("h4", title))
    .child(
      Node::element("ul").children(
        items
          .iter()
          .map(|item| Node::with_text("li", item.clone())),
      ),
    )
}

fn paragraph_section(title: &str, text: &str, extra: Option<&str>) -> Node {
  let class = match extra {
    Some(extra) => format!("analysis-section {extra}"),
    None => "analysis-section".to_string(),
  };

  Node::element("div")
    .class(&class)
    .child(Node::with_text("h4", title))
    .child(Node::with_text("p", text))
}

fn sentiment_section(sentiment: &Sentiment) -> Node {
  let values = [
    sentiment.positive.as_deref(),
    sentiment.neutral.as_deref(),
    sentiment.negative.as_deref(),
  ];

  let labels = Node::element("div").class("chart-labels").children(
    SENTIMENT_BARS
      .iter()
      .map(|(_, label)| Node::with_text("span", *label)),
  );

  let bars = Node::element("div").class("chart-bars").children(
    SENTIMENT_BARS.iter().zip(values).map(|((kind, label), value)| {
      let shown = value.unwrap_or("0%");

      Node::element("div")
        .class(&format!("bar {kind}"))
        .attr("style", format!("width: {}%;", parse_percent(value)))
        .attr("title", format!("{label}: {shown}"))
        .child(Node::with_text("span", shown))
    }),
  );

  Node::element("div")
    .class("analysis-section mood-analysis")
    .child(Node::with_text("h4", "Sentiment"))
    .child(
      Node::element("div")
        .class("mood-chart")
        .child(labels)
        .child(bars),
    )
}
