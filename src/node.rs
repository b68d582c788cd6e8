use super::*;

/// A render tree node. Text and attribute values are stored raw and escaped
/// only when the tree is serialized.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Node {
  Element {
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
    tag: &'static str,
  },
  Text(String),
}

impl Node {
  const VOID_TAGS: [&str; 3] = ["br", "hr", "img"];

  pub(crate) fn attr(
    mut self,
    name: &'static str,
    value: impl Into<String>,
  ) -> Self {
    if let Node::Element { attributes, .. } = &mut self {
      attributes.push((name, value.into()));
    }

    self
  }

  pub(crate) fn child(mut self, node: Node) -> Self {
    if let Node::Element { children, .. } = &mut self {
      children.push(node);
    }

    self
  }

  pub(crate) fn children<I>(mut self, nodes: I) -> Self
  where
    I: IntoIterator<Item = Node>,
  {
    if let Node::Element { children, .. } = &mut self {
      children.extend(nodes);
    }

    self
  }

  pub(crate) fn class(self, class: &str) -> Self {
    self.attr("class", class)
  }

  pub(crate) fn element(tag: &'static str) -> Self {
    Node::Element {
      attributes: Vec::new(),
      children: Vec::new(),
      tag,
    }
  }

  /// Finds the first element carrying `class` among its classes, depth first.
  pub(crate) fn find_class(&self, class: &str) -> Option<&Node> {
    let Node::Element { children, .. } = self else {
      return None;
    };

    if self.has_class(class) {
      return Some(self);
    }

    children.iter().find_map(|child| child.find_class(class))
  }

  pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
    match self {
      Node::Element { attributes, .. } => attributes
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str()),
      Node::Text(_) => None,
    }
  }

  pub(crate) fn has_class(&self, class: &str) -> bool {
    self
      .get_attr("class")
      .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
  }

  pub(crate) fn text(text: impl Into<String>) -> Self {
    Node::Text(text.into())
  }

  /// Concatenated raw text of this node and all descendants.
  pub(crate) fn text_content(&self) -> String {
    match self {
      Node::Text(text) => text.clone(),
      Node::Element { children, .. } => {
        children.iter().map(Node::text_content).collect()
      }
    }
  }

  pub(crate) fn to_html(&self) -> String {
    let mut out = String::new();
    self.write_html(&mut out);
    out
  }

  pub(crate) fn with_text(tag: &'static str, text: impl Into<String>) -> Self {
    Node::element(tag).child(Node::text(text))
  }

  fn write_html(&self, out: &mut String) {
    match self {
      Node::Text(text) => out.push_str(&escape_html(text)),
      Node::Element {
        attributes,
        children,
        tag,
      } => {
        out.push('<');
        out.push_str(tag);

        for (name, value) in attributes {
          out.push(' ');
          out.push_str(name);
          out.push_str("=\"");
          out.push_str(&escape_html(value));
          out.push('"');
        }

        out.push('>');

        if Self::VOID_TAGS.contains(tag) {
          return;
        }

        for child in children {
          child.write_html(out);
        }

        out.push_str("</");
        out.push_str(tag);
        out.push('>');
      }
    }
  }
}

pub(crate) fn fragment_html(nodes: &[Node]) -> String {
  nodes.iter().map(Node::to_html).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serializes_nested_elements() {
    let node = Node::element("div")
      .class("stat-item")
      .child(Node::with_text("span", "42"))
      .child(Node::with_text("span", "comments"));

    assert_eq!(
      node.to_html(),
      r#"<div class="stat-item"><span>42</span><span>comments</span></div>"#
    );
  }

  #[test]
  fn escapes_text_and_attributes() {
    let node = Node::element("p")
      .attr("title", r#"say "hi""#)
      .child(Node::text("<b>bold</b> & 'quoted'"));

    let html = node.to_html();

    assert!(html.starts_with(r#"<p title="say &quot;hi&quot;">"#));
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; "));
    assert!(!html.contains("<b>"));
    assert!(!html.contains('\''));
  }

  #[test]
  fn void_elements_have_no_closing_tag() {
    let node = Node::element("img").attr("src", "a.png");

    assert_eq!(node.to_html(), r#"<img src="a.png">"#);
  }

  #[test]
  fn find_class_matches_any_listed_class() {
    let tree = Node::element("div").child(
      Node::element("div")
        .class("bar positive")
        .child(Node::text("70%")),
    );

    let bar = tree.find_class("positive").unwrap();

    assert!(bar.has_class("bar"));
    assert_eq!(bar.text_content(), "70%");
    assert!(tree.find_class("negative").is_none());
  }

  #[test]
  fn fragment_html_concatenates_nodes() {
    let nodes = [Node::with_text("h2", "a"), Node::with_text("p", "b")];

    assert_eq!(fragment_html(&nodes), "<h2>a</h2><p>b</p>");
  }
}
