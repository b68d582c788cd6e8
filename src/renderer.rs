use super::*;

/// Owns the results container and the loading flag. Every cycle goes through
/// `begin` then `finish`; `finish` always clears the loading flag and fully
/// replaces the container.
#[derive(Debug, Default)]
pub(crate) struct Renderer {
  container: Vec<Node>,
  loading: bool,
  phase: Phase,
}

impl Renderer {
  pub(crate) fn begin(&mut self) {
    self.container =
      vec![Node::with_text("p", LOADING_MESSAGE).class("info-message")];
    self.loading = true;
    self.phase = Phase::Loading;
  }

  pub(crate) fn container(&self) -> &[Node] {
    &self.container
  }

  pub(crate) fn finish(
    &mut self,
    result: Result<CommentsResponse, FetchError>,
  ) -> Phase {
    let (nodes, phase) = project(&result);

    self.container = nodes;
    self.loading = false;
    self.phase = phase;

    phase
  }

  pub(crate) fn html(&self) -> String {
    fragment_html(&self.container)
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.loading
  }

  /// The phase of the latest cycle; terminal phases persist until the next
  /// `begin`.
  pub(crate) fn phase(&self) -> Phase {
    self.phase
  }

  pub(crate) async fn run_cycle(
    &mut self,
    client: &Client,
    url: &str,
  ) -> Phase {
    self.begin();

    let result = client.fetch_comments(url).await;

    self.finish(result)
  }

  pub(crate) fn title(&self) -> Option<String> {
    self
      .container
      .iter()
      .find_map(|node| node.find_class("video-title"))
      .map(Node::text_content)
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    axum::{Json, Router, http::StatusCode, routing::post},
    serde_json::json,
  };

  async fn serve(router: Router) -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    Client::new(&format!("http://{address}"))
  }

  fn success() -> serde_json::Value {
    json!({
      "video_title": "Song",
      "comments": [
        {"authorDisplayName": "a", "textDisplay": "<script>alert(1)</script>"}
      ],
      "analysis": {
        "genel_duygu": {"pozitif": "70%", "negatif": "10%", "notr": "20%"}
      }
    })
  }

  #[test]
  fn begin_clears_container_and_shows_loading() {
    let mut renderer = Renderer::default();

    renderer.finish(Ok(serde_json::from_value(success()).unwrap()));
    assert!(renderer.html().contains("Song"));

    renderer.begin();

    assert!(renderer.is_loading());
    assert_eq!(renderer.phase(), Phase::Loading);
    assert_eq!(renderer.container().len(), 1);
    assert_eq!(renderer.container()[0].text_content(), LOADING_MESSAGE);
  }

  #[test]
  fn finish_clears_loading_for_every_outcome() {
    let outcomes = [
      (Ok(serde_json::from_value(success()).unwrap()), Phase::Success),
      (Ok(CommentsResponse::default()), Phase::Empty),
      (Err(FetchError::Interrupted), Phase::Error),
    ];

    for (result, expected) in outcomes {
      let mut renderer = Renderer::default();

      renderer.begin();
      assert!(renderer.is_loading());

      assert_eq!(renderer.finish(result), expected);
      assert!(!renderer.is_loading());
      assert_eq!(renderer.phase(), expected);
    }
  }

  #[test]
  fn error_overwrites_previous_output() {
    let mut renderer = Renderer::default();

    renderer.finish(Ok(serde_json::from_value(success()).unwrap()));

    renderer.begin();
    renderer.finish(Err(FetchError::Application("Comments disabled".into())));

    let html = renderer.html();

    assert!(html.contains("An error occurred: Comments disabled"));
    assert!(!html.contains("Song"));
    assert!(!html.contains("mood-chart"));
    assert!(renderer.title().is_none());
  }

  #[test]
  fn overlapping_cycles_keep_the_last_completion() {
    let mut renderer = Renderer::default();

    renderer.begin();
    renderer.begin();

    renderer.finish(Ok(serde_json::from_value(success()).unwrap()));
    renderer.finish(Ok(CommentsResponse::default()));

    assert_eq!(renderer.phase(), Phase::Empty);
    assert!(!renderer.html().contains("Song"));
  }

  #[tokio::test]
  async fn repeated_cycles_render_identical_output() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|| async { Json(success()) }),
    ))
    .await;

    let mut renderer = Renderer::default();

    assert_eq!(
      renderer.run_cycle(&client, "https://youtu.be/x").await,
      Phase::Success
    );

    let first = renderer.html();

    assert_eq!(
      renderer.run_cycle(&client, "https://youtu.be/x").await,
      Phase::Success
    );

    assert_eq!(renderer.html(), first);
    assert_eq!(first.matches("video-title").count(), 1);
    assert!(first.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!first.contains("<script>"));
    assert_eq!(renderer.title().as_deref(), Some("Song"));
  }

  #[tokio::test]
  async fn server_error_field_reaches_error_phase() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|| async {
        Json(json!({
          "comments": [{"textDisplay": "leftover"}],
          "error": "Comments disabled",
          "video_title": "v"
        }))
      }),
    ))
    .await;

    let mut renderer = Renderer::default();

    assert_eq!(
      renderer.run_cycle(&client, "https://youtu.be/x").await,
      Phase::Error
    );

    let html = renderer.html();

    assert!(html.contains("Comments disabled"));
    assert!(!html.contains("leftover"));
    assert!(!renderer.is_loading());
  }

  #[tokio::test]
  async fn failing_status_reaches_error_phase() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let mut renderer = Renderer::default();

    assert_eq!(
      renderer.run_cycle(&client, "https://youtu.be/x").await,
      Phase::Error
    );

    assert!(!renderer.is_loading());
    assert!(renderer.html().contains("error-box"));
  }

  #[tokio::test]
  async fn empty_comments_reach_empty_phase() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|| async { Json(json!({"comments": []})) }),
    ))
    .await;

    let mut renderer = Renderer::default();

    assert_eq!(
      renderer.run_cycle(&client, "https://youtu.be/x").await,
      Phase::Empty
    );
  }
}
