use super::*;

#[derive(Serialize)]
struct CommentsRequest<'a> {
  url: &'a str,
}

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  endpoint: String,
}

impl Client {
  const COMMENTS_PATH: &str = "/api/comments";

  pub(crate) fn endpoint(&self) -> &str {
    &self.endpoint
  }

  /// Posts `{"url": ...}` to the comments endpoint. A non-2xx status fails
  /// before the body is read; a body carrying `error` fails with that
  /// message.
  pub(crate) async fn fetch_comments(
    &self,
    url: &str,
  ) -> Result<CommentsResponse, FetchError> {
    debug!(endpoint = %self.endpoint, %url, "requesting comments");

    let response = self
      .client
      .post(&self.endpoint)
      .json(&CommentsRequest { url })
      .send()
      .await
      .map_err(|error| {
        warn!(%error, "comments request failed");
        FetchError::Transport(error)
      })?;

    let status = response.status();

    if !status.is_success() {
      warn!(%status, "comments endpoint returned an error status");
      return Err(FetchError::Status(status));
    }

    let body = response
      .json::<CommentsResponse>()
      .await
      .map_err(|error| {
        warn!(%error, "could not decode comments response");
        FetchError::Decode(error)
      })?;

    if let Some(error) = body.error() {
      info!(%error, "server reported an error");
      return Err(FetchError::Application(error.to_string()));
    }

    Ok(body)
  }

  pub(crate) fn new(server: &str) -> Self {
    Self {
      client: reqwest::Client::new(),
      endpoint: format!(
        "{}{}",
        server.trim_end_matches('/'),
        Self::COMMENTS_PATH
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    axum::{Json, Router, http::StatusCode, routing::post},
    serde_json::json,
  };

  #[derive(Deserialize)]
  struct Submitted {
    url: String,
  }

  async fn serve(router: Router) -> Client {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    Client::new(&format!("http://{address}/"))
  }

  #[test]
  fn endpoint_joins_base_and_path() {
    assert_eq!(
      Client::new("http://localhost:5000/").endpoint(),
      "http://localhost:5000/api/comments"
    );

    assert_eq!(
      Client::new("http://localhost:5000").endpoint(),
      "http://localhost:5000/api/comments"
    );
  }

  #[tokio::test]
  async fn posts_json_url_and_decodes_response() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|Json(body): Json<Submitted>| async move {
        Json(json!({
          "video_title": body.url,
          "comments": [{"authorDisplayName": "a", "likeCount": 3}],
          "total_comments": 10
        }))
      }),
    ))
    .await;

    let response = client
      .fetch_comments("https://youtu.be/abc")
      .await
      .unwrap();

    assert_eq!(response.video_title.as_deref(), Some("https://youtu.be/abc"));
    assert_eq!(response.comments().len(), 1);
    assert_eq!(response.comments()[0].like_count.as_deref(), Some("3"));
    assert_eq!(response.total_comments(), Some("10"));
  }

  #[tokio::test]
  async fn error_field_becomes_application_error() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|| async {
        Json(json!({
          "comments": [],
          "error": "Comments disabled",
          "video_title": "v"
        }))
      }),
    ))
    .await;

    let error = client
      .fetch_comments("https://youtu.be/abc")
      .await
      .unwrap_err();

    assert!(matches!(
      &error,
      FetchError::Application(message) if message == "Comments disabled"
    ));
  }

  #[tokio::test]
  async fn non_success_status_is_transport_failure() {
    let client = serve(Router::new().route(
      "/api/comments",
      post(|| async {
        (StatusCode::BAD_REQUEST, Json(json!({"error": "URL required"})))
      }),
    ))
    .await;

    let error = client
      .fetch_comments("https://youtu.be/abc")
      .await
      .unwrap_err();

    assert!(matches!(
      error,
      FetchError::Status(status) if status == StatusCode::BAD_REQUEST
    ));
  }

  #[tokio::test]
  async fn unreadable_body_is_decode_failure() {
    let client = serve(
      Router::new().route("/api/comments", post(|| async { "<html>" })),
    )
    .await;

    let error = client
      .fetch_comments("https://youtu.be/abc")
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Decode(_)));
  }

  #[tokio::test]
  async fn unreachable_server_is_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let error = Client::new(&format!("http://{address}"))
      .fetch_comments("https://youtu.be/abc")
      .await
      .unwrap_err();

    assert!(matches!(error, FetchError::Transport(_)));
  }
}
