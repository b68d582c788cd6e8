#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Effect {
  FetchComments { request_id: u64, url: String },
  OpenPage { html: String, title: Option<String> },
}
