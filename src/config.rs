use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Config {
  pub(crate) log_file: Option<PathBuf>,
  pub(crate) log_filter: String,
  pub(crate) page_file: PathBuf,
  pub(crate) server: String,
}

impl Config {
  const DEFAULT_LOG_FILTER: &str = "info";

  const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

  const PAGE_FILE_NAME: &str = "commentlens.html";

  pub(crate) fn from_env() -> Self {
    Self::from_vars(|name| env::var(name).ok())
  }

  pub(crate) fn from_vars<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let var =
      |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    Self {
      log_file: var("COMMENTLENS_LOG_FILE").map(PathBuf::from),
      log_filter: var("COMMENTLENS_LOG")
        .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.into()),
      page_file: var("COMMENTLENS_PAGE_FILE").map_or_else(
        || env::temp_dir().join(Self::PAGE_FILE_NAME),
        PathBuf::from,
      ),
      server: var("COMMENTLENS_SERVER")
        .unwrap_or_else(|| Self::DEFAULT_SERVER.into()),
    }
  }
}
