use super::*;

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.?be)/.+$")
    .expect("video URL pattern should compile")
});

/// Coarse syntactic check; says nothing about whether the video exists.
pub(crate) fn is_valid_video_url(url: &str) -> bool {
  VIDEO_URL.is_match(url)
}
