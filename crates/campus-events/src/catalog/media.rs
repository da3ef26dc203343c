use crate::config::MediaConfig;

use super::transform::DEFAULT_IMAGE;

/// Resolves cover and poster paths against the backend's media root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaBase {
    api_base_url: String,
}

impl MediaBase {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        let api_base_url = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URLs pass through; anything else is served from `<base>/media/...`.
    pub fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return DEFAULT_IMAGE.to_string();
        }
        if is_absolute_url(raw) {
            return raw.to_string();
        }

        let path = if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        };
        let path = if path.starts_with("/media/") {
            path
        } else {
            format!("/media{path}")
        };

        format!("{}{}", self.api_base_url, path)
    }
}

fn is_absolute_url(raw: &str) -> bool {
    match raw.split_once("://") {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && !rest.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        let media = MediaBase::new("http://localhost:8000/");
        assert_eq!(
            media.resolve("https://cdn.example.org/cover.png"),
            "https://cdn.example.org/cover.png"
        );
    }

    #[test]
    fn relative_paths_gain_media_prefix() {
        let media = MediaBase::new("http://localhost:8000/");
        assert_eq!(
            media.resolve("activities/12/cover.png"),
            "http://localhost:8000/media/activities/12/cover.png"
        );
        assert_eq!(
            media.resolve("/media/activities/12/cover.png"),
            "http://localhost:8000/media/activities/12/cover.png"
        );
    }

    #[test]
    fn blank_paths_use_placeholder() {
        let media = MediaBase::new("http://localhost:8000");
        assert_eq!(media.resolve("  "), DEFAULT_IMAGE);
    }
}
