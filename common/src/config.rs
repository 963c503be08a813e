/// Where the alta is POSTed to.
///
/// The base URL is injected through the form component's props instead of
/// living as a hardcoded constant next to the request code, so a host page
/// can point the form at a different server (or a test double) without
/// touching the submit path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Development server of the callejeros API.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

const ALTA_PATH: &str = "callejeros";

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full URL of the alta endpoint: the base joined with `callejeros`.
    pub fn alta_endpoint(&self) -> String {
        if self.base_url.ends_with('/') {
            format!("{}{}", self.base_url, ALTA_PATH)
        } else {
            format!("{}/{}", self.base_url, ALTA_PATH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_the_local_dev_server() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000/");
        assert_eq!(config.alta_endpoint(), "http://127.0.0.1:5000/callejeros");
    }

    #[test]
    fn endpoint_join_inserts_the_separator_when_missing() {
        let config = ApiConfig::new("https://refugio.example.com/api");
        assert_eq!(
            config.alta_endpoint(),
            "https://refugio.example.com/api/callejeros"
        );
    }
}
