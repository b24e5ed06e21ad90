use serde::{Deserialize, Serialize};

/// Settings for the verdict panel.
///
/// Everything except `version` has a default, so a minimal settings file is
/// just `{"version": "1.0"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,

    /// URL of the remote analysis endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Substrings identifying supported retail domains. A page URL is
    /// eligible for analysis when it contains any of these (case-sensitive).
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/analyze_url".to_string()
}

fn default_allowed_domains() -> Vec<String> {
    vec!["amazon".to_string()]
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            endpoint: default_endpoint(),
            allowed_domains: default_allowed_domains(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}
