use std::time::Duration;

use reqwest::Url;

use crate::error::CoreError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings for [`HttpNodeClient`](super::HttpNodeClient).
///
/// `base_url` is the wallet API root, e.g. `https://api.trongrid.io/wallet`;
/// endpoint paths are appended to it verbatim.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Sent as `TRON-PRO-API-KEY` on every request when set.
    pub api_key: Option<String>,
    /// Whole-request deadline, covering connect, send and body read.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

/// Validate the base URL and strip trailing slashes so paths join cleanly.
pub(super) fn parse_base_url(base_url: &str) -> Result<String, CoreError> {
    let parsed = Url::parse(base_url).map_err(|e| {
        CoreError::Config(format!(
            "invalid node url `{base_url}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(base_url.trim_end_matches('/').to_owned()),
        other => Err(CoreError::Config(format!(
            "unsupported node url scheme `{other}`; expected http or https"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_base_url_keeps_path_and_strips_slash() {
        let parsed = parse_base_url("https://api.trongrid.io/wallet/").expect("should parse");
        assert_eq!(parsed, "https://api.trongrid.io/wallet");
    }

    #[test]
    fn parse_base_url_invalid_scheme() {
        let err = parse_base_url("ftp://example.com").expect_err("must reject ftp");
        assert!(err.to_string().contains("unsupported node url scheme"));
    }

    #[test]
    fn parse_base_url_rejects_garbage() {
        let err = parse_base_url("not a url").expect_err("must reject");
        assert!(err.to_string().contains("invalid node url"));
    }

    #[test]
    fn config_defaults_and_setters() {
        let config = ClientConfig::new("http://127.0.0.1:8090/wallet")
            .with_api_key("key")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_key.as_deref(), Some("key"));
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    }
}
