//! Backend endpoint configuration.
//!
//! Picks the generation backend's base URL from the host, then builds the
//! generation client against it.

use url::Url;

use crate::ports::outbound::HostCapabilities;

/// Same-origin proxy prefix used by an interactive host in development.
pub const DEV_PROXY_PREFIX: &str = "/api";
pub const DEFAULT_BACKEND_URL: &str = "https://playground.polarislabs.ai.kr/api";
/// Origin a relative prefix is resolved against.
pub const DEFAULT_DEV_ORIGIN: &str = "http://localhost:5173";

/// Checked in order; the first non-blank value wins.
pub const BACKEND_URL_VARS: [&str; 2] = ["NEWSDESK_BACKEND_URL", "BACKEND_URL"];
pub const DEV_ORIGIN_VAR: &str = "NEWSDESK_DEV_ORIGIN";
pub const TEXT_MODEL_VAR: &str = "NEWSDESK_TEXT_MODEL";
pub const IMAGE_MODEL_VAR: &str = "NEWSDESK_IMAGE_MODEL";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Base URL the generation backend is reached at, possibly relative.
pub fn resolve_backend_url(host: &dyn HostCapabilities) -> String {
    if host.is_interactive() && host.is_dev_mode() {
        return DEV_PROXY_PREFIX.to_string();
    }

    BACKEND_URL_VARS
        .iter()
        .find_map(|key| host.env_var(key))
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

fn absolute_url(resolved: &str, host: &dyn HostCapabilities) -> Result<String, ConfigError> {
    let invalid = |url: &str, e: url::ParseError| ConfigError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let url = if resolved.starts_with('/') {
        let origin = host
            .env_var(DEV_ORIGIN_VAR)
            .or_else(|| host.page_origin())
            .unwrap_or_else(|| DEFAULT_DEV_ORIGIN.to_string());
        Url::parse(&origin)
            .and_then(|base| base.join(resolved))
            .map_err(|e| invalid(&origin, e))?
    } else {
        Url::parse(resolved).map_err(|e| invalid(resolved, e))?
    };

    Ok(url.as_str().trim_end_matches('/').to_string())
}

/// Everything needed to reach the generation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Absolute, without a trailing slash.
    pub base_url: String,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
}

impl BackendConfig {
    pub fn from_host(host: &dyn HostCapabilities) -> Result<Self, ConfigError> {
        let resolved = resolve_backend_url(host);
        let base_url = absolute_url(&resolved, host)?;

        tracing::debug!(
            resolved = %resolved,
            base_url = %base_url,
            "Resolved backend URL"
        );

        Ok(Self {
            base_url,
            text_model: host.env_var(TEXT_MODEL_VAR),
            image_model: host.env_var(IMAGE_MODEL_VAR),
        })
    }

    /// Like [`Self::from_host`], but an unusable URL falls back to the
    /// production backend instead of stopping the app.
    pub fn from_host_or_default(host: &dyn HostCapabilities) -> Self {
        Self::from_host(host).unwrap_or_else(|e| {
            tracing::error!(error = %e, fallback = DEFAULT_BACKEND_URL, "Backend URL rejected");
            Self {
                base_url: DEFAULT_BACKEND_URL.to_string(),
                text_model: host.env_var(TEXT_MODEL_VAR),
                image_model: host.env_var(IMAGE_MODEL_VAR),
            }
        })
    }
}

/// Generation client talking to the configured OpenAI-compatible backend.
pub fn build_client(config: &BackendConfig) -> newsdesk_engine::GenerationClient {
    use newsdesk_engine::infrastructure::openai::OpenAiClient;

    let mut client = OpenAiClient::new(&config.base_url);
    if let Some(model) = &config.text_model {
        client = client.with_text_model(model.clone());
    }
    if let Some(model) = &config.image_model {
        client = client.with_image_model(model.clone());
    }

    tracing::info!(
        base_url = %client.base_url(),
        text_model = %client.text_model(),
        image_model = %client.image_model(),
        "Generation backend configured"
    );

    newsdesk_engine::GenerationClient::from_openai(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::StaticHost;

    #[test]
    fn test_interactive_dev_host_uses_proxy_prefix() {
        let host = StaticHost::new()
            .interactive(true)
            .dev_mode(true)
            .with_env("NEWSDESK_BACKEND_URL", "https://ignored.example");
        assert_eq!(resolve_backend_url(&host), "/api");
    }

    #[test]
    fn test_dev_mode_alone_does_not_use_proxy() {
        let host = StaticHost::new().dev_mode(true);
        assert_eq!(resolve_backend_url(&host), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_env_vars_checked_in_order() {
        let host = StaticHost::new()
            .with_env("BACKEND_URL", "https://second.example/api")
            .with_env("NEWSDESK_BACKEND_URL", "https://first.example/api");
        assert_eq!(resolve_backend_url(&host), "https://first.example/api");

        let host = StaticHost::new()
            .with_env("NEWSDESK_BACKEND_URL", "  ")
            .with_env("BACKEND_URL", "https://second.example/api");
        assert_eq!(resolve_backend_url(&host), "https://second.example/api");
    }

    #[test]
    fn test_default_when_unset() {
        assert_eq!(resolve_backend_url(&StaticHost::new()), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_relative_prefix_joined_onto_dev_origin() {
        let host = StaticHost::new().interactive(true).dev_mode(true);
        let config = BackendConfig::from_host(&host).unwrap();
        assert_eq!(config.base_url, "http://localhost:5173/api");

        let host = host.with_env(DEV_ORIGIN_VAR, "http://127.0.0.1:8080");
        let config = BackendConfig::from_host(&host).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
    }

    #[test]
    fn test_relative_prefix_prefers_page_origin_over_default() {
        let host = StaticHost::new()
            .interactive(true)
            .dev_mode(true)
            .with_origin("http://localhost:8080");
        let config = BackendConfig::from_host(&host).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/api");

        let host = host.with_env(DEV_ORIGIN_VAR, "http://127.0.0.1:9000");
        let config = BackendConfig::from_host(&host).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_config_trims_trailing_slash_and_reads_models() {
        let host = StaticHost::new()
            .with_env("BACKEND_URL", "https://backend.example/api/")
            .with_env(TEXT_MODEL_VAR, "gpt-4o-mini");
        let config = BackendConfig::from_host(&host).unwrap();

        assert_eq!(config.base_url, "https://backend.example/api");
        assert_eq!(config.text_model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.image_model, None);
    }

    #[test]
    fn test_invalid_url_is_reported() {
        let host = StaticHost::new().with_env("BACKEND_URL", "not a url");
        let err = BackendConfig::from_host(&host).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { ref url, .. } if url == "not a url"));
    }

    #[test]
    fn test_invalid_url_falls_back_to_default_backend() {
        let host = StaticHost::new()
            .with_env("BACKEND_URL", "not a url")
            .with_env(IMAGE_MODEL_VAR, "dall-e-3");
        let config = BackendConfig::from_host_or_default(&host);

        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.image_model.as_deref(), Some("dall-e-3"));
    }

    #[test]
    fn test_build_client_uses_configured_models() {
        let config = BackendConfig {
            base_url: "https://backend.example/api".into(),
            text_model: Some("gpt-4o-mini".into()),
            image_model: None,
        };
        // Construction alone must not touch the network.
        let _client = build_client(&config);
    }
}
