//! Client-side configuration.
//!
//! The server half of the configuration (site address, site root, bundle name)
//! comes from `[package.metadata.leptos]` through `leptos::get_configuration`.
//! The browser bundle cannot read files, so the REST backend location is baked
//! in at compile time from `DINING_API_BASE_URL` and `DINING_API_CREDENTIALS`.

use web_sys::RequestCredentials;

/// Cookie policy for REST calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialMode {
    #[default]
    Include,
    SameOrigin,
    Omit,
}

impl CredentialMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "include" => Some(CredentialMode::Include),
            "same-origin" | "same_origin" => Some(CredentialMode::SameOrigin),
            "omit" => Some(CredentialMode::Omit),
            _ => None,
        }
    }

    pub fn to_request_credentials(self) -> RequestCredentials {
        match self {
            CredentialMode::Include => RequestCredentials::Include,
            CredentialMode::SameOrigin => RequestCredentials::SameOrigin,
            CredentialMode::Omit => RequestCredentials::Omit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Prefix for every REST path. Empty means same origin as the page.
    pub api_base_url: String,
    pub credentials: CredentialMode,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, credentials: CredentialMode) -> Self {
        let api_base_url = api_base_url.into().trim_end_matches('/').to_string();
        Self {
            api_base_url,
            credentials,
        }
    }

    /// Reads the values captured when the bundle was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("DINING_API_BASE_URL"),
            option_env!("DINING_API_CREDENTIALS"),
        )
    }

    pub fn from_values(base_url: Option<&str>, credentials: Option<&str>) -> Self {
        let credentials = match credentials {
            Some(raw) => CredentialMode::parse(raw).unwrap_or_else(|| {
                leptos::logging::warn!(
                    "[CONFIG] Unknown credential mode '{}', falling back to include",
                    raw
                );
                CredentialMode::Include
            }),
            None => CredentialMode::Include,
        };
        Self::new(base_url.unwrap_or_default(), credentials)
    }

    /// Joins the base URL with an absolute API path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}{}", self.api_base_url, path)
    }
}
