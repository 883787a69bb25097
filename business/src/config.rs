use std::env::vars;

use log::info;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::users::UserId;

/// Where the users REST endpoint lives.
///
/// An empty `api_base_url` means "same origin": every URL stays relative,
/// which is what the web build uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    roster_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `ROSTER_API_BASE_URL` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    fn from_vars<S: AsRef<str>>(
        vars: impl IntoIterator<Item = (S, S)>,
    ) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let api_base_url = raw
            .roster_api_base_url
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or_default();

        if api_base_url.is_empty() {
            info!("ROSTER_API_BASE_URL not set, using same-origin URLs");
        } else {
            info!("Using users API at {api_base_url}");
        }

        Ok(Self { api_base_url })
    }

    /// Resolves a path (or an absolute URL, left untouched) against the base URL.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        let path = if path.starts_with('/') {
            path.to_owned()
        } else {
            format!("/{path}")
        };
        format!("{}{path}", self.api_base_url)
    }

    /// `/users`
    pub fn users_url(&self) -> String {
        self.resolve("/users")
    }

    /// `/users/{id}`, with the id percent-encoded as one path segment.
    pub fn user_url(&self, id: &UserId) -> String {
        let segment = urlencoding::encode(&id.to_string()).into_owned();
        self.resolve(&format!("/users/{segment}"))
    }
}
