use std::env::vars;

use log::info;
use serde::Deserialize;
use ustr::Ustr;

use crate::{ConfigError, Locale};

/// Path of the credential endpoint, relative to the API base.
pub const LOGIN_PATH: &str = "/auth/user/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    /// Scheme and host of the backend. Empty means same origin.
    pub api_base_url: String,
    pub login_path: String,
    pub locale: Locale,
}

// Intermediate struct so every variable can be left unset.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    signin_api_base_url: Option<String>,
    signin_login_path: Option<String>,
    signin_locale: Option<Locale>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Full URL the credentials are posted to.
    pub fn login_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(&format!("{base}{}", self.login_path))
    }

    /// Reads `SIGNIN_API_BASE_URL`, `SIGNIN_LOGIN_PATH` and `SIGNIN_LOCALE`,
    /// keeping the build defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let vars = vars
            .into_iter()
            .filter(|(key, _)| key.as_ref().starts_with("SIGNIN_"))
            .map(|(key, value)| (key.as_ref().to_owned(), value.as_ref().to_owned()));
        let raw: RawConfig = serde_env::from_iter(vars)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            signin_api_base_url,
            signin_login_path,
            signin_locale,
        } = raw;

        let mut config = Self::default();

        if let Some(base) = signin_api_base_url {
            info!("Using provided SIGNIN_API_BASE_URL: {base}");
            config.api_base_url = base;
        }

        if let Some(path) = signin_login_path {
            if !path.starts_with('/') {
                return Err(ConfigError::InvalidLoginPath(path));
            }
            config.login_path = path;
        }

        if let Some(locale) = signin_locale {
            config.locale = locale;
        }

        Ok(config)
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            // The web build is served by the backend it talks to.
            api_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else {
                "http://localhost:8080".to_owned()
            },
            login_path: LOGIN_PATH.to_owned(),
            locale: Locale::default(),
        }
    }
}
