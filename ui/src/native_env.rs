//! `SIGNIN_*` variables that only the native binary reads.
//!
//! The backend settings live in [`signin_business::BusinessConfig`]; these
//! two stand in for what a browser would otherwise provide.

use std::env::vars;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct NativeEnv {
    /// Query string of the page, e.g. `?callback=/dashboard`.
    pub signin_query: Option<String>,
    /// Font file with Hangul glyphs.
    pub signin_font: Option<String>,
}

impl NativeEnv {
    pub fn from_env() -> Result<Self, serde_env::Error> {
        Self::from_vars(vars())
    }

    pub fn from_vars(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, serde_env::Error> {
        let vars = vars
            .into_iter()
            .filter(|(key, _)| key.starts_with("SIGNIN_"));
        serde_env::from_iter(vars)
    }
}
