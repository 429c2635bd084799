//! Fixed user-facing strings of the login view.
//!
//! The view only ever shows these strings or a message supplied by the
//! backend, so a locale is just a choice between static tables.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "ko")]
    Ko,
    #[serde(rename = "en")]
    En,
}

/// String table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// Heading of the form.
    pub title: &'static str,
    /// Placeholder of the identifier field.
    pub identifier_hint: &'static str,
    /// Placeholder of the secret field.
    pub secret_hint: &'static str,
    /// Label of the submit control.
    pub submit: &'static str,
    /// Shown when the backend rejects the credentials without a message.
    pub login_failed: &'static str,
    /// Shown when the request never produced a usable response.
    pub network_error: &'static str,
    /// Shown after navigating on targets that have no page to leave.
    pub continuing_to: &'static str,
}

const KO: Messages = Messages {
    title: "로그인",
    identifier_hint: "사용자 이름",
    secret_hint: "비밀번호",
    submit: "로그인",
    login_failed: "로그인에 실패했습니다.",
    network_error: "네트워크 오류가 발생했습니다. 잠시 후 다시 시도해주세요.",
    continuing_to: "이동 중:",
};

const EN: Messages = Messages {
    title: "Sign in",
    identifier_hint: "Username",
    secret_hint: "Password",
    submit: "Log in",
    login_failed: "Login failed.",
    network_error: "A network error occurred. Please try again later.",
    continuing_to: "Continuing to",
};

impl Locale {
    pub const fn messages(self) -> &'static Messages {
        match self {
            Self::Ko => &KO,
            Self::En => &EN,
        }
    }
}
