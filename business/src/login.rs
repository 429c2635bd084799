//! The credential submission and how its answer reaches the user.
//!
//! ## Flow
//!
//! 1. [`submit_login`] posts the credentials to the login endpoint
//! 2. [`resolve_login`] turns the answer into a redirect target or an
//!    inline error message
//! 3. [`finish_login`] applies that to the form and the page
//!
//! A 2xx answer is a success regardless of its body. Any other status is a
//! rejection whose JSON body may carry a `message`. A request that fails, or a
//! rejection whose body is not JSON or is `null`, is reported with the
//! network-error line.

use log::{error, info, warn};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    BusinessConfig, LoginError, LoginForm, LoginRequest, Messages, Navigator, http::Client,
    redirect_target,
};

/// User record the backend returns with a 2xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignedInUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// 2xx. `user` is present when the body was the expected user record.
    Accepted { user: Option<SignedInUser> },
    /// Any other status. `message` is the usable `message` of the JSON body.
    Rejected { status: u16, message: Option<String> },
}

/// What the view does once a submission has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginResolution {
    Redirect(String),
    ShowError(String),
}

/// Posts the credentials once.
pub async fn submit_login(
    config: &BusinessConfig,
    request: &LoginRequest,
) -> Result<LoginOutcome, LoginError> {
    let url = config.login_url();
    info!("submit_login: signing in '{}'", request.email);

    let response = Client::post(url.as_str())
        .json(request)
        .map_err(LoginError::Encode)?
        .send()
        .await?;

    if response.is_success() {
        let user = response.json::<SignedInUser>().ok();
        match &user {
            Some(user) => info!("submit_login: signed in as '{}'", user.username),
            None => info!("submit_login: accepted with status {}", response.status),
        }
        return Ok(LoginOutcome::Accepted { user });
    }

    let status = response.status;
    let body: Value = response
        .json()
        .map_err(|source| LoginError::MalformedBody { status, source })?;

    // A null body has no fields to look a message up in
    if body.is_null() {
        return Err(LoginError::NullBody { status });
    }

    let message = rejection_message(&body);
    warn!("submit_login: rejected with status {status}: {message:?}");

    Ok(LoginOutcome::Rejected { status, message })
}

/// The `message` of a rejection body, when it is something worth showing.
///
/// Empty strings, `null`, `false` and zero count as absent; other scalars are
/// shown as written. Non-null bodies that are not objects have no message.
fn rejection_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::String(message) if !message.is_empty() => Some(message.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// Decides between redirect and error line.
///
/// The callback target is read from `navigator` now, not when the form was
/// opened.
pub fn resolve_login(
    result: &Result<LoginOutcome, LoginError>,
    messages: &Messages,
    navigator: &dyn Navigator,
) -> LoginResolution {
    match result {
        Ok(LoginOutcome::Accepted { .. }) => LoginResolution::Redirect(redirect_target(navigator)),
        Ok(LoginOutcome::Rejected { message, .. }) => LoginResolution::ShowError(
            message
                .clone()
                .unwrap_or_else(|| messages.login_failed.to_owned()),
        ),
        Err(err) => {
            error!("resolve_login: {err}");
            LoginResolution::ShowError(messages.network_error.to_owned())
        }
    }
}

/// Applies a completed submission to the form and the page.
///
/// Exactly one of navigation or error line happens.
pub fn finish_login(
    form: &mut LoginForm,
    result: &Result<LoginOutcome, LoginError>,
    messages: &Messages,
    navigator: &dyn Navigator,
) -> LoginResolution {
    let resolution = resolve_login(result, messages, navigator);

    match &resolution {
        LoginResolution::Redirect(target) => {
            form.submit_succeeded(target.as_str());
            navigator.navigate(target);
        }
        LoginResolution::ShowError(message) => form.submit_failed(message.as_str()),
    }

    resolution
}
