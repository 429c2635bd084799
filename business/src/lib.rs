//! Platform-neutral side of the sign-in view: form state, the credential
//! request, page navigation and configuration.

mod config;
mod error;
pub mod http;
mod login;
mod login_state;
mod messages;
mod navigator;

pub use config::{BusinessConfig, LOGIN_PATH};
pub use error::{ConfigError, LoginError};
pub use http::HttpError;
pub use login::{
    LoginOutcome, LoginResolution, SignedInUser, finish_login, resolve_login, submit_login,
};
pub use login_state::{LoginField, LoginForm, LoginRequest, LoginStatus};
pub use messages::{Locale, Messages};
pub use navigator::{
    CALLBACK_PARAM, MemoryNavigator, Navigator, ROOT_PATH, callback_target, query_param,
    redirect_target,
};
