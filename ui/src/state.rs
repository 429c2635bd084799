use std::sync::Arc;

use flume::{Receiver, Sender};
use log::warn;
use signin_business::{
    BusinessConfig, Locale, LoginError, LoginForm, LoginOutcome, MemoryNavigator, Navigator,
};

/// Completed submission, as sent back from the request task.
pub type LoginResult = Result<LoginOutcome, LoginError>;

/// Everything the login view owns.
pub struct State {
    pub form: LoginForm,
    pub config: BusinessConfig,
    pub navigator: Arc<dyn Navigator>,
    /// Sender handed to every submission task.
    pub login_result_sender: Sender<LoginResult>,
    /// Drained by the frame loop.
    pub login_result_receiver: Receiver<LoginResult>,
}

impl State {
    pub fn new(config: BusinessConfig, navigator: Arc<dyn Navigator>) -> Self {
        let (login_result_sender, login_result_receiver) = flume::unbounded();

        Self {
            form: LoginForm::new(),
            config,
            navigator,
            login_result_sender,
            login_result_receiver,
        }
    }

    /// State talking to `base_url` in English, with a navigator the test keeps
    /// a handle on.
    pub fn test(base_url: String, navigator: MemoryNavigator) -> Self {
        Self::new(
            BusinessConfig::new(base_url).with_locale(Locale::En),
            Arc::new(navigator),
        )
    }
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|err| {
            warn!("Ignoring sign-in environment: {err}");
            BusinessConfig::default()
        });

        Self::new(config, default_navigator())
    }
}

#[cfg(target_arch = "wasm32")]
fn default_navigator() -> Arc<dyn Navigator> {
    Arc::new(crate::navigator::BrowserNavigator)
}

/// Native builds have no page URL; `SIGNIN_QUERY` stands in for its query.
#[cfg(not(target_arch = "wasm32"))]
fn default_navigator() -> Arc<dyn Navigator> {
    let query = match crate::native_env::NativeEnv::from_env() {
        Ok(native) => native.signin_query.unwrap_or_default(),
        Err(err) => {
            warn!("Ignoring SIGNIN_QUERY: {err}");
            String::new()
        }
    };
    Arc::new(MemoryNavigator::with_query(query))
}
