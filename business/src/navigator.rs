//! Page location as an injectable capability.
//!
//! The login view reads the `callback` query parameter of the page it was
//! opened on and moves the page somewhere else once the backend accepts the
//! credentials. Both go through [`Navigator`] so the flow can run without a
//! browser.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

use log::info;

/// Query parameter that carries the post-login destination.
pub const CALLBACK_PARAM: &str = "callback";

/// Destination when no callback was supplied.
pub const ROOT_PATH: &str = "/";

pub trait Navigator: Send + Sync + Debug {
    /// Query string of the current page, with or without the leading `?`.
    fn query(&self) -> String;

    /// Moves the page to `url`, taken verbatim.
    fn navigate(&self, url: &str);
}

/// Value of the `name` parameter in `query`.
///
/// First occurrence wins and `+` decodes to a space, like
/// `URLSearchParams.get`. Undecodable escapes are kept as written.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode_component(key) == name)
        .map(|(_, value)| decode_component(value))
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| spaced.clone())
}

/// Callback target of the current page, if one is present and non-empty.
pub fn callback_target(navigator: &dyn Navigator) -> Option<String> {
    query_param(&navigator.query(), CALLBACK_PARAM).filter(|target| !target.is_empty())
}

/// Where a successful login sends the page.
pub fn redirect_target(navigator: &dyn Navigator) -> String {
    callback_target(navigator).unwrap_or_else(|| ROOT_PATH.to_owned())
}

/// Navigator backed by memory, for native builds and tests.
///
/// Clones share the same location and history.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    inner: Arc<Mutex<MemoryLocation>>,
}

#[derive(Debug, Default)]
struct MemoryLocation {
    query: String,
    history: Vec<String>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts on a page whose query string is `query`.
    pub fn with_query(query: impl Into<String>) -> Self {
        let navigator = Self::default();
        navigator.set_query(query);
        navigator
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.lock().query = query.into();
    }

    /// Every URL navigated to, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.lock().history.clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.lock().history.last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryLocation> {
        // The location holds plain data; a panic elsewhere leaves it usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Navigator for MemoryNavigator {
    fn query(&self) -> String {
        self.lock().query.clone()
    }

    fn navigate(&self, url: &str) {
        info!("MemoryNavigator: navigating to {url}");
        let mut location = self.lock();
        location.history.push(url.to_owned());
        // A new page has no query of its own
        location.query.clear();
    }
}
