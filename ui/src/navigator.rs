//! Navigator backed by `window.location`.

use log::error;
use signin_business::Navigator;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn query(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default()
    }

    fn navigate(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            error!("BrowserNavigator: no window to navigate to {url}");
            return;
        };

        if let Err(err) = window.location().set_href(url) {
            error!("BrowserNavigator: failed to navigate to {url}: {err:?}");
        }
    }
}
