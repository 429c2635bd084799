mod login;

pub use login::{login_widget, perform_login, poll_login_result};
