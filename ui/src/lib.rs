#![warn(clippy::all, rust_2018_idioms)]

//! egui front end of the sign-in view, for native and web builds.

pub mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod native_env;
#[cfg(target_arch = "wasm32")]
pub mod navigator;
pub mod state;
pub mod utils;
pub mod widgets;

pub use app::SigninApp;
