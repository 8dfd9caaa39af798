//! Portfolio desktop server
//!
//! Serves the static `public/` tree and the read-only listings the desktop
//! builds its icons from.

pub mod api;
pub mod app;
pub mod config;
pub mod content;

pub use app::build_app;
pub use config::Config;
