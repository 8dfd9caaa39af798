//! Desktop surface: pure interaction state plus the components drawing it.

use dioxus::prelude::*;

pub mod components;
pub mod dock;
pub mod dont_look;
pub mod drag;
pub mod focus;
pub mod geometry;
pub mod hooks;
pub mod layout;
pub mod lifecycle;
mod shell;
pub mod state;
mod styles;

pub use shell::DesktopShell;

#[component]
pub fn Desktop() -> Element {
    rsx! {
        DesktopShell {}
    }
}
