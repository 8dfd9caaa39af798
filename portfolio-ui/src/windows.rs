//! The floating windows and the layer that stacks them.

use dioxus::prelude::*;

mod about_me;
mod contact;
mod gallery;
mod messages;
mod projects;
mod webview;

pub use about_me::AboutMeWindow;
pub use contact::ContactWindow;
pub use gallery::GalleryWindow;
pub use messages::MessagesWindow;
pub use projects::ProjectsWindow;
pub use webview::WebViewWindow;

use crate::desktop::state::{DesktopUi, WindowKind};

/// Every open window, keyed by kind so a window keeps its component state
/// while others open and close around it.
#[component]
pub fn WindowLayer() -> Element {
    let ui = use_context::<Signal<DesktopUi>>();
    let kinds: Vec<WindowKind> = ui.read().windows().iter().map(|window| window.kind()).collect();

    rsx! {
        for kind in kinds {
            WindowSlot { key: "{kind:?}", kind }
        }
    }
}

#[component]
fn WindowSlot(kind: WindowKind) -> Element {
    match kind {
        WindowKind::AboutMe => rsx! { AboutMeWindow {} },
        WindowKind::Contact => rsx! { ContactWindow {} },
        WindowKind::Gallery => rsx! { GalleryWindow {} },
        WindowKind::Messages => rsx! { MessagesWindow {} },
        WindowKind::Projects => rsx! { ProjectsWindow {} },
        WindowKind::WebView => rsx! { WebViewWindow {} },
    }
}
