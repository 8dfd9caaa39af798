use dioxus::prelude::*;

use crate::content::is_pdf;
use crate::desktop::components::window_chrome::FloatingWindow;
use crate::desktop::layout::WEBVIEW_FRAME;
use crate::desktop::state::{DesktopUi, WindowKind, WindowSpec};

const IFRAME_SANDBOX: &str = "allow-forms allow-modals allow-popups allow-presentation allow-same-origin allow-scripts allow-downloads";

/// Embedded page or PDF with minimize and maximize.
#[component]
pub fn WebViewWindow() -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let Some((url, title, maximized)) = ui.read().window(WindowKind::WebView).and_then(|window| {
        match &window.spec {
            WindowSpec::WebView { url, title } => Some((url.clone(), title.clone(), window.maximized)),
            _ => None,
        }
    }) else {
        return rsx! {};
    };

    let actions = rsx! {
        button {
            r#type: "button",
            class: "chrome-button",
            "aria-label": "Minimize window",
            onclick: move |_| ui.write().set_minimized(WindowKind::WebView, true),
            "−"
        }
        button {
            r#type: "button",
            class: "chrome-button",
            "aria-label": if maximized { "Restore window" } else { "Maximize window" },
            onclick: move |_| ui.write().toggle_maximized(WindowKind::WebView),
            if maximized { "⤡" } else { "⤢" }
        }
    };

    rsx! {
        FloatingWindow {
            kind: WindowKind::WebView,
            title: title.clone(),
            width: WEBVIEW_FRAME.width,
            height: WEBVIEW_FRAME.height,
            controls: true,
            actions,
            div {
                class: "webview-body",
                if is_pdf(&url) {
                    object {
                        data: "{url}",
                        r#type: "application/pdf",
                        iframe { src: "{url}", title: "{title}" }
                    }
                } else {
                    iframe {
                        src: "{url}",
                        title: "{title}",
                        "sandbox": IFRAME_SANDBOX,
                    }
                }
            }
        }
    }
}
