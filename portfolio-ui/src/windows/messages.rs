use std::collections::BTreeSet;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::{FaqIcon, FaqItem};

use crate::api::fetch_json;
use crate::content::{resolve_faq, FAQ_PATH};
use crate::desktop::components::window_chrome::FloatingWindow;
use crate::desktop::hooks::use_loaded;
use crate::desktop::layout::MESSAGES_FRAME;
use crate::desktop::state::WindowKind;

const HEADER_TITLE: &str = " FAQ's";

/// Flip one accordion entry; any number may be open at once.
pub fn toggle_expanded(expanded: &mut BTreeSet<usize>, index: usize) {
    if !expanded.remove(&index) {
        expanded.insert(index);
    }
}

#[component]
pub fn MessagesWindow() -> Element {
    let items = use_loaded(Vec::<FaqItem>::new, || async {
        let fetched = fetch_json::<Vec<FaqItem>>(FAQ_PATH).await;
        if let Err(e) = &fetched {
            debug!("FAQ unavailable, using fallback: {e}");
        }
        resolve_faq(fetched)
    });
    let mut expanded = use_signal(BTreeSet::<usize>::new);

    rsx! {
        FloatingWindow {
            kind: WindowKind::Messages,
            title: "Messages",
            width: MESSAGES_FRAME.width,
            div {
                class: "faq",
                div { style: "margin-bottom: 12px; font-size: 11px; color: rgba(0, 0, 0, 0.6);", "{HEADER_TITLE}" }
                for (index, item) in items().into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "faq-item",
                        button {
                            r#type: "button",
                            class: "faq-question",
                            "aria-expanded": expanded.read().contains(&index),
                            onclick: move |_| toggle_expanded(&mut expanded.write(), index),
                            span {
                                if item.icon == Some(FaqIcon::Star) {
                                    span { style: "color: #facc15; margin-right: 6px;", "★" }
                                }
                                "{item.q}"
                            }
                            span { if expanded.read().contains(&index) { "−" } else { "+" } }
                        }
                        if expanded.read().contains(&index) {
                            div { class: "faq-answer", "{item.a}" }
                        }
                    }
                }
            }
        }
    }
}
