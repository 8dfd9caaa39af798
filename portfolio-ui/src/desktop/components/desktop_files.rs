//! Fixed icons on the left of the desktop plus the draggable "Don't Look" bin.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::Shortcut;

use crate::api::fetch_shortcuts;
use crate::content::RESUME_PDF_PATH;
use crate::desktop::dont_look::{dont_look_page, DontLookReaction, CLOUD_VISIBLE_MS, PAGE_TITLE};
use crate::desktop::geometry::{Anchor, Position};
use crate::desktop::hooks::{use_drag, use_loaded};
use crate::desktop::layout::{
    ABOUT_ICON_POSITION, FOLDER_ICON_URL, RESUME_ICON_POSITION, SHORTCUT_SLOTS,
};
use crate::desktop::state::{DesktopUi, IconId, WindowSpec};
use crate::interop::{now_ms, sleep_ms};

const RESUME_ICON_URL: &str = "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/object/public/test-clones/7c0c911a-1ae7-40dd-8466-7ca3af5221e9-inikasdesktop-framer-website/assets/icons/RHAvQg2vnbtBKRG0ph3erPEvgb0-24.png";
const DONT_LOOK_ICON_URL: &str = "https://slelguoygbfzlpylpxfs.supabase.co/storage/v1/object/public/test-clones/7c0c911a-1ae7-40dd-8466-7ca3af5221e9-inikasdesktop-framer-website/assets/icons/AbIAp0qW5rYTqOKWfx9xlOy8Pio-25.png";

/// The cloud hangs above and slightly right of the bin.
const CLOUD_OFFSET: Position = Position::new(-40.0, -44.0);

/// Glyph-or-image tile with its label underneath.
#[component]
fn ItemFace(label: String, children: Element) -> Element {
    rsx! {
        div { class: "glyph", {children} }
        p { class: "desktop-label", "{label}" }
    }
}

#[component]
pub fn DesktopFiles() -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let shortcuts = use_loaded(Vec::<Shortcut>::new, || async {
        fetch_shortcuts().await.unwrap_or_else(|e| {
            debug!("Shortcuts unavailable: {e}");
            Vec::new()
        })
    });

    rsx! {
        button {
            r#type: "button",
            class: "desktop-item",
            style: "left: {RESUME_ICON_POSITION.x}px; top: {RESUME_ICON_POSITION.y}px;",
            onclick: move |_| {
                ui.write().open(WindowSpec::web_view(RESUME_PDF_PATH, "Resume.pdf"), now_ms());
            },
            ItemFace {
                label: "Resume.pdf",
                img { src: RESUME_ICON_URL, alt: "Resume document icon" }
            }
        }

        button {
            r#type: "button",
            class: "desktop-item",
            style: "left: {ABOUT_ICON_POSITION.x}px; top: {ABOUT_ICON_POSITION.y}px;",
            onclick: move |_| {
                ui.write().toggle(WindowSpec::AboutMe, now_ms());
            },
            ItemFace {
                label: "About Me",
                img { src: FOLDER_ICON_URL, alt: "About Me folder icon" }
            }
        }

        DontLookBin {}

        for (shortcut, slot) in shortcuts().into_iter().zip(SHORTCUT_SLOTS) {
            ShortcutItem { key: "{shortcut.label}-{shortcut.url}", shortcut, slot }
        }
    }
}

#[component]
fn ShortcutItem(shortcut: Shortcut, slot: Position) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let style = format!("left: {}px; top: {}px;", slot.x, slot.y);

    if !shortcut.embedded {
        return rsx! {
            a {
                class: "desktop-item",
                style: "{style}",
                href: "{shortcut.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                ItemFace { label: shortcut.label.clone(), "🔗" }
            }
        };
    }

    let glyph = if shortcut.url.to_lowercase().ends_with(".txt") {
        "📄"
    } else {
        "📁"
    };
    let label = shortcut.label.clone();
    let icon = shortcut.icon.clone();
    let open = move |_| {
        ui.write().open(
            WindowSpec::web_view(shortcut.url.clone(), shortcut.label.clone()),
            now_ms(),
        );
    };

    rsx! {
        button {
            r#type: "button",
            class: "desktop-item",
            style: "{style}",
            onclick: open,
            ItemFace {
                label: label.clone(),
                if let Some(icon) = icon {
                    img { src: "{icon}", alt: "{label} icon" }
                } else {
                    "{glyph}"
                }
            }
        }
    }
}

/// Two clouds, then a page; draggable along the right edge.
#[component]
fn DontLookBin() -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let drag = use_drag(Anchor::TopRight);

    let (position, cloud) = {
        let ui = ui.read();
        (ui.icon_position(&IconId::DontLook), ui.dont_look.cloud())
    };
    let cloud_right = position.x + CLOUD_OFFSET.x;
    let cloud_top = position.y + CLOUD_OFFSET.y;

    let drag_for_down = drag.clone();
    let on_pointer_down = move |e: PointerEvent| {
        e.prevent_default();
        let from = ui.peek().icon_position(&IconId::DontLook);
        drag_for_down.start(&e, from, move |next| {
            ui.write().set_icon_position(IconId::DontLook, next);
        });
    };

    let on_click = move |_| {
        if drag.suppresses_click() {
            return;
        }
        let reaction = ui.write().dont_look.click();
        match reaction {
            DontLookReaction::Cloud { token, .. } => {
                spawn(async move {
                    sleep_ms(CLOUD_VISIBLE_MS).await;
                    ui.write().dont_look.hide_cloud(token);
                });
            }
            DontLookReaction::OpenWindow => {
                ui.write()
                    .open(WindowSpec::web_view(dont_look_page(), PAGE_TITLE), now_ms());
            }
        }
    };

    rsx! {
        button {
            r#type: "button",
            class: "desktop-item",
            style: "right: {position.x}px; top: {position.y}px; touch-action: none;",
            onpointerdown: on_pointer_down,
            onclick: on_click,
            ItemFace {
                label: "Don’t Look",
                img { src: DONT_LOOK_ICON_URL, alt: "Folder with a preview image titled Don't Look" }
            }
        }
        if let Some(text) = cloud {
            div {
                class: "cloud",
                style: "right: {cloud_right}px; top: {cloud_top}px;",
                "{text}"
            }
        }
    }
}
