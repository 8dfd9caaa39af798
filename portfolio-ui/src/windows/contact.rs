use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::ContactInfo;

use crate::api::fetch_json;
use crate::content::{avatar_src, contact_href, resolve_contact, CONTACT_PATH};
use crate::desktop::components::window_chrome::{use_window_entry, window_stacking, Backdrop};
use crate::desktop::geometry::Anchor;
use crate::desktop::hooks::{use_drag, use_loaded};
use crate::desktop::layout::contact_card_size;
use crate::desktop::state::{DesktopUi, WindowKind};
use crate::interop::open_external;

/// Profile card without chrome; the whole card is the drag handle.
#[component]
pub fn ContactWindow() -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let drag = use_drag(Anchor::TopLeft);
    use_window_entry(WindowKind::Contact);

    let info = use_loaded(
        || None::<ContactInfo>,
        || async {
            let fetched = fetch_json::<ContactInfo>(CONTACT_PATH).await;
            if let Err(e) = &fetched {
                debug!("Contact card unavailable, using fallback: {e}");
            }
            Some(resolve_contact(fetched))
        },
    );

    let (z, shown) = window_stacking(&ui.read(), WindowKind::Contact);
    let position = ui.read().position(WindowKind::Contact).unwrap_or_default();
    let (width, height) = contact_card_size(ui.read().viewport());

    let on_pointer_down = move |e: PointerEvent| {
        e.prevent_default();
        let from = ui.peek().position(WindowKind::Contact).unwrap_or_default();
        drag.start(&e, from, move |next| {
            ui.write().set_position(WindowKind::Contact, next);
        });
    };

    rsx! {
        Backdrop { kind: WindowKind::Contact, z: z - 1, shown }
        div {
            class: if shown { "window bare shown" } else { "window bare" },
            style: "left: {position.x}px; top: {position.y}px; z-index: {z};",
            onpointerdown: on_pointer_down,
            if let Some(info) = info() {
                ContactCard { info, width, height }
            }
        }
    }
}

#[component]
fn ContactCard(info: ContactInfo, width: f64, height: f64) -> Element {
    let avatar = avatar_src(&info);
    let handle = info.handle.clone().unwrap_or_default();
    let status = info.status.clone().unwrap_or_default();
    let contact_text = info
        .contact_text
        .clone()
        .unwrap_or_else(|| "Contact".to_string());
    let contact_url = info.contact_url.clone();

    rsx! {
        div {
            class: "contact-card",
            style: "width: {width}px; height: {height}px;",
            img { src: "{avatar}", alt: "{info.name}" }
            h2 { "{info.name}" }
            p { class: "subtitle", "{info.title}" }
            div {
                class: "contact-footer",
                div {
                    if !handle.is_empty() {
                        div { style: "font-weight: 600;", "@{handle}" }
                    }
                    if !status.is_empty() {
                        div { style: "opacity: 0.8;", "{status}" }
                    }
                }
                button {
                    r#type: "button",
                    class: "contact-button",
                    onpointerdown: move |e| e.stop_propagation(),
                    onclick: move |_| {
                        if let Some(url) = contact_url.as_deref() {
                            open_external(&contact_href(url));
                        }
                    },
                    "{contact_text}"
                }
            }
        }
    }
}
