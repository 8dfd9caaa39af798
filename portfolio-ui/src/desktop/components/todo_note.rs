use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::{TodoItem, TodoNote};

use crate::api::fetch_json;
use crate::content::{fallback_todo, resolve_todo, TODO_PATH};
use crate::desktop::geometry::Anchor;
use crate::desktop::hooks::{use_drag, use_loaded};
use crate::desktop::layout::NOTE_ORIGIN;
use crate::desktop::state::DesktopUi;

/// Free-floating wrapper; its offset lives in the desktop state.
#[component]
pub fn DraggableNote(children: Element) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let drag = use_drag(Anchor::TopLeft);
    let offset = ui.read().note_offset();

    rsx! {
        div {
            class: "note",
            style: "left: {NOTE_ORIGIN.x}px; top: {NOTE_ORIGIN.y}px; transform: translate({offset.x}px, {offset.y}px);",
            onpointerdown: move |e| {
                e.prevent_default();
                let from = ui.peek().note_offset();
                drag.start(&e, from, move |next| ui.write().set_note_offset(next));
            },
            {children}
        }
    }
}

#[component]
pub fn ToDoNote() -> Element {
    let note = use_loaded(fallback_todo, || async {
        let fetched = fetch_json::<TodoNote>(TODO_PATH).await;
        if let Err(e) = &fetched {
            debug!("To-do note unavailable, using fallback: {e}");
        }
        resolve_todo(fetched)
    });
    let (title, items): (String, Vec<TodoItem>) = note();

    rsx! {
        DraggableNote {
            div {
                class: "todo-note",
                p { style: "font-weight: 700; margin-bottom: 8px;", "{title}" }
                for (index, item) in items.into_iter().enumerate() {
                    p {
                        key: "{index}",
                        class: if item.done { "done" } else { "" },
                        "• {item.text}"
                    }
                }
            }
        }
    }
}
