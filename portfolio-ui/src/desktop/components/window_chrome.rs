//! Shared window furniture: backdrop, title bar and the draggable frame.

use dioxus::prelude::*;

use crate::desktop::geometry::Anchor;
use crate::desktop::hooks::use_drag;
use crate::desktop::state::{DesktopUi, WindowKind};
use crate::interop::{next_animation_frame, now_ms};

/// Flip the window from `Entering` to `Open` on the first frame after mount,
/// which starts its CSS entry transition.
pub fn use_window_entry(kind: WindowKind) {
    let mut ui = use_context::<Signal<DesktopUi>>();
    use_hook(move || {
        spawn(async move {
            next_animation_frame().await;
            ui.write().animation_frame(kind);
        });
    });
}

/// `(z-index, shown)` of an open window; hidden windows sit at the base.
pub fn window_stacking(ui: &DesktopUi, kind: WindowKind) -> (u32, bool) {
    let z = ui.z_index(kind).unwrap_or(crate::desktop::state::WINDOW_BASE_Z);
    let shown = ui
        .window(kind)
        .is_some_and(|window| window.lifecycle.is_shown());
    (z, shown)
}

/// Click-to-close layer under a window. `clear` keeps it invisible.
#[component]
pub fn Backdrop(kind: WindowKind, z: u32, shown: bool, #[props(default)] clear: bool) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let class = match (clear, shown) {
        (true, _) => "backdrop clear",
        (false, true) => "backdrop shown",
        (false, false) => "backdrop",
    };

    rsx! {
        div {
            class,
            style: "z-index: {z};",
            onclick: move |_| {
                ui.write().backdrop_click(kind, now_ms());
            },
        }
    }
}

/// Title bar with traffic lights. Yellow and green do nothing unless
/// handlers are given.
#[component]
pub fn WindowChrome(
    title: String,
    on_drag_start: EventHandler<PointerEvent>,
    on_close: EventHandler<()>,
    #[props(default)] on_minimize: EventHandler<()>,
    #[props(default)] on_maximize: EventHandler<()>,
    actions: Option<Element>,
) -> Element {
    rsx! {
        div {
            class: "chrome",
            onpointerdown: move |e| on_drag_start.call(e),
            div {
                class: "lights",
                button {
                    r#type: "button",
                    class: "light red",
                    "aria-label": "Close",
                    onpointerdown: move |e| e.stop_propagation(),
                    onclick: move |_| on_close.call(()),
                }
                button {
                    r#type: "button",
                    class: "light yellow",
                    "aria-label": "Minimize",
                    onpointerdown: move |e| e.stop_propagation(),
                    onclick: move |_| on_minimize.call(()),
                }
                button {
                    r#type: "button",
                    class: "light green",
                    "aria-label": "Maximize",
                    onpointerdown: move |e| e.stop_propagation(),
                    onclick: move |_| on_maximize.call(()),
                }
            }
            p { class: "title", "{title}" }
            div {
                class: "actions",
                onpointerdown: move |e| e.stop_propagation(),
                {actions}
                button {
                    r#type: "button",
                    class: "chrome-button",
                    "aria-label": "Close window",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
        }
    }
}

/// A draggable window with chrome and a backdrop, positioned from the
/// desktop state. Minimize and maximize are offered when `controls` is set.
#[component]
pub fn FloatingWindow(
    kind: WindowKind,
    title: String,
    width: f64,
    height: Option<f64>,
    #[props(default)] controls: bool,
    actions: Option<Element>,
    children: Element,
) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let drag = use_drag(Anchor::TopLeft);
    use_window_entry(kind);

    let Some(window) = ui.read().window(kind).cloned() else {
        return rsx! {};
    };
    let (z, shown) = window_stacking(&ui.read(), kind);

    if window.minimized {
        return rsx! {
            button {
                r#type: "button",
                class: "restore-chip",
                style: "z-index: {z};",
                onclick: move |_| ui.write().set_minimized(kind, false),
                "{title} — Restore"
            }
        };
    }

    let frame_style = if window.maximized {
        "left: 20px; top: 20px; width: calc(100vw - 40px); height: calc(100vh - 60px);".to_string()
    } else {
        let height = height.map(|h| format!(" height: {h}px;")).unwrap_or_default();
        format!(
            "left: {}px; top: {}px; width: {width}px; max-width: 90vw;{height}",
            window.position.x, window.position.y
        )
    };
    let maximized = window.maximized;

    let on_drag_start = move |e: PointerEvent| {
        if maximized {
            return;
        }
        e.prevent_default();
        let from = ui.peek().position(kind).unwrap_or_default();
        drag.start(&e, from, move |next| ui.write().set_position(kind, next));
    };

    let (on_minimize, on_maximize) = if controls {
        (
            EventHandler::new(move |_: ()| ui.write().set_minimized(kind, true)),
            EventHandler::new(move |_: ()| ui.write().toggle_maximized(kind)),
        )
    } else {
        (EventHandler::default(), EventHandler::default())
    };
    let actions = actions.unwrap_or_else(|| rsx! {});

    rsx! {
        Backdrop { kind, z: z - 1, shown }
        div {
            class: if shown { "window shown" } else { "window" },
            role: "dialog",
            "aria-modal": "true",
            style: "{frame_style} z-index: {z};",
            onpointerdown: move |_| {
                let on_top = ui.peek().windows().last().map(|w| w.kind()) == Some(kind);
                if !on_top {
                    ui.write().bring_to_front(kind);
                }
            },
            WindowChrome {
                title: title.clone(),
                on_drag_start,
                on_close: move |_| {
                    ui.write().close(kind);
                },
                on_minimize,
                on_maximize,
                actions,
            }
            {children}
        }
    }
}
