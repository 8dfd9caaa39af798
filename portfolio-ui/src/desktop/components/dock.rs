use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_web::WebEventExt;

use crate::desktop::dock::{
    slot_centers, step_slots, DockApp, DockIcon, Magnification, SlotSprings, Spring, DOCK_APPS,
    ICON_BASE_SIZE,
};
use crate::desktop::state::{DesktopUi, WindowSpec};
use crate::interop::{element_left, mouse_point, next_animation_frame, now_ms};

const DOCK_BACKGROUND_URL: &str = "https://framerusercontent.com/images/iq88Gse4pPjrFei3Nusiq1wA.png";
const BADGE_URL: &str = "https://www.linkedin.com/in/sameermistri/";

#[component]
pub fn Dock() -> Element {
    let ui = use_context::<Signal<DesktopUi>>();
    let mut dock_element = use_signal(|| None::<web_sys::Element>);
    // Pointer x relative to the dock's left edge; `None` while outside.
    let mut pointer = use_signal(|| None::<f64>);
    let mut springs = use_signal(|| {
        DOCK_APPS
            .iter()
            .map(|_| (Spring::dock(ICON_BASE_SIZE), Spring::dock(0.0)))
            .collect::<Vec<SlotSprings>>()
    });

    // Frames are only requested while some spring is moving.
    let animating = use_hook(|| Rc::new(Cell::new(false)));
    let wake = move || {
        if animating.replace(true) {
            return;
        }
        let animating = animating.clone();
        spawn(async move {
            let magnification = Magnification::default();
            let centers = slot_centers(DOCK_APPS, ICON_BASE_SIZE);
            let mut last = now_ms();
            loop {
                next_animation_frame().await;
                let now = now_ms();
                let dt = now - last;
                last = now;

                let mut next = springs.peek().clone();
                let moving = step_slots(&mut next, &centers, *pointer.peek(), magnification, dt);
                if !moving {
                    break;
                }
                springs.set(next);
            }
            animating.set(false);
        });
    };
    let wake_on_leave = wake.clone();

    let slots = springs.read().clone();

    rsx! {
        footer {
            class: "dock-bar",
            nav {
                class: "dock",
                style: "background-image: url({DOCK_BACKGROUND_URL}); background-size: cover;",
                onmounted: move |e: MountedEvent| {
                    if let Some(element) = e.data().try_as_web_event() {
                        dock_element.set(Some(element));
                    }
                },
                onmousemove: move |e: MouseEvent| {
                    let left = dock_element.peek().as_ref().map(element_left);
                    if let Some(left) = left {
                        pointer.set(Some(mouse_point(&e).x - left));
                        wake();
                    }
                },
                onmouseleave: move |_| {
                    pointer.set(None);
                    wake_on_leave();
                },

                for (app, (size, lift)) in DOCK_APPS.iter().zip(slots) {
                    if app.is_divider() {
                        div { key: "{app.id}", class: "dock-divider" }
                    } else {
                        DockSlot {
                            key: "{app.id}",
                            app: *app,
                            size: size.value(),
                            lift: lift.value(),
                            running: app.dot || app.launches().is_some_and(|kind| ui.read().is_open(kind)),
                        }
                    }
                }
            }
            a {
                class: "dock-badge",
                href: BADGE_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                "Made by Sam"
            }
        }
    }
}

#[component]
fn DockSlot(app: DockApp, size: f64, lift: f64, running: bool) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let launches = app.launches();
    let label = if launches.is_some() { "open me" } else { app.label };

    let icon = match app.icon {
        DockIcon::Image(src) => rsx! { img { src, alt: app.label } },
        DockIcon::Spotify => rsx! { div { class: "dock-spotify", "♫" } },
        DockIcon::Divider => rsx! {},
    };

    let on_click = move |_| {
        if let Some(spec) = launches.and_then(WindowSpec::plain) {
            ui.write().toggle(spec, now_ms());
        }
    };

    rsx! {
        div {
            class: "dock-slot",
            div {
                class: "dock-icon",
                role: "button",
                "aria-label": app.label,
                style: "width: {size}px; height: {size}px; transform: translateX(-50%) translateY({lift}px);",
                onclick: on_click,
                {icon}
                span { class: "dock-label", "{label}" }
            }
            if running {
                span { class: "dock-dot" }
            }
        }
    }
}
