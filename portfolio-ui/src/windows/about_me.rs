//! Three independently draggable panels: two photos and a text file.

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;

use crate::api::{fetch_text, resource_exists};
use crate::content::ABOUT_TEXT_PATH;
use crate::desktop::components::window_chrome::{use_window_entry, window_stacking, Backdrop, WindowChrome};
use crate::desktop::focus::AboutPanel;
use crate::desktop::geometry::Anchor;
use crate::desktop::hooks::{use_drag, use_loaded};
use crate::desktop::lifecycle::CONTENT_FETCH_DELAY_MS;
use crate::desktop::state::{DesktopUi, WindowKind};
use crate::interop::sleep_ms;

/// `/about-me/photo-<n>.png`, or the `.svg` stand-in when the PNG is missing.
pub fn photo_src(n: u8, png_exists: bool) -> String {
    let ext = if png_exists { "png" } else { "svg" };
    format!("/about-me/photo-{n}.{ext}")
}

async fn resolve_photo(n: u8) -> String {
    let png = photo_src(n, true);
    photo_src(n, resource_exists(&png).await)
}

#[component]
pub fn AboutMeWindow() -> Element {
    let ui = use_context::<Signal<DesktopUi>>();
    use_window_entry(WindowKind::AboutMe);

    let text = use_loaded(String::new, || async {
        sleep_ms(CONTENT_FETCH_DELAY_MS).await;
        fetch_text(ABOUT_TEXT_PATH).await.unwrap_or_else(|e| {
            debug!("About text unavailable: {e}");
            String::new()
        })
    });
    let photos = use_loaded(
        || (photo_src(1, true), photo_src(2, true)),
        || async {
            sleep_ms(CONTENT_FETCH_DELAY_MS).await;
            (resolve_photo(1).await, resolve_photo(2).await)
        },
    );

    let (z, shown) = window_stacking(&ui.read(), WindowKind::AboutMe);
    let (photo_1, photo_2) = photos();

    rsx! {
        Backdrop { kind: WindowKind::AboutMe, z, shown }
        AboutPanelFrame {
            panel: AboutPanel::Photo,
            width: 360.0,
            shown,
            div {
                class: "about-photo",
                img { src: "{photo_1}", alt: "About me photo 1", style: "height: 260px;" }
            }
        }
        AboutPanelFrame {
            panel: AboutPanel::Portrait,
            width: 360.0,
            shown,
            div {
                class: "about-photo",
                img { src: "{photo_2}", alt: "About me photo 2", style: "height: 220px;" }
            }
        }
        AboutPanelFrame {
            panel: AboutPanel::Notes,
            width: 440.0,
            shown,
            div { class: "about-text", "{text}" }
        }
    }
}

#[component]
fn AboutPanelFrame(panel: AboutPanel, width: f64, shown: bool, children: Element) -> Element {
    let mut ui = use_context::<Signal<DesktopUi>>();
    let drag = use_drag(Anchor::TopLeft);

    let placement = {
        let ui = ui.read();
        ui.about_me()
            .map(|layout| layout.position(panel))
            .zip(ui.panel_z_index(panel))
    };
    let Some((position, z)) = placement else {
        return rsx! {};
    };

    let on_drag_start = move |e: PointerEvent| {
        e.prevent_default();
        let from = ui
            .peek()
            .about_me()
            .map(|layout| layout.position(panel))
            .unwrap_or_default();
        drag.start(&e, from, move |next| ui.write().set_panel_position(panel, next));
    };

    rsx! {
        div {
            class: if shown { "window shown" } else { "window" },
            style: "left: {position.x}px; top: {position.y}px; width: {width}px; z-index: {z};",
            onpointerdown: move |_| {
                let on_top = {
                    let ui = ui.peek();
                    ui.windows().last().map(|w| w.kind()) == Some(WindowKind::AboutMe)
                        && ui.about_me().map(|layout| layout.focus.active()) == Some(panel)
                };
                if !on_top {
                    ui.write().activate_panel(panel);
                }
            },
            WindowChrome {
                title: panel.title().to_string(),
                on_drag_start,
                on_close: move |_| {
                    ui.write().close(WindowKind::AboutMe);
                },
            }
            {children}
        }
    }
}
