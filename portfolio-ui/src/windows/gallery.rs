use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::GalleryImage;

use crate::api::fetch_json;
use crate::content::{resolve_gallery, GALLERY_PATH};
use crate::desktop::components::window_chrome::{use_window_entry, window_stacking, Backdrop};
use crate::desktop::hooks::use_loaded;
use crate::desktop::state::{DesktopUi, WindowKind};

/// Full-screen photo grid with no chrome. Escape or a click outside closes it.
#[component]
pub fn GalleryWindow() -> Element {
    let ui = use_context::<Signal<DesktopUi>>();
    use_window_entry(WindowKind::Gallery);

    let images = use_loaded(Vec::<GalleryImage>::new, || async {
        let fetched = fetch_json::<Vec<GalleryImage>>(GALLERY_PATH).await;
        if let Err(e) = &fetched {
            debug!("Gallery unavailable, using fallback: {e}");
        }
        resolve_gallery(fetched)
    });

    let (z, shown) = window_stacking(&ui.read(), WindowKind::Gallery);
    let opacity = if shown { 1 } else { 0 };

    rsx! {
        Backdrop { kind: WindowKind::Gallery, z: z - 1, shown, clear: true }
        div {
            style: "position: absolute; left: 50%; top: 50%; transform: translate(-50%, -50%); width: min(90vw, 1100px); height: min(70vh, 640px); z-index: {z}; opacity: {opacity}; transition: opacity 0.3s;",
            div {
                class: "gallery-grid",
                style: "padding: 16px;",
                for (index, image) in images().into_iter().enumerate() {
                    img {
                        key: "{index}",
                        src: image.src(),
                        alt: image.alt(),
                        loading: "lazy",
                    }
                }
            }
        }
    }
}
