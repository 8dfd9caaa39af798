use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use shared_types::{BackgroundMedia, MediaKind};

use crate::api::fetch_background;
use crate::desktop::hooks::use_loaded;

/// Optional full-screen image or looping video behind everything else.
#[component]
pub fn Background() -> Element {
    let media = use_loaded(
        || None::<BackgroundMedia>,
        || async {
            fetch_background().await.unwrap_or_else(|e| {
                debug!("No background media: {e}");
                None
            })
        },
    );

    let Some(media) = media() else {
        return rsx! {};
    };

    match media.kind {
        MediaKind::Image => rsx! {
            img { class: "background-media", src: "{media.url}", alt: "" }
        },
        MediaKind::Video => rsx! {
            video {
                class: "background-media",
                src: "{media.url}",
                autoplay: true,
                muted: true,
                r#loop: true,
                playsinline: true,
            }
        },
    }
}
