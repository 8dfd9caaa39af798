use dioxus::prelude::*;

#[component]
pub fn Welcome() -> Element {
    rsx! {
        div { class: "desktop-grid" }
        div { class: "welcome-banner", "welcome to my portfolio" }
    }
}
