use chrono::{DateTime, Local, TimeZone};
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use shared_types::{LinkDescriptor, MenuContact};

use crate::api::fetch_json;
use crate::content::{
    menu_contact_href, resolve_menu_email, FALLBACK_RESUME_URL, MENU_CONTACT_PATH,
    RESUME_LINK_PATH,
};
use crate::desktop::hooks::use_loaded;
use crate::interop::{open_external, sleep_ms};

const CLOCK_TICK_MS: u32 = 1_000;

/// Menu bar clock text, e.g. `Fri Oct 17 9:41 AM`.
pub fn clock_label<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%a %b %-d %-I:%M %p").to_string()
}

#[component]
pub fn MenuBar() -> Element {
    let mut now = use_signal(Local::now);
    use_future(move || async move {
        loop {
            sleep_ms(CLOCK_TICK_MS).await;
            now.set(Local::now());
        }
    });

    let email = use_loaded(
        || None::<String>,
        || async {
            match fetch_json::<MenuContact>(MENU_CONTACT_PATH).await {
                Ok(contact) => contact.email,
                Err(e) => {
                    debug!("Menu contact unavailable, using fallback: {e}");
                    None
                }
            }
        },
    );
    let contact_href = menu_contact_href(&resolve_menu_email(email()));
    let clock = clock_label(&now());

    let open_resume = move |_| {
        spawn(async move {
            let target = match fetch_json::<LinkDescriptor>(RESUME_LINK_PATH).await {
                Ok(link) => link.target().map(str::to_string),
                Err(e) => {
                    warn!("Resume link unavailable: {e}");
                    None
                }
            };
            open_external(target.as_deref().unwrap_or(FALLBACK_RESUME_URL));
        });
    };

    rsx! {
        header {
            class: "menu-bar",
            div {
                class: "group",
                span { style: "font-size: 15px; line-height: 1;", "\u{f8ff}" }
                span { style: "font-weight: 600;", "Portfolio" }
                a {
                    href: "{contact_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Contact"
                }
                button { r#type: "button", onclick: open_resume, "Resume" }
            }
            div {
                class: "status",
                span { "🔋" }
                span { "📶" }
                span { "🔍" }
                span { style: "white-space: nowrap;", "{clock}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn clock_label_uses_twelve_hour_time_without_padding() {
        let morning = Utc.with_ymd_and_hms(2025, 10, 17, 9, 5, 0).unwrap();
        assert_eq!(clock_label(&morning), "Fri Oct 17 9:05 AM");

        let evening = Utc.with_ymd_and_hms(2025, 3, 2, 21, 30, 0).unwrap();
        assert_eq!(clock_label(&evening), "Sun Mar 2 9:30 PM");
    }
}
