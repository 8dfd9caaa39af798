//! The "Don't Look" bin: two teasing clouds, then a page on the third click.

use crate::content::encode_component;

pub const CLOUD_VISIBLE_MS: u32 = 2000;
pub const FIRST_CLOUD: &str = "i said dont 😜☁️";
pub const SECOND_CLOUD: &str = "i told you dont look 🙈☁️";
pub const PAGE_TITLE: &str = "Don't Look";

const PAGE_HTML: &str = r#"<!doctype html><html><head><meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1"/><title>Don't Look</title><style>html,body{height:100%;margin:0}body{display:flex;align-items:center;justify-content:center;font-family:-apple-system,BlinkMacSystemFont,sans-serif;background:#fff;color:#111}.bubble{max-width:640px;background:#fff;border:1px solid #e5e5e5;border-radius:18px;padding:20px 22px;box-shadow:0 6px 24px rgba(0,0,0,.08);text-align:center}.title{font-size:18px;font-weight:600;margin-bottom:6px}.msg{font-size:16px;opacity:.85}</style></head><body><div class="bubble"><div class="title">Nothing to see here 👀</div><div class="msg">I told You Dont Look 😤🙈</div></div></body></html>"#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DontLookReaction {
    /// Show the cloud; hide it later with [`DontLook::hide_cloud`] and this token.
    Cloud { text: &'static str, token: u32 },
    OpenWindow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DontLook {
    clicks: u32,
    cloud: Option<&'static str>,
    token: u32,
}

impl DontLook {
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn cloud(&self) -> Option<&'static str> {
        self.cloud
    }

    pub fn click(&mut self) -> DontLookReaction {
        self.clicks = self.clicks.saturating_add(1);
        let text = match self.clicks {
            1 => FIRST_CLOUD,
            2 => SECOND_CLOUD,
            _ => return DontLookReaction::OpenWindow,
        };
        self.token = self.token.wrapping_add(1);
        self.cloud = Some(text);
        DontLookReaction::Cloud {
            text,
            token: self.token,
        }
    }

    /// Hide the cloud unless a newer one replaced it in the meantime.
    pub fn hide_cloud(&mut self, token: u32) {
        if token == self.token {
            self.cloud = None;
        }
    }
}

/// `data:` URL of the page shown from the third click on.
pub fn dont_look_page() -> String {
    format!("data:text/html;charset=utf-8,{}", encode_component(PAGE_HTML))
}
