//! Static fixtures the windows read straight from `public/`, and the
//! built-in content shown whenever one of them is missing or broken.

use shared_types::{ContactInfo, FaqIcon, FaqItem, GalleryImage, TodoItem, TodoNote};
use url::form_urlencoded;

pub const CONTACT_PATH: &str = "/contact-info/contact.json";
pub const FAQ_PATH: &str = "/messages/faq.json";
pub const GALLERY_PATH: &str = "/gallery/images.json";
pub const TODO_PATH: &str = "/to-do/note.json";
pub const ABOUT_TEXT_PATH: &str = "/about-me/aboutme.txt";
pub const MENU_CONTACT_PATH: &str = "/Section%20Header/contact.json";
pub const RESUME_LINK_PATH: &str = "/Section%20Header/Resume.url.json";
pub const RESUME_PDF_PATH: &str = "/Section%20Header/Resume.pdf";
pub const ABOUT_NOTE_PATH: &str = "/Section%20Header/About%20Me.txt";

pub const FALLBACK_RESUME_URL: &str =
    "https://drive.google.com/file/d/1vX47lRo0Cgpu4I-8LjZaOn2SIUgCq9fI/view?usp=sharing";
pub const FALLBACK_MENU_EMAIL: &str = "inikajhamvar@gmail.com";
pub const DEFAULT_AVATAR: &str = "/about-me/photo-1.png";

/// Percent-encode like `encodeURIComponent` does for the characters that
/// matter here: spaces become `%20`, never `+`.
pub fn encode_component(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

// ============================================================================
// Fallbacks
// ============================================================================

pub fn fallback_contact() -> ContactInfo {
    ContactInfo {
        name: "Your Name".to_string(),
        title: "Your Title".to_string(),
        handle: Some("handle".to_string()),
        status: Some("Online".to_string()),
        contact_text: Some("Contact Me".to_string()),
        contact_url: Some("mailto:hello@example.com".to_string()),
        avatar_file: Some(DEFAULT_AVATAR.to_string()),
    }
}

pub fn fallback_faq() -> Vec<FaqItem> {
    let item = |q: &str, a: &str, icon: Option<FaqIcon>| FaqItem {
        q: q.to_string(),
        a: a.to_string(),
        icon,
    };
    vec![
        item(
            "What kind of designer are you?",
            "One who balances precision with playfulness. I love clean, intuitive interfaces with unexpected, delightful details.",
            Some(FaqIcon::Star),
        ),
        item(
            "What inspires your design style?",
            "Bold visual storytelling, functional simplicity, color theory experiments, and user-centric accessibility.",
            None,
        ),
        item(
            "Favorite kind of project to work on?",
            "Interactive product design, creative websites, and systems that blend aesthetics with performance.",
            None,
        ),
    ]
}

pub fn fallback_gallery() -> Vec<GalleryImage> {
    (1..=4)
        .map(|n| GalleryImage::Url(format!("/about-me/photo-{n}.png")))
        .collect()
}

pub const FALLBACK_TODO_TITLE: &str = "To do:";

pub fn fallback_todo() -> (String, Vec<TodoItem>) {
    let items = [
        ("Land my dream UX job", false),
        ("Drink water", false),
        ("Move to the US", true),
        ("Finish grad school without losing my mind", false),
        ("Build that banger spotify playlist", false),
        ("World domination", false),
        ("Get really good at making pasta ", true),
        ("Travel somewhere new every year", false),
    ]
    .into_iter()
    .map(|(text, done)| TodoItem {
        text: text.to_string(),
        done,
    })
    .collect();
    (FALLBACK_TODO_TITLE.to_string(), items)
}

// ============================================================================
// Resolution: every failed fetch becomes the fallback
// ============================================================================

pub fn resolve_contact(fetched: Result<ContactInfo, String>) -> ContactInfo {
    fetched.unwrap_or_else(|_| fallback_contact())
}

pub fn resolve_faq(fetched: Result<Vec<FaqItem>, String>) -> Vec<FaqItem> {
    fetched.unwrap_or_else(|_| fallback_faq())
}

pub fn resolve_gallery(fetched: Result<Vec<GalleryImage>, String>) -> Vec<GalleryImage> {
    fetched.unwrap_or_else(|_| fallback_gallery())
}

/// Each half of the note is replaced only when the fixture provides a
/// non-empty value for it.
pub fn resolve_todo(fetched: Result<TodoNote, String>) -> (String, Vec<TodoItem>) {
    let (mut title, mut items) = fallback_todo();
    let Ok(note) = fetched else {
        return (title, items);
    };

    if let Some(fetched_items) = note.items.filter(|items| !items.is_empty()) {
        items = fetched_items;
    }
    if let Some(fetched_title) = note.title.as_deref().map(str::trim) {
        if !fetched_title.is_empty() {
            title = fetched_title.to_string();
        }
    }
    (title, items)
}

pub fn resolve_menu_email(fetched: Option<String>) -> String {
    fetched
        .filter(|email| !email.is_empty())
        .unwrap_or_else(|| FALLBACK_MENU_EMAIL.to_string())
}

pub fn menu_contact_href(email: &str) -> String {
    format!(
        "https://mail.google.com/mail/?view=cm&fs=1&to={}",
        encode_component(email)
    )
}

// ============================================================================
// Contact card
// ============================================================================

pub fn avatar_src(info: &ContactInfo) -> String {
    match info.avatar_file.as_deref().filter(|file| !file.is_empty()) {
        Some(file) if file.starts_with('/') => file.to_string(),
        Some(file) => format!("/contact-info/{file}"),
        None => DEFAULT_AVATAR.to_string(),
    }
}

/// Turn a `mailto:` link into a Gmail compose URL.
pub fn gmail_compose_url(mailto: &str) -> String {
    let raw = match mailto.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("mailto:") => &mailto[7..],
        _ => mailto,
    };
    let (address, query) = raw.split_once('?').unwrap_or((raw, ""));
    let lookup = |key: &str| {
        form_urlencoded::parse(query.as_bytes())
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    };

    let mut params = form_urlencoded::Serializer::new(String::new());
    if !address.is_empty() {
        params.append_pair("to", address);
    }
    for (source, target) in [("subject", "su"), ("body", "body"), ("cc", "cc"), ("bcc", "bcc")] {
        if let Some(value) = lookup(source) {
            params.append_pair(target, &value);
        }
    }
    params.append_pair("view", "cm");
    params.append_pair("fs", "1");

    format!("https://mail.google.com/mail/?{}", params.finish())
}

pub fn contact_href(url: &str) -> String {
    if url.starts_with("mailto:") {
        gmail_compose_url(url)
    } else {
        url.to_string()
    }
}

// ============================================================================
// Project browser
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileGlyph {
    Film,
    Text,
    LinkFolder,
    DesignFolder,
    Image,
    File,
}

impl FileGlyph {
    pub fn emoji(self) -> &'static str {
        match self {
            FileGlyph::Film => "🎬",
            FileGlyph::Text => "📄",
            FileGlyph::LinkFolder => "🔗",
            FileGlyph::DesignFolder => "🎨",
            FileGlyph::Image => "🖼️",
            FileGlyph::File => "📁",
        }
    }
}

fn extension(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

pub fn file_glyph(name: &str) -> FileGlyph {
    match extension(name).as_str() {
        "mov" | "mp4" | "webm" => FileGlyph::Film,
        "txt" | "md" => FileGlyph::Text,
        "xyd" => FileGlyph::LinkFolder,
        "fig" | "sketch" => FileGlyph::DesignFolder,
        "png" | "jpg" | "jpeg" | "gif" | "svg" => FileGlyph::Image,
        _ => FileGlyph::File,
    }
}

/// `.json`/`.xyd` link files point somewhere else instead of being content.
pub fn is_link_file(name: &str) -> bool {
    matches!(extension(name).as_str(), "json" | "xyd")
}

/// Display name; link files drop their extension.
pub fn file_label(name: &str) -> &str {
    let lower = name.to_lowercase();
    if lower.ends_with(".json") {
        &name[..name.len() - 5]
    } else if lower.ends_with(".xyd") {
        &name[..name.len() - 4]
    } else {
        name
    }
}

/// Link files are fetched fresh on every click.
pub fn cache_busted(url: &str, now: f64) -> String {
    format!("{url}?v={}", now as u64)
}

pub fn is_pdf(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.ends_with(".pdf") || lower.contains(".pdf?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_fetches_use_fallbacks() {
        let err = || "HTTP error: 404".to_string();

        assert_eq!(resolve_contact(Err(err())), fallback_contact());
        let faq = resolve_faq(Err(err()));
        assert_eq!(faq.len(), 3);
        assert_eq!(faq[0].icon, Some(FaqIcon::Star));
        assert_eq!(faq[1].icon, None);

        let gallery = resolve_gallery(Err(err()));
        let srcs: Vec<&str> = gallery.iter().map(GalleryImage::src).collect();
        assert_eq!(
            srcs,
            vec![
                "/about-me/photo-1.png",
                "/about-me/photo-2.png",
                "/about-me/photo-3.png",
                "/about-me/photo-4.png"
            ]
        );

        let (title, items) = resolve_todo(Err(err()));
        assert_eq!(title, "To do:");
        assert_eq!(items.len(), 8);
        let done: Vec<&str> = items
            .iter()
            .filter(|item| item.done)
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(done, vec!["Move to the US", "Get really good at making pasta "]);
    }

    #[test]
    fn fetched_content_wins() {
        let contact = ContactInfo {
            name: "Ada".to_string(),
            ..fallback_contact()
        };
        assert_eq!(resolve_contact(Ok(contact.clone())), contact);
        assert!(resolve_faq(Ok(vec![])).is_empty());
    }

    #[test]
    fn todo_replaces_only_non_empty_parts() {
        let (title, items) = resolve_todo(Ok(TodoNote {
            title: Some("   ".to_string()),
            items: Some(vec![TodoItem {
                text: "Ship it".to_string(),
                done: false,
            }]),
        }));
        assert_eq!(title, "To do:");
        assert_eq!(items.len(), 1);

        let (title, items) = resolve_todo(Ok(TodoNote {
            title: Some("  Today  ".to_string()),
            items: Some(vec![]),
        }));
        assert_eq!(title, "Today");
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn avatar_paths() {
        let mut info = fallback_contact();
        assert_eq!(avatar_src(&info), "/about-me/photo-1.png");

        info.avatar_file = Some("me.jpg".to_string());
        assert_eq!(avatar_src(&info), "/contact-info/me.jpg");

        info.avatar_file = None;
        assert_eq!(avatar_src(&info), DEFAULT_AVATAR);
    }

    #[test]
    fn mailto_becomes_gmail_compose() {
        assert_eq!(
            gmail_compose_url("mailto:hello@example.com"),
            "https://mail.google.com/mail/?to=hello%40example.com&view=cm&fs=1"
        );
        assert_eq!(
            gmail_compose_url("MAILTO:a@b.co?subject=Hi there&cc=c@d.co&body="),
            "https://mail.google.com/mail/?to=a%40b.co&su=Hi+there&cc=c%40d.co&view=cm&fs=1"
        );
    }

    #[test]
    fn non_mailto_contact_links_pass_through() {
        assert_eq!(contact_href("https://cal.com/me"), "https://cal.com/me");
        assert!(contact_href("mailto:x@y.z").starts_with("https://mail.google.com/mail/?to="));
    }

    #[test]
    fn menu_contact_link() {
        assert_eq!(resolve_menu_email(Some(String::new())), FALLBACK_MENU_EMAIL);
        assert_eq!(
            menu_contact_href("me+work@x.io"),
            "https://mail.google.com/mail/?view=cm&fs=1&to=me%2Bwork%40x.io"
        );
    }

    #[test]
    fn glyphs_and_labels() {
        assert_eq!(file_glyph("demo.MOV"), FileGlyph::Film);
        assert_eq!(file_glyph("notes.md"), FileGlyph::Text);
        assert_eq!(file_glyph("Case.xyd"), FileGlyph::LinkFolder);
        assert_eq!(file_glyph("ui.fig"), FileGlyph::DesignFolder);
        assert_eq!(file_glyph("shot.jpeg"), FileGlyph::Image);
        assert_eq!(file_glyph("deck.pdf"), FileGlyph::File);
        assert_eq!(file_glyph("README"), FileGlyph::File);

        assert_eq!(file_label("Live Site.JSON"), "Live Site");
        assert_eq!(file_label("Prototype.xyd"), "Prototype");
        assert_eq!(file_label("deck.pdf"), "deck.pdf");
        assert!(is_link_file("a.Json"));
        assert!(!is_link_file("a.txt"));
    }

    #[test]
    fn pdf_detection() {
        assert!(is_pdf("/Section%20Header/Resume.pdf"));
        assert!(is_pdf("/files/a.PDF?page=2"));
        assert!(!is_pdf("https://example.com/pdf-viewer"));
    }

    #[test]
    fn encode_component_uses_percent_twenty() {
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
        assert_eq!(cache_busted("/p/x.json", 1_700.9), "/p/x.json?v=1700");
    }
}
