//! Shared types between the portfolio server and the desktop UI
//!
//! These types are used by both:
//! - axum handlers (native Rust)
//! - Dioxus components (WASM)
//!
//! Everything here is a wire or fixture format: listing responses from
//! `/api/*` and the static JSON files the browser reads from `public/`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const API_PROJECTS: &str = "/api/projects";
pub const API_SHORTCUTS: &str = "/api/shortcuts";
pub const API_BACKGROUND: &str = "/api/background";

/// Display name of the pseudo-project backed by `public/about-me`.
pub const ABOUT_ME_NAME: &str = "About Me";

// ============================================================================
// Listing Types
// ============================================================================

/// A file inside a project folder, addressed by its public URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct ProjectFile {
    pub name: String,
    pub url: String,
}

/// A project folder and its files, in listing order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct Project {
    pub name: String,
    pub files: Vec<ProjectFile>,
}

impl Project {
    pub fn new(name: impl Into<String>, files: Vec<ProjectFile>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// `GET /api/projects`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct ProjectsResponse {
    pub about_me: Project,
    pub projects: Vec<Project>,
}

/// A desktop shortcut parsed from a descriptor in `public/shortcuts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct Shortcut {
    pub label: String,
    pub url: String,
    /// Open inside the in-app viewer instead of a new tab
    #[serde(default)]
    pub embedded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub icon: Option<String>,
}

/// `GET /api/shortcuts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct ShortcutsResponse {
    pub shortcuts: Vec<Shortcut>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a file extension (without the dot, any case).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" | "png" | "gif" | "webp" | "avif" => Some(Self::Image),
            "mp4" | "webm" | "ogg" => Some(Self::Video),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct BackgroundMedia {
    pub url: String,
    pub kind: MediaKind,
}

/// `GET /api/background`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct BackgroundResponse {
    pub media: Option<BackgroundMedia>,
}

// ============================================================================
// Static Fixtures (read by the browser straight from public/)
// ============================================================================

/// `public/contact-info/contact.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contact_text: Option<String>,
    #[serde(default)]
    pub contact_url: Option<String>,
    /// File inside `/contact-info`, or an absolute public path
    #[serde(default)]
    pub avatar_file: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub enum FaqIcon {
    Star,
}

/// One entry of `public/messages/faq.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct FaqItem {
    pub q: String,
    pub a: String,
    #[serde(default)]
    pub icon: Option<FaqIcon>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct TodoItem {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

/// `public/to-do/note.json`; both fields may be absent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct TodoNote {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<TodoItem>>,
}

/// Contents of a `.json`/`.xyd` link file, or of `Resume.url.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct LinkDescriptor {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub external: Option<bool>,
    #[serde(default)]
    pub open: Option<String>,
}

impl LinkDescriptor {
    /// Trimmed URL, if present and non-empty.
    pub fn target(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn opens_externally(&self) -> bool {
        self.external == Some(true) || self.open.as_deref() == Some("external")
    }
}

/// `public/Section Header/contact.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub struct MenuContact {
    #[serde(default)]
    pub email: Option<String>,
}

/// One entry of `public/gallery/images.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(untagged)]
#[ts(export, export_to = "../../portfolio-ui/bindings/")]
pub enum GalleryImage {
    Url(String),
    Detailed {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl GalleryImage {
    pub fn src(&self) -> &str {
        match self {
            GalleryImage::Url(src) => src,
            GalleryImage::Detailed { src, .. } => src,
        }
    }

    pub fn alt(&self) -> &str {
        match self {
            GalleryImage::Detailed { alt: Some(alt), .. } => alt,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_rs::Config;

    #[test]
    fn test_projects_response_uses_about_me_key() {
        let response = ProjectsResponse {
            about_me: Project::new(ABOUT_ME_NAME, vec![]),
            projects: vec![Project::new(
                "Project A",
                vec![ProjectFile {
                    name: "a.txt".to_string(),
                    url: "/projects/Project%20A/a.txt".to_string(),
                }],
            )],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["aboutMe"]["name"], "About Me");
        assert_eq!(json["projects"][0]["files"][0]["name"], "a.txt");
        assert!(json.get("about_me").is_none());
    }

    #[test]
    fn test_shortcut_omits_missing_icon() {
        let shortcut = Shortcut {
            label: "Link".to_string(),
            url: "https://x".to_string(),
            embedded: false,
            icon: None,
        };
        let json = serde_json::to_string(&shortcut).unwrap();
        assert_eq!(json, r#"{"label":"Link","url":"https://x","embedded":false}"#);
    }

    #[test]
    fn test_shortcuts_response_error_only_when_set() {
        let ok = serde_json::to_value(ShortcutsResponse::default()).unwrap();
        assert!(ok.get("error").is_none());

        let failed = ShortcutsResponse {
            shortcuts: vec![],
            error: Some("Failed to load shortcuts".to_string()),
        };
        let json = serde_json::to_value(failed).unwrap();
        assert_eq!(json["error"], "Failed to load shortcuts");
    }

    #[test]
    fn test_contact_info_camel_case() {
        let info: ContactInfo = serde_json::from_str(
            r#"{"name":"Sam","title":"Designer","contactUrl":"mailto:a@b.c","avatarFile":"me.png"}"#,
        )
        .unwrap();
        assert_eq!(info.contact_url.as_deref(), Some("mailto:a@b.c"));
        assert_eq!(info.avatar_file.as_deref(), Some("me.png"));
        assert_eq!(info.handle, None);
    }

    #[test]
    fn test_faq_icon_accepts_null_and_missing() {
        let items: Vec<FaqItem> = serde_json::from_str(
            r#"[{"q":"a","a":"b","icon":"star"},{"q":"c","a":"d","icon":null},{"q":"e","a":"f"}]"#,
        )
        .unwrap();
        assert_eq!(items[0].icon, Some(FaqIcon::Star));
        assert_eq!(items[1].icon, None);
        assert_eq!(items[2].icon, None);
    }

    #[test]
    fn test_gallery_image_accepts_both_shapes() {
        let images: Vec<GalleryImage> =
            serde_json::from_str(r#"["/a.png", {"src": "/b.png", "alt": "B"}]"#).unwrap();
        assert_eq!(images[0].src(), "/a.png");
        assert_eq!(images[0].alt(), "");
        assert_eq!(images[1].src(), "/b.png");
        assert_eq!(images[1].alt(), "B");
    }

    #[test]
    fn test_link_descriptor_target_and_external() {
        let blank: LinkDescriptor = serde_json::from_str(r#"{"url":"   "}"#).unwrap();
        assert_eq!(blank.target(), None);

        let external: LinkDescriptor =
            serde_json::from_str(r#"{"url":" https://x ","open":"external"}"#).unwrap();
        assert_eq!(external.target(), Some("https://x"));
        assert!(external.opens_externally());

        let flagged: LinkDescriptor =
            serde_json::from_str(r#"{"url":"https://x","external":true}"#).unwrap();
        assert!(flagged.opens_externally());
    }

    #[test]
    fn test_media_kind_from_extension() {
        assert_eq!(MediaKind::from_extension("JPG"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_extension("webm"), Some(MediaKind::Video));
        assert_eq!(MediaKind::from_extension("pdf"), None);
    }

    #[test]
    fn export_types() {
        // The export_to attribute in each type's #[ts] macro specifies the output directory
        let config = Config::default();
        ProjectFile::export(&config).unwrap();
        Project::export(&config).unwrap();
        ProjectsResponse::export(&config).unwrap();
        Shortcut::export(&config).unwrap();
        ShortcutsResponse::export(&config).unwrap();
        MediaKind::export(&config).unwrap();
        BackgroundMedia::export(&config).unwrap();
        BackgroundResponse::export(&config).unwrap();
        ContactInfo::export(&config).unwrap();
        FaqIcon::export(&config).unwrap();
        FaqItem::export(&config).unwrap();
        TodoItem::export(&config).unwrap();
        TodoNote::export(&config).unwrap();
        LinkDescriptor::export(&config).unwrap();
        MenuContact::export(&config).unwrap();
        GalleryImage::export(&config).unwrap();
    }
}
