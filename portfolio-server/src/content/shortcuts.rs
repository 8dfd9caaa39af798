//! Shortcut descriptor parsing backing `GET /api/shortcuts`
//!
//! Supported descriptors in `public/shortcuts`:
//! - `*.txt`  embedded document, icon taken from a same-named image sibling
//! - `*.json` link file `{ "url": ... }`, opened in a new tab
//! - `*.xyd`  link file with the same shape, always embedded

use shared_types::{LinkDescriptor, Shortcut};
use std::path::Path;
use tokio::fs;

use super::{public_url, read_sorted_dir, ContentError, ScannedEntry, SHORTCUTS_DIR};

const ICON_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DescriptorKind {
    Text,
    Json,
    Xyd,
}

impl DescriptorKind {
    fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if lower.ends_with(".txt") {
            Some(Self::Text)
        } else if lower.ends_with(".json") {
            Some(Self::Json)
        } else if lower.ends_with(".xyd") {
            Some(Self::Xyd)
        } else {
            None
        }
    }
}

/// Parse every supported descriptor in `public/shortcuts`.
///
/// Only a failure to read the directory itself is an error; individual
/// files that fail to parse or carry no URL are dropped.
pub async fn scan_shortcuts(public_dir: &Path) -> Result<Vec<Shortcut>, ContentError> {
    let dir = public_dir.join(SHORTCUTS_DIR);
    let entries = read_sorted_dir(&dir)
        .await
        .map_err(|source| ContentError::ReadDir {
            path: dir.clone(),
            source,
        })?;

    let mut shortcuts = Vec::new();
    for entry in entries.iter().filter(|entry| entry.is_file()) {
        let Some(kind) = DescriptorKind::from_file_name(&entry.name) else {
            continue;
        };
        if let Some(shortcut) = parse_descriptor(public_dir, &dir, entry, kind).await {
            shortcuts.push(shortcut);
        }
    }

    tracing::debug!(count = shortcuts.len(), "Scanned shortcuts");
    Ok(shortcuts)
}

async fn parse_descriptor(
    public_dir: &Path,
    dir: &Path,
    entry: &ScannedEntry,
    kind: DescriptorKind,
) -> Option<Shortcut> {
    let label = Path::new(&entry.name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| entry.name.clone());

    if kind == DescriptorKind::Text {
        return Some(Shortcut {
            url: public_url(public_dir, &entry.path),
            embedded: true,
            icon: sibling_icon(public_dir, dir, &label).await,
            label,
        });
    }

    let raw = match fs::read_to_string(&entry.path).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(file = %entry.name, error = %e, "Skipping unreadable shortcut");
            return None;
        }
    };
    let descriptor: LinkDescriptor = match serde_json::from_str(&raw) {
        Ok(descriptor) => descriptor,
        Err(e) => {
            tracing::debug!(file = %entry.name, error = %e, "Skipping malformed shortcut");
            return None;
        }
    };
    let Some(url) = descriptor.target() else {
        tracing::debug!(file = %entry.name, "Skipping shortcut without url");
        return None;
    };

    Some(Shortcut {
        label,
        url: url.to_string(),
        embedded: kind == DescriptorKind::Xyd,
        icon: None,
    })
}

/// First existing `<label>.png|jpg|jpeg` next to the descriptor.
async fn sibling_icon(public_dir: &Path, dir: &Path, label: &str) -> Option<String> {
    for ext in ICON_EXTENSIONS {
        let candidate = dir.join(format!("{label}.{ext}"));
        if matches!(fs::try_exists(&candidate).await, Ok(true)) {
            return Some(public_url(public_dir, &candidate));
        }
    }
    None
}
