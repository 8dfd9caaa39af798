//! Static content scanners
//!
//! Everything the desktop lists comes from directories under the public root.
//! Scanners never fail the request because of a single bad entry: unreadable
//! folders become empty lists and malformed descriptors are skipped.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fs::FileType;
use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

pub mod background;
pub mod projects;
pub mod shortcuts;

pub use background::find_background;
pub use projects::{read_folder_files, scan_projects};
pub use shortcuts::scan_shortcuts;

pub const ABOUT_ME_DIR: &str = "about-me";
pub const PROJECTS_DIR: &str = "projects";
pub const SHORTCUTS_DIR: &str = "shortcuts";
pub const BACKGROUND_DIR: &str = "Desktop";

/// Characters left untouched by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Build the browser URL of a file served from `public_dir`.
///
/// Each path segment is percent-encoded on its own so folder names with
/// spaces or unicode survive the round trip through the static file server.
pub fn public_url(public_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(public_dir).unwrap_or(path);
    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(
                utf8_percent_encode(&segment.to_string_lossy(), URI_COMPONENT).to_string(),
            ),
            _ => None,
        })
        .collect();

    format!("/{}", segments.join("/"))
}

/// A directory entry with its type already resolved.
#[derive(Debug, Clone)]
pub(crate) struct ScannedEntry {
    pub name: String,
    pub path: PathBuf,
    pub file_type: FileType,
}

impl ScannedEntry {
    pub fn is_file(&self) -> bool {
        self.file_type.is_file()
    }

    pub fn is_dir(&self) -> bool {
        self.file_type.is_dir()
    }
}

/// Read a directory and return its entries sorted by name.
///
/// Sorting makes every listing deterministic for a fixed snapshot; the raw
/// `read_dir` order depends on the filesystem.
pub(crate) async fn read_sorted_dir(dir: &Path) -> io::Result<Vec<ScannedEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let file_type = match entry.file_type().await {
            Ok(file_type) => file_type,
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "Skipping entry with unreadable type");
                continue;
            }
        };
        entries.push(ScannedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            file_type,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_url_encodes_each_segment() {
        let root = Path::new("/srv/public");
        let url = public_url(root, &root.join("projects/Project A/brief (v2).pdf"));
        assert_eq!(url, "/projects/Project%20A/brief%20(v2).pdf");
    }

    #[test]
    fn public_url_encodes_reserved_characters() {
        let root = Path::new("/srv/public");
        let url = public_url(root, &root.join("shortcuts/a&b#c?.txt"));
        assert_eq!(url, "/shortcuts/a%26b%23c%3F.txt");
    }

    #[test]
    fn public_url_encodes_unicode_as_utf8() {
        let root = Path::new("/srv/public");
        let url = public_url(root, &root.join("about-me/café.png"));
        assert_eq!(url, "/about-me/caf%C3%A9.png");
    }

    #[tokio::test]
    async fn read_sorted_dir_orders_by_name() {
        let temp = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", "c.txt"] {
            std::fs::write(temp.path().join(name), "x").unwrap();
        }

        let names: Vec<String> = read_sorted_dir(temp.path())
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt", "c.txt"]);
    }
}
