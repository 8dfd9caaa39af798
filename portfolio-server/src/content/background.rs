//! Desktop wallpaper lookup backing `GET /api/background`

use shared_types::{BackgroundMedia, MediaKind};
use std::path::Path;

use super::{public_url, read_sorted_dir, BACKGROUND_DIR};

/// The first visible file in `public/Desktop`, if it is a known image or video.
///
/// Only the first candidate is considered; an unsupported extension there
/// means no background rather than a search for the next file.
pub async fn find_background(public_dir: &Path) -> Option<BackgroundMedia> {
    let dir = public_dir.join(BACKGROUND_DIR);
    let entries = match read_sorted_dir(&dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "No desktop background folder");
            return None;
        }
    };

    let first = entries
        .into_iter()
        .find(|entry| entry.is_file() && !entry.name.starts_with('.'))?;

    let kind = Path::new(&first.name)
        .extension()
        .and_then(|ext| MediaKind::from_extension(&ext.to_string_lossy()));

    match kind {
        Some(kind) => Some(BackgroundMedia {
            url: public_url(public_dir, &first.path),
            kind,
        }),
        None => {
            tracing::debug!(file = %first.name, "Desktop background has unsupported extension");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn picks_first_visible_image() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("Desktop");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(".DS_Store"), "x").unwrap();
        fs::write(dir.join("b wallpaper.png"), "x").unwrap();
        fs::write(dir.join("c.mp4"), "x").unwrap();

        let media = find_background(temp.path()).await.unwrap();

        assert_eq!(media.kind, MediaKind::Image);
        assert_eq!(media.url, "/Desktop/b%20wallpaper.png");
    }

    #[tokio::test]
    async fn video_extensions_are_detected() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("Desktop");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("loop.WEBM"), "x").unwrap();

        let media = find_background(temp.path()).await.unwrap();
        assert_eq!(media.kind, MediaKind::Video);
    }

    #[tokio::test]
    async fn unsupported_or_missing_is_none() {
        let temp = tempfile::tempdir().unwrap();
        assert_eq!(find_background(temp.path()).await, None);

        let dir = temp.path().join("Desktop");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "x").unwrap();
        assert_eq!(find_background(temp.path()).await, None);
    }
}
