//! Default placements for desktop furniture. Nothing here is remembered
//! across reloads.

use super::geometry::{Position, Viewport, WindowFrame};

/// A right-anchored project folder and the footprint it occupies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FolderPreset {
    pub name: &'static str,
    pub top: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl FolderPreset {
    /// Position as `(right, top)`.
    pub fn position(&self) -> Position {
        Position::new(self.right, self.top)
    }
}

pub const FOLDER_ICON_URL: &str =
    "https://framerusercontent.com/images/stLcXmD5BBe1RLsQJ8fbc29YAQQ.png";

pub const FOLDER_PRESETS: [FolderPreset; 4] = [
    FolderPreset { name: "Project 02", top: 220.0, right: 120.0, width: 135.0, height: 83.0 },
    FolderPreset { name: "Project 01", top: 360.0, right: 165.0, width: 210.0, height: 150.0 },
    FolderPreset { name: "Project 03", top: 500.0, right: 140.0, width: 129.0, height: 83.0 },
    FolderPreset { name: "Project 04", top: 110.0, right: 180.0, width: 133.0, height: 83.0 },
];

/// Placement for folders whose name matches no preset.
pub const DEFAULT_FOLDER: FolderPreset = FolderPreset {
    name: "",
    top: 220.0,
    right: 120.0,
    width: 135.0,
    height: 83.0,
};

/// Preset for `name`, matched on the trimmed, lowercased folder name.
pub fn folder_preset(name: &str) -> FolderPreset {
    let wanted = name.trim().to_lowercase();
    FOLDER_PRESETS
        .iter()
        .find(|preset| preset.name.to_lowercase() == wanted)
        .copied()
        .unwrap_or(DEFAULT_FOLDER)
}

/// `(right, top)` of the Don't Look bin.
pub const DONT_LOOK_POSITION: Position = Position::new(100.0, 592.0);

/// `(left, top)` of the fixed desktop items.
pub const RESUME_ICON_POSITION: Position = Position::new(60.0, 318.0);
pub const ABOUT_ICON_POSITION: Position = Position::new(200.0, 525.0);
pub const NOTE_ORIGIN: Position = Position::new(60.0, 80.0);

/// `(left, top)` slots for dynamic shortcuts; only the first two are used.
pub const SHORTCUT_SLOTS: [Position; 2] = [Position::new(60.0, 420.0), Position::new(150.0, 420.0)];

pub const MESSAGES_FRAME: WindowFrame = WindowFrame::new(540.0, 420.0);
pub const PROJECTS_FRAME: WindowFrame = WindowFrame::new(780.0, 520.0);
pub const WEBVIEW_FRAME: WindowFrame = WindowFrame::new(900.0, 560.0);

/// Contact card centered on screen, kept clear of the menu bar.
pub fn contact_card_position(viewport: Viewport) -> Position {
    let (card_width, card_height) = contact_card_size(viewport);
    Position::new(
        ((viewport.width - card_width) / 2.0).floor().max(0.0),
        ((viewport.height - card_height) / 2.0).floor().max(40.0),
    )
}

/// Card height is capped at 540px or 80% of the screen; width follows the
/// card's portrait aspect ratio.
pub fn contact_card_size(viewport: Viewport) -> (f64, f64) {
    let height = 540.0_f64.min((viewport.height * 0.8).round());
    ((height * 0.718).round(), height)
}

pub fn projects_window_position(viewport: Viewport) -> Position {
    Position::new((viewport.width / 2.0 - 390.0).floor().max(60.0), 120.0)
}

pub const MESSAGES_POSITION: Position = Position::new(120.0, 90.0);
pub const WEBVIEW_POSITION: Position = Position::new(160.0, 120.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folder_preset_matches_case_insensitively() {
        let preset = folder_preset("  project 01 ");
        assert_eq!(preset.name, "Project 01");
        assert_eq!(preset.position(), Position::new(165.0, 360.0));
        assert_eq!(preset.width, 210.0);
    }

    #[test]
    fn unknown_folder_gets_default_slot() {
        let preset = folder_preset("Side Quest");
        assert_eq!(preset.position(), Position::new(120.0, 220.0));
        assert_eq!((preset.width, preset.height), (135.0, 83.0));
    }

    #[test]
    fn contact_card_is_centered() {
        let viewport = Viewport::new(1440.0, 900.0);
        assert_eq!(contact_card_size(viewport), (388.0, 540.0));
        assert_eq!(contact_card_position(viewport), Position::new(526.0, 180.0));
    }

    #[test]
    fn contact_card_respects_top_margin_on_short_screens() {
        let viewport = Viewport::new(800.0, 400.0);
        let (_, height) = contact_card_size(viewport);
        assert_eq!(height, 320.0);
        assert_eq!(contact_card_position(viewport).y, 40.0);
    }

    #[test]
    fn projects_window_starts_near_center() {
        assert_eq!(
            projects_window_position(Viewport::new(1440.0, 900.0)),
            Position::new(330.0, 120.0)
        );
        assert_eq!(projects_window_position(Viewport::new(600.0, 900.0)).x, 60.0);
    }
}
