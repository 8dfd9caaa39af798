//! Binary active/inactive stacking for the About Me panels.

use super::geometry::{Position, Viewport, WindowFrame};

/// Panel offsets above the About Me window's own z-index. Both stay below
/// the next window's band, see [`super::state::WINDOW_Z_STEP`].
pub const ACTIVE_Z: u32 = 2;
pub const INACTIVE_Z: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AboutPanel {
    Photo,
    Portrait,
    Notes,
}

impl AboutPanel {
    pub const ALL: [AboutPanel; 3] = [AboutPanel::Photo, AboutPanel::Portrait, AboutPanel::Notes];

    pub fn index(self) -> usize {
        match self {
            AboutPanel::Photo => 0,
            AboutPanel::Portrait => 1,
            AboutPanel::Notes => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AboutPanel::Photo => "IMG1041.heic",
            AboutPanel::Portrait => "IMG0641.heic",
            AboutPanel::Notes => "aboutme.txt",
        }
    }

    /// Size used to keep the panel on screen while dragging.
    pub fn frame(self) -> WindowFrame {
        match self {
            AboutPanel::Photo => WindowFrame::new(360.0, 306.0),
            AboutPanel::Portrait => WindowFrame::new(360.0, 266.0),
            AboutPanel::Notes => WindowFrame::new(352.0, 385.0),
        }
    }

    pub fn default_position(self, viewport: Viewport) -> Position {
        match self {
            AboutPanel::Photo => Position::new(120.0, 90.0),
            AboutPanel::Portrait => Position::new((viewport.width - 660.0).max(0.0), 100.0),
            AboutPanel::Notes => Position::new(360.0, 300.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelFocus {
    active: AboutPanel,
}

impl Default for PanelFocus {
    fn default() -> Self {
        Self {
            active: AboutPanel::Notes,
        }
    }
}

impl PanelFocus {
    pub fn active(&self) -> AboutPanel {
        self.active
    }

    pub fn activate(&mut self, panel: AboutPanel) {
        self.active = panel;
    }

    pub fn is_active(&self, panel: AboutPanel) -> bool {
        self.active == panel
    }

    pub fn z_index(&self, panel: AboutPanel) -> u32 {
        if self.is_active(panel) {
            ACTIVE_Z
        } else {
            INACTIVE_Z
        }
    }
}

/// Focus plus the position of each panel; reset whenever the window closes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AboutMeLayout {
    pub focus: PanelFocus,
    positions: [Position; 3],
}

impl AboutMeLayout {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            focus: PanelFocus::default(),
            positions: AboutPanel::ALL.map(|panel| panel.default_position(viewport)),
        }
    }

    pub fn position(&self, panel: AboutPanel) -> Position {
        self.positions[panel.index()]
    }

    pub fn set_position(&mut self, panel: AboutPanel, position: Position) {
        self.positions[panel.index()] = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_panel_starts_active() {
        let focus = PanelFocus::default();
        assert_eq!(focus.active(), AboutPanel::Notes);
        assert_eq!(focus.z_index(AboutPanel::Notes), ACTIVE_Z);
        assert_eq!(focus.z_index(AboutPanel::Photo), INACTIVE_Z);
    }

    #[test]
    fn exactly_one_panel_is_active() {
        let mut focus = PanelFocus::default();
        for target in AboutPanel::ALL {
            focus.activate(target);
            let active: Vec<_> = AboutPanel::ALL
                .into_iter()
                .filter(|panel| focus.is_active(*panel))
                .collect();
            assert_eq!(active, vec![target]);
            assert_eq!(focus.z_index(target), ACTIVE_Z);
        }
    }

    #[test]
    fn portrait_default_tracks_viewport_width() {
        let wide = AboutPanel::Portrait.default_position(Viewport::new(1440.0, 900.0));
        assert_eq!(wide, Position::new(780.0, 100.0));

        let narrow = AboutPanel::Portrait.default_position(Viewport::new(500.0, 900.0));
        assert_eq!(narrow.x, 0.0);
    }

    #[test]
    fn layout_positions_are_independent() {
        let mut layout = AboutMeLayout::new(Viewport::new(1440.0, 900.0));
        layout.set_position(AboutPanel::Photo, Position::new(5.0, 6.0));
        assert_eq!(layout.position(AboutPanel::Photo), Position::new(5.0, 6.0));
        assert_eq!(layout.position(AboutPanel::Notes), Position::new(360.0, 300.0));
    }
}
