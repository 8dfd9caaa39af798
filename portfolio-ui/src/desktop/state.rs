//! The whole desktop as one value.
//!
//! Windows are keyed by [`WindowKind`]; at most one of each kind is open.
//! `windows` keeps opening order, so the last entry is drawn on top. A
//! window's position lives in its [`OpenWindow`] and disappears with it.

use std::collections::BTreeMap;

use shared_types::Project;

use super::dont_look::DontLook;
use super::focus::{AboutMeLayout, AboutPanel};
use super::geometry::{IconBounds, Position, Viewport, WindowFrame};
use super::layout::{self, folder_preset, DONT_LOOK_POSITION};
use super::lifecycle::WindowLifecycle;

/// Stacking base for floating windows; everything on the desktop sits below.
pub const WINDOW_BASE_Z: u32 = 1000;
/// Gap between stacked windows; backdrops and sub-panels live inside it.
pub const WINDOW_Z_STEP: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WindowKind {
    AboutMe,
    Contact,
    Gallery,
    Messages,
    Projects,
    WebView,
}

impl WindowKind {
    pub fn closes_on_escape(self) -> bool {
        matches!(self, WindowKind::Gallery | WindowKind::Messages)
    }

    /// Footprint used for clamping. The gallery and About Me panels are laid
    /// out by CSS or per panel, so they clamp as if full screen.
    pub fn frame(self, viewport: Viewport) -> WindowFrame {
        match self {
            WindowKind::Contact => {
                let (width, height) = layout::contact_card_size(viewport);
                WindowFrame::new(width, height)
            }
            WindowKind::Messages => layout::MESSAGES_FRAME,
            WindowKind::Projects => layout::PROJECTS_FRAME,
            WindowKind::WebView => layout::WEBVIEW_FRAME,
            WindowKind::AboutMe | WindowKind::Gallery => {
                WindowFrame::new(viewport.width, viewport.height)
            }
        }
    }

    pub fn default_position(self, viewport: Viewport) -> Position {
        match self {
            WindowKind::Contact => layout::contact_card_position(viewport),
            WindowKind::Messages => layout::MESSAGES_POSITION,
            WindowKind::Projects => layout::projects_window_position(viewport),
            WindowKind::WebView => layout::WEBVIEW_POSITION,
            WindowKind::AboutMe | WindowKind::Gallery => Position::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WindowSpec {
    AboutMe,
    Contact,
    Gallery,
    Messages,
    Projects { current: Project, all: Vec<Project> },
    WebView { url: String, title: String },
}

impl WindowSpec {
    pub fn web_view(url: impl Into<String>, title: impl Into<String>) -> Self {
        WindowSpec::WebView {
            url: url.into(),
            title: title.into(),
        }
    }

    pub fn kind(&self) -> WindowKind {
        match self {
            WindowSpec::AboutMe => WindowKind::AboutMe,
            WindowSpec::Contact => WindowKind::Contact,
            WindowSpec::Gallery => WindowKind::Gallery,
            WindowSpec::Messages => WindowKind::Messages,
            WindowSpec::Projects { .. } => WindowKind::Projects,
            WindowSpec::WebView { .. } => WindowKind::WebView,
        }
    }

    /// Spec with no payload for kinds that carry none.
    pub fn plain(kind: WindowKind) -> Option<Self> {
        match kind {
            WindowKind::AboutMe => Some(WindowSpec::AboutMe),
            WindowKind::Contact => Some(WindowSpec::Contact),
            WindowKind::Gallery => Some(WindowSpec::Gallery),
            WindowKind::Messages => Some(WindowSpec::Messages),
            WindowKind::Projects | WindowKind::WebView => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OpenWindow {
    pub spec: WindowSpec,
    pub lifecycle: WindowLifecycle,
    pub position: Position,
    pub minimized: bool,
    pub maximized: bool,
}

impl OpenWindow {
    pub fn kind(&self) -> WindowKind {
        self.spec.kind()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconId {
    DontLook,
    Folder(String),
}

impl IconId {
    pub fn folder(name: &str) -> Self {
        IconId::Folder(name.trim().to_lowercase())
    }

    pub fn default_position(&self) -> Position {
        match self {
            IconId::DontLook => DONT_LOOK_POSITION,
            IconId::Folder(name) => folder_preset(name).position(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DesktopUi {
    viewport: Viewport,
    windows: Vec<OpenWindow>,
    about_me: Option<AboutMeLayout>,
    icons: BTreeMap<IconId, Position>,
    note_offset: Position,
    pub dont_look: DontLook,
}

impl Default for DesktopUi {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl DesktopUi {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            windows: Vec::new(),
            about_me: None,
            icons: BTreeMap::new(),
            note_offset: Position::default(),
            dont_look: DontLook::default(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Track a resize, pulling windows and moved icons back on screen.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        for window in &mut self.windows {
            let kind = window.kind();
            // The contact card stays centered rather than where it was dropped.
            let wanted = if kind == WindowKind::Contact {
                kind.default_position(viewport)
            } else {
                window.position
            };
            window.position = kind.frame(viewport).clamp(wanted, viewport);
        }
        if let Some(about_me) = self.about_me.as_mut() {
            for panel in AboutPanel::ALL {
                let clamped = panel.frame().clamp(about_me.position(panel), viewport);
                about_me.set_position(panel, clamped);
            }
        }
        for position in self.icons.values_mut() {
            *position = IconBounds::clamp(*position, viewport);
        }
    }

    // ------------------------------------------------------------------
    // Windows
    // ------------------------------------------------------------------

    /// Open windows, bottom to top.
    pub fn windows(&self) -> &[OpenWindow] {
        &self.windows
    }

    pub fn window(&self, kind: WindowKind) -> Option<&OpenWindow> {
        self.windows.iter().find(|window| window.kind() == kind)
    }

    fn window_mut(&mut self, kind: WindowKind) -> Option<&mut OpenWindow> {
        self.windows.iter_mut().find(|window| window.kind() == kind)
    }

    pub fn is_open(&self, kind: WindowKind) -> bool {
        self.window(kind).is_some()
    }

    /// Open `spec`, or retarget the already open window of the same kind.
    ///
    /// Retargeting keeps the window's position and lifecycle and restores it
    /// if it was minimized.
    pub fn open(&mut self, spec: WindowSpec, now: f64) {
        let kind = spec.kind();
        if let Some(window) = self.window_mut(kind) {
            window.spec = spec;
            window.minimized = false;
            self.bring_to_front(kind);
            return;
        }

        if kind == WindowKind::AboutMe {
            self.about_me = Some(AboutMeLayout::new(self.viewport));
        }
        let position = kind
            .frame(self.viewport)
            .clamp(kind.default_position(self.viewport), self.viewport);
        self.windows.push(OpenWindow {
            spec,
            lifecycle: WindowLifecycle::opened(now),
            position,
            minimized: false,
            maximized: false,
        });
    }

    /// Close the window of this kind if open, otherwise open `spec`.
    /// Returns whether the window is open afterwards.
    pub fn toggle(&mut self, spec: WindowSpec, now: f64) -> bool {
        let kind = spec.kind();
        if self.is_open(kind) {
            self.close(kind);
            false
        } else {
            self.open(spec, now);
            true
        }
    }

    /// Returns whether a window was closed.
    pub fn close(&mut self, kind: WindowKind) -> bool {
        let before = self.windows.len();
        self.windows.retain(|window| window.kind() != kind);
        if kind == WindowKind::AboutMe {
            self.about_me = None;
        }
        self.windows.len() != before
    }

    /// Close on a backdrop click, unless the window has only just opened.
    pub fn backdrop_click(&mut self, kind: WindowKind, now: f64) -> bool {
        let accepted = self
            .window_mut(kind)
            .is_some_and(|window| window.lifecycle.backdrop_click(now));
        if accepted {
            self.close(kind);
        }
        accepted
    }

    /// Close every window that listens for Escape; returns what was closed.
    pub fn escape(&mut self) -> Vec<WindowKind> {
        let closing: Vec<WindowKind> = self
            .windows
            .iter()
            .map(OpenWindow::kind)
            .filter(|kind| kind.closes_on_escape())
            .collect();
        for kind in &closing {
            self.close(*kind);
        }
        closing
    }

    pub fn animation_frame(&mut self, kind: WindowKind) {
        if let Some(window) = self.window_mut(kind) {
            window.lifecycle.on_animation_frame();
        }
    }

    pub fn bring_to_front(&mut self, kind: WindowKind) {
        if let Some(index) = self.windows.iter().position(|window| window.kind() == kind) {
            let window = self.windows.remove(index);
            self.windows.push(window);
        }
    }

    pub fn z_index(&self, kind: WindowKind) -> Option<u32> {
        self.windows
            .iter()
            .position(|window| window.kind() == kind)
            .map(|index| WINDOW_BASE_Z + index as u32 * WINDOW_Z_STEP)
    }

    pub fn position(&self, kind: WindowKind) -> Option<Position> {
        self.window(kind).map(|window| window.position)
    }

    /// Move an open window, keeping it on screen.
    pub fn set_position(&mut self, kind: WindowKind, position: Position) {
        let viewport = self.viewport;
        if let Some(window) = self.window_mut(kind) {
            window.position = kind.frame(viewport).clamp(position, viewport);
        }
    }

    pub fn set_minimized(&mut self, kind: WindowKind, minimized: bool) {
        if let Some(window) = self.window_mut(kind) {
            window.minimized = minimized;
        }
    }

    pub fn toggle_maximized(&mut self, kind: WindowKind) {
        if let Some(window) = self.window_mut(kind) {
            window.maximized = !window.maximized;
        }
    }

    /// Switch the project browser to another folder, matched case-insensitively.
    pub fn select_project(&mut self, name: &str) -> bool {
        let wanted = name.trim().to_lowercase();
        let Some(window) = self.window_mut(WindowKind::Projects) else {
            return false;
        };
        let WindowSpec::Projects { current, all } = &mut window.spec else {
            return false;
        };
        match all.iter().find(|project| project.name.to_lowercase() == wanted) {
            Some(project) => {
                *current = project.clone();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // About Me panels
    // ------------------------------------------------------------------

    pub fn about_me(&self) -> Option<&AboutMeLayout> {
        self.about_me.as_ref()
    }

    /// Focus a panel and raise the About Me window with it.
    pub fn activate_panel(&mut self, panel: AboutPanel) {
        if let Some(about_me) = self.about_me.as_mut() {
            about_me.focus.activate(panel);
        }
        self.bring_to_front(WindowKind::AboutMe);
    }

    /// Stacking of one About Me panel, inside the window's band.
    pub fn panel_z_index(&self, panel: AboutPanel) -> Option<u32> {
        let base = self.z_index(WindowKind::AboutMe)?;
        let layout = self.about_me.as_ref()?;
        Some(base + layout.focus.z_index(panel))
    }

    pub fn set_panel_position(&mut self, panel: AboutPanel, position: Position) {
        let viewport = self.viewport;
        if let Some(about_me) = self.about_me.as_mut() {
            about_me.set_position(panel, panel.frame().clamp(position, viewport));
        }
    }

    // ------------------------------------------------------------------
    // Desktop icons
    // ------------------------------------------------------------------

    /// `(right, top)` of a right-anchored icon.
    pub fn icon_position(&self, id: &IconId) -> Position {
        self.icons
            .get(id)
            .copied()
            .unwrap_or_else(|| id.default_position())
    }

    pub fn set_icon_position(&mut self, id: IconId, position: Position) {
        let clamped = IconBounds::clamp(position, self.viewport);
        self.icons.insert(id, clamped);
    }

    pub fn note_offset(&self) -> Position {
        self.note_offset
    }

    /// The note follows the pointer freely; it is not clamped.
    pub fn set_note_offset(&mut self, offset: Position) {
        self.note_offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::focus::ACTIVE_Z;
    use crate::desktop::lifecycle::WindowPhase;
    use shared_types::ProjectFile;

    const VIEWPORT: Viewport = Viewport::new(1440.0, 900.0);

    fn project(name: &str) -> Project {
        Project::new(
            name,
            vec![ProjectFile {
                name: "deck.pdf".to_string(),
                url: format!("/projects/{name}/deck.pdf"),
            }],
        )
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut ui = DesktopUi::new(VIEWPORT);
        assert!(ui.toggle(WindowSpec::Gallery, 0.0));
        assert!(ui.is_open(WindowKind::Gallery));
        assert!(!ui.toggle(WindowSpec::Gallery, 10.0));
        assert!(!ui.is_open(WindowKind::Gallery));
    }

    #[test]
    fn at_most_one_window_per_kind() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::web_view("/a.pdf", "a.pdf"), 0.0);
        ui.set_position(WindowKind::WebView, Position::new(300.0, 200.0));
        ui.open(WindowSpec::web_view("/b.pdf", "b.pdf"), 50.0);

        assert_eq!(ui.windows().len(), 1);
        let window = ui.window(WindowKind::WebView).unwrap();
        assert_eq!(window.spec, WindowSpec::web_view("/b.pdf", "b.pdf"));
        assert_eq!(window.position, Position::new(300.0, 200.0));
        assert_eq!(window.lifecycle.opened_at(), 0.0);
    }

    #[test]
    fn new_window_enters_then_opens_on_next_frame() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Messages, 0.0);
        let phase = |ui: &DesktopUi| ui.window(WindowKind::Messages).unwrap().lifecycle.phase();

        assert_eq!(phase(&ui), WindowPhase::Entering);
        ui.animation_frame(WindowKind::Messages);
        assert_eq!(phase(&ui), WindowPhase::Open);
    }

    #[test]
    fn closing_discards_position() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Messages, 0.0);
        ui.set_position(WindowKind::Messages, Position::new(400.0, 300.0));
        assert!(ui.close(WindowKind::Messages));
        assert_eq!(ui.position(WindowKind::Messages), None);

        ui.open(WindowSpec::Messages, 1_000.0);
        assert_eq!(
            ui.position(WindowKind::Messages),
            Some(layout::MESSAGES_POSITION)
        );
    }

    #[test]
    fn backdrop_respects_grace_period() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Contact, 1_000.0);
        assert!(!ui.backdrop_click(WindowKind::Contact, 1_100.0));
        assert!(ui.is_open(WindowKind::Contact));
        assert!(ui.backdrop_click(WindowKind::Contact, 1_300.0));
        assert!(!ui.is_open(WindowKind::Contact));
        assert!(!ui.backdrop_click(WindowKind::Contact, 5_000.0));
    }

    #[test]
    fn escape_closes_only_gallery_and_messages() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Gallery, 0.0);
        ui.open(WindowSpec::Contact, 0.0);
        ui.open(WindowSpec::Messages, 0.0);

        let closed = ui.escape();

        assert_eq!(closed, vec![WindowKind::Gallery, WindowKind::Messages]);
        assert!(ui.is_open(WindowKind::Contact));
        assert_eq!(ui.windows().len(), 1);
    }

    #[test]
    fn window_positions_stay_clamped() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Messages, 0.0);
        ui.set_position(WindowKind::Messages, Position::new(5_000.0, -40.0));
        assert_eq!(
            ui.position(WindowKind::Messages),
            Some(Position::new(900.0, 0.0))
        );

        ui.set_viewport(Viewport::new(1000.0, 600.0));
        assert_eq!(
            ui.position(WindowKind::Messages),
            Some(Position::new(460.0, 0.0))
        );
    }

    #[test]
    fn contact_card_recenters_on_resize() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Contact, 0.0);
        ui.set_position(WindowKind::Contact, Position::new(10.0, 10.0));

        let smaller = Viewport::new(1000.0, 600.0);
        ui.set_viewport(smaller);

        assert_eq!(
            ui.position(WindowKind::Contact),
            Some(layout::contact_card_position(smaller))
        );
    }

    #[test]
    fn last_opened_or_raised_window_is_on_top() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::Messages, 0.0);
        ui.open(WindowSpec::Contact, 0.0);
        assert!(ui.z_index(WindowKind::Contact) > ui.z_index(WindowKind::Messages));

        ui.bring_to_front(WindowKind::Messages);
        assert!(ui.z_index(WindowKind::Messages) > ui.z_index(WindowKind::Contact));
        assert_eq!(ui.z_index(WindowKind::Gallery), None);
    }

    #[test]
    fn about_me_panels_stay_below_later_windows() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::AboutMe, 0.0);
        ui.open(WindowSpec::Messages, 0.0);

        let messages = ui.z_index(WindowKind::Messages).unwrap();
        for panel in AboutPanel::ALL {
            let z = ui.panel_z_index(panel).unwrap();
            assert!(z < messages - 1, "{panel:?} at {z} covers messages at {messages}");
        }

        ui.activate_panel(AboutPanel::Photo);
        let about_me = ui.z_index(WindowKind::AboutMe).unwrap();
        let messages = ui.z_index(WindowKind::Messages).unwrap();
        assert!(about_me > messages);
        assert!(ui.panel_z_index(AboutPanel::Photo) > ui.panel_z_index(AboutPanel::Notes));
        assert_eq!(ui.panel_z_index(AboutPanel::Photo), Some(about_me + ACTIVE_Z));
    }

    #[test]
    fn about_me_layout_lives_with_the_window() {
        let mut ui = DesktopUi::new(VIEWPORT);
        assert!(ui.about_me().is_none());

        ui.toggle(WindowSpec::AboutMe, 0.0);
        ui.activate_panel(AboutPanel::Photo);
        ui.set_panel_position(AboutPanel::Photo, Position::new(10.0, 10.0));
        assert_eq!(ui.about_me().unwrap().focus.active(), AboutPanel::Photo);

        ui.toggle(WindowSpec::AboutMe, 500.0);
        assert!(ui.about_me().is_none());

        ui.toggle(WindowSpec::AboutMe, 1_000.0);
        let layout = ui.about_me().unwrap();
        assert_eq!(layout.focus.active(), AboutPanel::Notes);
        assert_eq!(layout.position(AboutPanel::Photo), Position::new(120.0, 90.0));
    }

    #[test]
    fn project_switching_is_case_insensitive() {
        let mut ui = DesktopUi::new(VIEWPORT);
        let all = vec![project("Project 01"), project("Project 02")];
        ui.open(
            WindowSpec::Projects {
                current: all[0].clone(),
                all: all.clone(),
            },
            0.0,
        );

        assert!(ui.select_project("project 02"));
        assert!(!ui.select_project("Missing"));
        let Some(WindowSpec::Projects { current, .. }) =
            ui.window(WindowKind::Projects).map(|w| w.spec.clone())
        else {
            panic!("projects window should be open");
        };
        assert_eq!(current.name, "Project 02");
    }

    #[test]
    fn icons_default_then_clamp() {
        let mut ui = DesktopUi::new(VIEWPORT);
        assert_eq!(ui.icon_position(&IconId::DontLook), Position::new(100.0, 592.0));
        assert_eq!(
            ui.icon_position(&IconId::folder("Project 04")),
            Position::new(180.0, 110.0)
        );

        ui.set_icon_position(IconId::DontLook, Position::new(-30.0, 10.0));
        assert_eq!(ui.icon_position(&IconId::DontLook), Position::new(0.0, 60.0));

        ui.set_icon_position(IconId::folder("Project 01"), Position::new(165.0, 700.0));
        ui.set_viewport(Viewport::new(1440.0, 600.0));
        assert_eq!(
            ui.icon_position(&IconId::folder("project 01")),
            Position::new(165.0, 420.0)
        );
    }

    #[test]
    fn minimize_and_reopen_restores() {
        let mut ui = DesktopUi::new(VIEWPORT);
        ui.open(WindowSpec::web_view("/r.pdf", "Resume.pdf"), 0.0);
        ui.set_minimized(WindowKind::WebView, true);
        ui.toggle_maximized(WindowKind::WebView);
        assert!(ui.window(WindowKind::WebView).unwrap().minimized);

        ui.open(WindowSpec::web_view("/r.pdf", "Resume.pdf"), 10.0);
        let window = ui.window(WindowKind::WebView).unwrap();
        assert!(!window.minimized);
        assert!(window.maximized);
    }
}
