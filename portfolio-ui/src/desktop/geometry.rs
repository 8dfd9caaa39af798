//! Screen-space primitives shared by every movable element.
//!
//! Windows are anchored by their top-left corner. Desktop icons on the right
//! side are anchored by `(right, top)` so they stay glued to the right edge
//! when the browser is resized; for those, `Position::x` holds `right`.

/// Height kept free at the bottom of the screen for the dock.
pub const DOCK_RESERVE_PX: f64 = 80.0;
/// Icons never slide under the menu bar.
pub const ICON_MIN_TOP_PX: f64 = 60.0;
pub const ICON_BOTTOM_RESERVE_PX: f64 = 180.0;
pub const ICON_RIGHT_RESERVE_PX: f64 = 120.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Anchor {
    #[default]
    TopLeft,
    /// `x` grows leftwards from the right edge.
    TopRight,
}

/// Clamp `value` into `[min, max]`; `min` wins when the range is empty.
fn clamp_lower_wins(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Outer size of a floating window, used only to keep it on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowFrame {
    pub width: f64,
    pub height: f64,
}

impl WindowFrame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Keep the window inside the viewport horizontally and its title bar
    /// above the dock.
    pub fn clamp(&self, pos: Position, viewport: Viewport) -> Position {
        Position {
            x: clamp_lower_wins(pos.x, 0.0, viewport.width - self.width),
            y: clamp_lower_wins(pos.y, 0.0, viewport.height - DOCK_RESERVE_PX),
        }
    }
}

/// Bounds for right-anchored desktop icons (`x` is the `right` offset).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IconBounds;

impl IconBounds {
    pub fn clamp(pos: Position, viewport: Viewport) -> Position {
        let max_top = (viewport.height - ICON_BOTTOM_RESERVE_PX).max(ICON_MIN_TOP_PX);
        let max_right = (viewport.width - ICON_RIGHT_RESERVE_PX).max(0.0);
        Position {
            x: clamp_lower_wins(pos.x, 0.0, max_right),
            y: clamp_lower_wins(pos.y, ICON_MIN_TOP_PX, max_top),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    #[test]
    fn window_clamp_keeps_frame_on_screen() {
        let frame = WindowFrame::new(360.0, 306.0);
        assert_eq!(
            frame.clamp(Position::new(-50.0, -10.0), VIEWPORT),
            Position::new(0.0, 0.0)
        );
        assert_eq!(
            frame.clamp(Position::new(5000.0, 5000.0), VIEWPORT),
            Position::new(920.0, 720.0)
        );
        assert_eq!(
            frame.clamp(Position::new(100.0, 200.0), VIEWPORT),
            Position::new(100.0, 200.0)
        );
    }

    #[test]
    fn window_wider_than_viewport_pins_left() {
        let frame = WindowFrame::new(900.0, 560.0);
        let narrow = Viewport::new(600.0, 800.0);
        assert_eq!(frame.clamp(Position::new(300.0, 10.0), narrow).x, 0.0);
    }

    #[test]
    fn icon_clamp_respects_menu_bar_and_dock() {
        assert_eq!(
            IconBounds::clamp(Position::new(-20.0, 10.0), VIEWPORT),
            Position::new(0.0, 60.0)
        );
        assert_eq!(
            IconBounds::clamp(Position::new(2000.0, 2000.0), VIEWPORT),
            Position::new(1160.0, 620.0)
        );
    }

    #[test]
    fn icon_clamp_on_tiny_viewport_keeps_minimums() {
        let tiny = Viewport::new(100.0, 150.0);
        assert_eq!(
            IconBounds::clamp(Position::new(50.0, 500.0), tiny),
            Position::new(0.0, 60.0)
        );
    }
}
