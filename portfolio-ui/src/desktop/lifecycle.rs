//! Open/close phases of a floating window.
//!
//! `Closed -> Entering` on open, `Entering -> Open` one animation frame
//! later (drives the CSS transition), back to `Closed` on close.

/// Backdrop clicks this soon after opening are the opening click itself.
pub const OPEN_GRACE_MS: f64 = 300.0;
/// Window content fetches wait for the opening animation to settle.
pub const CONTENT_FETCH_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPhase {
    #[default]
    Closed,
    Entering,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowLifecycle {
    phase: WindowPhase,
    opened_at: f64,
}

impl WindowLifecycle {
    pub fn opened(now: f64) -> Self {
        Self {
            phase: WindowPhase::Entering,
            opened_at: now,
        }
    }

    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    pub fn opened_at(&self) -> f64 {
        self.opened_at
    }

    pub fn is_visible(&self) -> bool {
        self.phase != WindowPhase::Closed
    }

    /// True once the entry transition has been triggered.
    pub fn is_shown(&self) -> bool {
        self.phase == WindowPhase::Open
    }

    pub fn on_animation_frame(&mut self) {
        if self.phase == WindowPhase::Entering {
            self.phase = WindowPhase::Open;
        }
    }

    pub fn accepts_backdrop_close(&self, now: f64) -> bool {
        self.is_visible() && now - self.opened_at >= OPEN_GRACE_MS
    }

    /// Returns whether the click closed the window.
    pub fn backdrop_click(&mut self, now: f64) -> bool {
        if !self.accepts_backdrop_close(now) {
            return false;
        }
        self.close();
        true
    }

    pub fn close(&mut self) {
        self.phase = WindowPhase::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_enters_then_opens_on_next_frame() {
        let mut lifecycle = WindowLifecycle::opened(1_000.0);
        assert_eq!(lifecycle.phase(), WindowPhase::Entering);
        assert!(!lifecycle.is_shown());

        lifecycle.on_animation_frame();
        assert_eq!(lifecycle.phase(), WindowPhase::Open);
        assert!(lifecycle.is_shown());
    }

    #[test]
    fn backdrop_click_inside_grace_period_is_ignored() {
        let mut lifecycle = WindowLifecycle::opened(1_000.0);
        lifecycle.on_animation_frame();
        assert!(!lifecycle.backdrop_click(1_000.0));
        assert!(!lifecycle.backdrop_click(1_299.0));
        assert_eq!(lifecycle.phase(), WindowPhase::Open);
    }

    #[test]
    fn backdrop_click_after_grace_period_closes() {
        let mut lifecycle = WindowLifecycle::opened(1_000.0);
        lifecycle.on_animation_frame();
        assert!(lifecycle.backdrop_click(1_300.0));
        assert_eq!(lifecycle.phase(), WindowPhase::Closed);
    }

    #[test]
    fn closed_window_ignores_frames_and_clicks() {
        let mut lifecycle = WindowLifecycle::default();
        lifecycle.on_animation_frame();
        assert_eq!(lifecycle.phase(), WindowPhase::Closed);
        assert!(!lifecycle.backdrop_click(10_000.0));
    }
}
