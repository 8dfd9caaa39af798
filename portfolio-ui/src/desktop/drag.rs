//! Pointer-drag arithmetic, independent of the DOM.
//!
//! A [`DragController`] owns at most one [`DragSession`]. The browser glue
//! feeds it pointer coordinates and applies whatever position it returns.

use super::geometry::{Anchor, Point, Position};

/// Movement beyond this many pixels on either axis turns a press into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub start_pointer: Point,
    pub start_position: Position,
    pub moved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// No session was active.
    Idle,
    /// The pointer stayed within the threshold; let the click through.
    Click,
    /// The element moved; the click that follows must be swallowed.
    Dragged,
}

impl DragOutcome {
    pub fn suppresses_click(self) -> bool {
        self == DragOutcome::Dragged
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragController {
    anchor: Anchor,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(anchor: Anchor) -> Self {
        Self {
            anchor,
            session: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a session, replacing any stale one.
    pub fn begin(&mut self, pointer: Point, position: Position) {
        self.session = Some(DragSession {
            start_pointer: pointer,
            start_position: position,
            moved: false,
        });
    }

    /// Position for the current pointer, or `None` without a session.
    pub fn update(
        &mut self,
        pointer: Point,
        clamp: impl Fn(Position) -> Position,
    ) -> Option<Position> {
        let anchor = self.anchor;
        let session = self.session.as_mut()?;

        let dx = pointer.x - session.start_pointer.x;
        let dy = pointer.y - session.start_pointer.y;
        if dx.abs() > DRAG_THRESHOLD_PX || dy.abs() > DRAG_THRESHOLD_PX {
            session.moved = true;
        }

        let x = match anchor {
            Anchor::TopLeft => session.start_position.x + dx,
            Anchor::TopRight => session.start_position.x - dx,
        };
        Some(clamp(Position::new(x, session.start_position.y + dy)))
    }

    pub fn end(&mut self) -> DragOutcome {
        match self.session.take() {
            Some(session) if session.moved => DragOutcome::Dragged,
            Some(_) => DragOutcome::Click,
            None => DragOutcome::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::geometry::{IconBounds, Viewport, WindowFrame};

    #[test]
    fn small_wiggle_is_a_click() {
        let mut drag = DragController::new(Anchor::TopLeft);
        drag.begin(Point::new(10.0, 10.0), Position::new(100.0, 100.0));
        drag.update(Point::new(12.0, 13.0), |p| p);
        assert!(drag.is_active());
        assert_eq!(drag.end(), DragOutcome::Click);
        assert!(!drag.is_active());
        assert!(!DragOutcome::Click.suppresses_click());
    }

    #[test]
    fn crossing_threshold_marks_drag_even_if_pointer_returns() {
        let mut drag = DragController::new(Anchor::TopLeft);
        drag.begin(Point::new(0.0, 0.0), Position::new(0.0, 0.0));
        drag.update(Point::new(0.0, 4.0), |p| p);
        drag.update(Point::new(0.0, 0.0), |p| p);
        assert_eq!(drag.end(), DragOutcome::Dragged);
    }

    #[test]
    fn end_without_session_is_idle() {
        let mut drag = DragController::default();
        assert_eq!(drag.end(), DragOutcome::Idle);
        assert_eq!(drag.update(Point::new(1.0, 1.0), |p| p), None);
    }

    #[test]
    fn right_anchor_moves_opposite_to_pointer() {
        let viewport = Viewport::new(1280.0, 800.0);
        let mut drag = DragController::new(Anchor::TopRight);
        drag.begin(Point::new(500.0, 300.0), Position::new(100.0, 592.0));
        let next = drag
            .update(Point::new(460.0, 250.0), |p| IconBounds::clamp(p, viewport))
            .unwrap();
        assert_eq!(next, Position::new(140.0, 542.0));
    }

    #[test]
    fn update_is_clamped() {
        let viewport = Viewport::new(1280.0, 800.0);
        let frame = WindowFrame::new(900.0, 560.0);
        let mut drag = DragController::new(Anchor::TopLeft);
        drag.begin(Point::new(200.0, 130.0), Position::new(160.0, 120.0));
        let next = drag
            .update(Point::new(900.0, 1000.0), |p| frame.clamp(p, viewport))
            .unwrap();
        assert_eq!(next, Position::new(380.0, 720.0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::desktop::geometry::{Viewport, WindowFrame};
    use proptest::prelude::*;

    proptest! {
        /// The last update of any pointer sequence lands on start + delta, clamped.
        #[test]
        fn final_position_is_start_plus_delta(
            start_x in 0.0f64..1000.0,
            start_y in 0.0f64..700.0,
            moves in prop::collection::vec((-2000.0f64..2000.0, -2000.0f64..2000.0), 1..20),
        ) {
            let viewport = Viewport::new(1280.0, 800.0);
            let frame = WindowFrame::new(360.0, 306.0);
            let clamp = |p| frame.clamp(p, viewport);
            let start_pointer = Point::new(640.0, 400.0);
            let start = Position::new(start_x, start_y);

            let mut drag = DragController::new(Anchor::TopLeft);
            drag.begin(start_pointer, start);
            let mut last = start;
            for (x, y) in &moves {
                last = drag.update(Point::new(*x, *y), clamp).unwrap();
            }

            let (fx, fy) = moves[moves.len() - 1];
            let expected = clamp(Position::new(
                start.x + (fx - start_pointer.x),
                start.y + (fy - start_pointer.y),
            ));
            prop_assert_eq!(last, expected);
        }

        /// A press that never leaves the threshold box always ends as a click.
        #[test]
        fn sub_threshold_sequences_click(
            moves in prop::collection::vec((-3.0f64..=3.0, -3.0f64..=3.0), 0..10),
        ) {
            let mut drag = DragController::new(Anchor::TopLeft);
            drag.begin(Point::new(50.0, 50.0), Position::new(0.0, 0.0));
            for (dx, dy) in moves {
                drag.update(Point::new(50.0 + dx, 50.0 + dy), |p| p);
            }
            prop_assert_eq!(drag.end(), DragOutcome::Click);
        }
    }
}
