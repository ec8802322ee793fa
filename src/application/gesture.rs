//! Click-versus-drag disambiguation for pointer input over the board.
//!
//! The machine knows nothing about partitions. It turns press / hover /
//! release / cancel events into outcomes the board understands: a toggle of
//! one square or a rectangle between two squares.

use crate::domain::SquareId;

use super::Settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    /// Pressed on a square; still a click unless the pointer moves or is held
    Armed {
        start: SquareId,
        pressed_at: f64,
        origin: (f32, f32),
    },
    Dragging {
        start: SquareId,
        current: SquareId,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    None,
    /// A click on one square
    Toggle(SquareId),
    /// A drag just began and already spans `start..end`
    SweepStarted { start: SquareId, end: SquareId },
    /// The running drag now spans `start..end`
    Sweep { start: SquareId, end: SquareId },
    SweepEnded,
    /// The drag was aborted; its selection should be discarded
    Cancelled,
}

#[derive(Clone, Debug)]
pub struct Gesture {
    state: GestureState,
    drag_delay: f64,
    drag_distance: f32,
}

impl Gesture {
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GestureState::Idle,
            drag_delay: settings.drag_delay,
            drag_distance: settings.drag_distance,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Pointer pressed over `square`
    pub fn press(&mut self, square: SquareId, pos: (f32, f32), now: f64) -> GestureOutcome {
        self.state = GestureState::Armed {
            start: square,
            pressed_at: now,
            origin: pos,
        };
        GestureOutcome::None
    }

    /// Pointer moved (or stayed) while the button is down.
    /// `square` is the square under the pointer, if any.
    pub fn hover(&mut self, square: Option<SquareId>, pos: (f32, f32), now: f64) -> GestureOutcome {
        match self.state {
            GestureState::Idle => GestureOutcome::None,
            GestureState::Armed { start, pressed_at, origin } => {
                let (dx, dy) = (pos.0 - origin.0, pos.1 - origin.1);
                let moved = (dx * dx + dy * dy).sqrt() > self.drag_distance;
                let held = now - pressed_at >= self.drag_delay;
                let left_start = square.is_some_and(|s| s != start);

                if moved || (held && left_start) {
                    let end = square.unwrap_or(start);
                    self.state = GestureState::Dragging { start, current: end };
                    GestureOutcome::SweepStarted { start, end }
                } else {
                    GestureOutcome::None
                }
            }
            GestureState::Dragging { start, current } => match square {
                Some(end) if end != current => {
                    self.state = GestureState::Dragging { start, current: end };
                    GestureOutcome::Sweep { start, end }
                }
                _ => GestureOutcome::None,
            },
        }
    }

    /// Pointer released
    pub fn release(&mut self) -> GestureOutcome {
        let outcome = match self.state {
            GestureState::Idle => GestureOutcome::None,
            GestureState::Armed { start, .. } => GestureOutcome::Toggle(start),
            GestureState::Dragging { .. } => GestureOutcome::SweepEnded,
        };
        self.state = GestureState::Idle;
        outcome
    }

    /// External abort (pointer left the board, Escape)
    pub fn cancel(&mut self) -> GestureOutcome {
        let outcome = match self.state {
            GestureState::Dragging { .. } => GestureOutcome::Cancelled,
            _ => GestureOutcome::None,
        };
        self.state = GestureState::Idle;
        outcome
    }

    /// Forget any gesture without reporting it, e.g. after the board was rebuilt
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gesture() -> Gesture {
        Gesture::new(&Settings::default())
    }

    #[test]
    fn test_quick_click_toggles() {
        let mut g = gesture();
        g.press(SquareId(3), (10.0, 10.0), 0.0);
        assert_eq!(g.hover(Some(SquareId(3)), (11.0, 10.0), 0.05), GestureOutcome::None);
        assert_eq!(g.release(), GestureOutcome::Toggle(SquareId(3)));
        assert_eq!(g.state(), GestureState::Idle);
    }

    #[test]
    fn test_long_press_on_same_square_is_still_a_click() {
        let mut g = gesture();
        g.press(SquareId(3), (10.0, 10.0), 0.0);
        assert_eq!(g.hover(Some(SquareId(3)), (10.0, 10.0), 2.0), GestureOutcome::None);
        assert_eq!(g.release(), GestureOutcome::Toggle(SquareId(3)));
    }

    #[test]
    fn test_movement_starts_drag() {
        let mut g = gesture();
        g.press(SquareId(0), (10.0, 10.0), 0.0);
        assert_eq!(
            g.hover(Some(SquareId(0)), (20.0, 10.0), 0.01),
            GestureOutcome::SweepStarted { start: SquareId(0), end: SquareId(0) }
        );
        assert!(g.is_dragging());
        assert_eq!(
            g.hover(Some(SquareId(6)), (60.0, 60.0), 0.2),
            GestureOutcome::Sweep { start: SquareId(0), end: SquareId(6) }
        );
        assert_eq!(g.hover(Some(SquareId(6)), (61.0, 60.0), 0.3), GestureOutcome::None);
        assert_eq!(g.release(), GestureOutcome::SweepEnded);
    }

    #[test]
    fn test_held_press_entering_neighbour_starts_drag() {
        let mut g = gesture();
        g.press(SquareId(0), (10.0, 10.0), 0.0);
        assert_eq!(
            g.hover(Some(SquareId(1)), (12.0, 10.0), 0.15),
            GestureOutcome::SweepStarted { start: SquareId(0), end: SquareId(1) }
        );
    }

    #[test]
    fn test_cancel_only_reports_drags() {
        let mut g = gesture();
        g.press(SquareId(0), (0.0, 0.0), 0.0);
        assert_eq!(g.cancel(), GestureOutcome::None);

        g.press(SquareId(0), (0.0, 0.0), 0.0);
        g.hover(None, (50.0, 0.0), 0.5);
        assert_eq!(g.cancel(), GestureOutcome::Cancelled);
        assert_eq!(g.release(), GestureOutcome::None);
    }
}
