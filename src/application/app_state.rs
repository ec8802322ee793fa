use crate::domain::{Board, BoardError, SelectionRequest};

use super::gesture::{Gesture, GestureOutcome};
use super::status::StatusBar;
use super::Settings;

/// AppState coordinates the board with the editor's inputs and messages.
/// This is the application layer; it never draws and never polls input.
pub struct AppState {
    pub board: Board,
    pub settings: Settings,
    pub gesture: Gesture,
    pub status: StatusBar,
    /// Requested edge of the next board
    pub board_size_input: usize,
    /// Requested grid for the next subdivision
    pub grid_size_input: usize,
    pub subdivide_options_open: bool,
}

impl AppState {
    /// Editor state with a default-sized board already created
    pub fn new(settings: Settings) -> Self {
        let state = Self {
            board: Board::new(),
            gesture: Gesture::new(&settings),
            status: StatusBar::new(settings.status_duration),
            board_size_input: settings.default_board_size,
            grid_size_input: settings.default_grid_size,
            subdivide_options_open: false,
            settings,
        };
        state.create_board()
    }

    /// Show a success message. Messages close the subdivision options.
    fn report_success(&mut self, text: String) {
        self.subdivide_options_open = false;
        tracing::info!("{text}");
        self.status.success(text);
    }

    fn report_error(&mut self, err: &BoardError) {
        self.subdivide_options_open = false;
        self.status.error(err.to_string());
    }

    /// Build a fresh board of `board_size_input` cells a side
    pub fn create_board(mut self) -> Self {
        let size = self.board_size_input;
        match self.board.initialize(size) {
            Ok(()) => {
                self.gesture.reset();
                self.report_success(format!("Successfully created a {size}×{size} square board!"));
            }
            Err(err) => self.report_error(&err),
        }
        self
    }

    /// Open the subdivision panel; needs exactly one selected square
    pub fn open_subdivide_options(mut self) -> Self {
        if self.board.can_subdivide_selection() {
            self.subdivide_options_open = true;
        } else {
            self.report_error(&BoardError::SelectionCount {
                expected: 1,
                found: self.board.selection().len(),
            });
        }
        self
    }

    pub fn close_subdivide_options(mut self) -> Self {
        self.subdivide_options_open = false;
        self
    }

    /// Subdivide the selected square by `grid_size_input`
    pub fn confirm_subdivide(mut self) -> Self {
        let grid = self.grid_size_input;
        match self.board.subdivide_selected(grid) {
            Ok(children) => self.report_success(format!(
                "Square subdivided into {grid}×{grid} grid ({} squares)!",
                children.len()
            )),
            Err(err) => self.report_error(&err),
        }
        self
    }

    /// Merge the selected squares
    pub fn merge_selection(mut self) -> Self {
        match self.board.merge_selected() {
            Ok(_) => self.report_success("Squares successfully merged!".to_owned()),
            Err(err) => self.report_error(&err),
        }
        self
    }

    pub fn clear_selection(mut self) -> Self {
        self.board.clear_selection();
        self
    }

    /// Enter: confirm the open subdivision, otherwise rebuild the board
    pub fn confirm(self) -> Self {
        if self.subdivide_options_open {
            self.confirm_subdivide()
        } else {
            self.create_board()
        }
    }

    /// Escape: abort a drag, otherwise close the subdivision panel
    pub fn escape(mut self) -> Self {
        if self.gesture.is_dragging() {
            let outcome = self.gesture.cancel();
            self.apply_gesture(outcome);
            self
        } else {
            self.close_subdivide_options()
        }
    }

    pub fn adjust_board_size(mut self, delta: i64) -> Self {
        self.board_size_input = self
            .settings
            .clamp_board_size(self.board_size_input as i64 + delta);
        self
    }

    pub fn adjust_grid_size(mut self, delta: i64) -> Self {
        self.grid_size_input = self.settings.clamp_grid_size(self.grid_size_input as i64 + delta);
        self
    }

    /// Feed a resolved pointer gesture into the selection
    pub fn apply_gesture(&mut self, outcome: GestureOutcome) {
        let result = match outcome {
            GestureOutcome::None => Ok(()),
            GestureOutcome::Toggle(id) => self
                .board
                .apply_selection(SelectionRequest::Toggle(id))
                .map(|_| ()),
            GestureOutcome::SweepStarted { start, end } => {
                self.board.begin_sweep();
                self.board
                    .apply_selection(SelectionRequest::Rectangle { start, end })
                    .map(|_| ())
            }
            GestureOutcome::Sweep { start, end } => self
                .board
                .apply_selection(SelectionRequest::Rectangle { start, end })
                .map(|_| ()),
            GestureOutcome::SweepEnded => {
                self.board.end_sweep();
                Ok(())
            }
            GestureOutcome::Cancelled => {
                self.board.cancel_sweep();
                Ok(())
            }
        };

        // A stale id means the gesture outlived the squares it started on
        if let Err(err) = result {
            tracing::debug!(%err, "gesture dropped");
            self.gesture.reset();
            self.board.cancel_sweep();
        }
    }

    /// Advance timers by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        self.status.tick(delta_time);
        self
    }

    /// "5×5 board (25 squares)"
    pub fn board_preview(&self) -> String {
        let n = self.board_size_input;
        format!("{n}×{n} board ({} squares)", n * n)
    }

    /// "3×3 grid (9 squares)"
    pub fn subdivide_preview(&self) -> String {
        let n = self.grid_size_input;
        format!("{n}×{n} grid ({} squares)", n * n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::StatusKind;
    use crate::domain::SquareId;

    fn state() -> AppState {
        AppState::new(Settings::default())
    }

    fn status_kind(state: &AppState) -> Option<StatusKind> {
        state.status.current().map(|m| m.kind)
    }

    #[test]
    fn test_starts_with_default_board() {
        let state = state();
        assert_eq!(state.board.square_count(), 25);
        assert_eq!(status_kind(&state), Some(StatusKind::Success));
        assert_eq!(state.board_preview(), "5×5 board (25 squares)");
    }

    #[test]
    fn test_subdivide_flow() {
        let mut state = state();
        state.apply_gesture(GestureOutcome::Toggle(SquareId(12)));
        state = state.open_subdivide_options();
        assert!(state.subdivide_options_open);

        state = state.adjust_grid_size(1).confirm();
        assert!(!state.subdivide_options_open);
        assert_eq!(state.board.square_count(), 24 + 9);
        assert_eq!(
            state.status.current().map(|m| m.text.as_str()),
            Some("Square subdivided into 3×3 grid (9 squares)!")
        );
    }

    #[test]
    fn test_subdivide_options_need_one_square() {
        let state = state().open_subdivide_options();
        assert!(!state.subdivide_options_open);
        assert_eq!(status_kind(&state), Some(StatusKind::Error));
    }

    #[test]
    fn test_sweep_then_merge() {
        let mut state = state();
        state.apply_gesture(GestureOutcome::SweepStarted { start: SquareId(0), end: SquareId(0) });
        state.apply_gesture(GestureOutcome::Sweep { start: SquareId(0), end: SquareId(6) });
        state.apply_gesture(GestureOutcome::SweepEnded);
        assert_eq!(state.board.selection().len(), 4);

        state = state.merge_selection();
        assert_eq!(state.board.square_count(), 22);
        assert!(state.board.selection().is_empty());
    }

    #[test]
    fn test_failed_merge_reports_error() {
        let mut state = state();
        state.apply_gesture(GestureOutcome::Toggle(SquareId(0)));
        state.apply_gesture(GestureOutcome::Toggle(SquareId(2)));
        state = state.merge_selection();
        assert_eq!(status_kind(&state), Some(StatusKind::Error));
        assert_eq!(state.board.square_count(), 25);
    }

    #[test]
    fn test_cancelled_sweep_restores_selection() {
        let mut state = state();
        state.apply_gesture(GestureOutcome::Toggle(SquareId(24)));
        state.apply_gesture(GestureOutcome::SweepStarted { start: SquareId(0), end: SquareId(6) });
        state.apply_gesture(GestureOutcome::Cancelled);
        assert_eq!(state.board.selection().to_vec(), vec![SquareId(24)]);
    }

    #[test]
    fn test_enter_rebuilds_board() {
        let state = state().adjust_board_size(-2).confirm();
        assert_eq!(state.board.square_count(), 9);
    }

    #[test]
    fn test_inputs_are_clamped() {
        let state = state().adjust_board_size(-100).adjust_grid_size(100);
        assert_eq!(state.board_size_input, 1);
        assert_eq!(state.grid_size_input, 20);
        assert_eq!(state.subdivide_preview(), "20×20 grid (400 squares)");
    }
}
