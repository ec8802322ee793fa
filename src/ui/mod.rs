mod button;
mod stepper;

pub use button::Button;
pub use stepper::Stepper;

// UI constants - functions where the layout follows the window size
use macroquad::prelude::{screen_height, screen_width};

use crate::application::AppState;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const BOARD_MARGIN: f32 = 20.0;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    CreateBoard,
    Subdivide,
    ConfirmSubdivide,
    CancelSubdivide,
    Merge,
    ClearSelection,
    ResetView,
}

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the board area
pub fn board_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the board area
pub fn board_area_height() -> f32 {
    screen_height()
}

/// Pixels per board cell at zoom 1.0, fitting the board into its area
pub fn unit_px(board_size: usize) -> f32 {
    let side = board_area_width().min(board_area_height()) - 2.0 * BOARD_MARGIN;
    side.max(10.0) / board_size.max(1) as f32
}

/// Vertical position of the first button
pub const BUTTONS_TOP: f32 = 130.0;

/// Create panel buttons for the current state.
/// The subdivision panel swaps Subdivide for Confirm / Cancel.
pub fn create_buttons(state: &AppState) -> Vec<Button> {
    let px = panel_x();
    let row = |i: usize| BUTTONS_TOP + i as f32 * (BUTTON_HEIGHT + 10.0);
    let board = &state.board;

    let full = |i: usize, text: &str, action: ButtonAction| {
        Button::new(px, row(i), PANEL_WIDTH, BUTTON_HEIGHT, text, action)
    };
    let half_width = PANEL_WIDTH / 2.0 - 2.0;

    let mut buttons = vec![full(0, "Create Board", ButtonAction::CreateBoard)];

    if state.subdivide_options_open {
        buttons.push(Button::new(
            px,
            row(3),
            half_width,
            BUTTON_HEIGHT,
            "Confirm",
            ButtonAction::ConfirmSubdivide,
        ));
        buttons.push(Button::new(
            px + PANEL_WIDTH / 2.0 + 2.0,
            row(3),
            half_width,
            BUTTON_HEIGHT,
            "Cancel",
            ButtonAction::CancelSubdivide,
        ));
    } else {
        buttons.push(
            full(1, "Subdivide", ButtonAction::Subdivide).enabled(board.can_subdivide_selection()),
        );
    }

    buttons.push(full(4, "Merge", ButtonAction::Merge).enabled(board.can_merge_selection()));
    buttons.push(
        full(5, "Clear Selection", ButtonAction::ClearSelection)
            .enabled(!board.selection().is_empty()),
    );
    buttons.push(full(6, "Reset View", ButtonAction::ResetView));
    buttons
}

/// Y of the subdivision size stepper (inside the options panel)
pub fn grid_stepper_y() -> f32 {
    BUTTONS_TOP + 2.0 * (BUTTON_HEIGHT + 10.0) + 5.0
}
