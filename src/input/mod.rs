use macroquad::prelude::*;

use crate::application::{AppState, Camera};
use crate::domain::SquareId;
use crate::ui::{board_area_width, unit_px, Button, ButtonAction};

/// Handle zoom with mouse wheel
pub fn handle_zoom(camera: &mut Camera) {
    let wheel = mouse_wheel().1;
    if wheel > 0.0 {
        camera.zoom_in(1.1);
    } else if wheel < 0.0 {
        camera.zoom_out(1.1);
    }
}

/// Handle pan with middle mouse button drag.
/// `last_pos` carries the pointer position between frames.
pub fn handle_pan(camera: &mut Camera, mouse_pos: (f32, f32), last_pos: &mut Option<(f32, f32)>) {
    if is_mouse_button_down(MouseButton::Middle) {
        if let Some(last) = *last_pos {
            camera.pan(mouse_pos.0 - last.0, mouse_pos.1 - last.1);
        }
        *last_pos = Some(mouse_pos);
    } else {
        *last_pos = None;
    }
}

/// Live square under a screen position, if any
pub fn square_under(state: &AppState, camera: &Camera, mouse_pos: (f32, f32)) -> Option<SquareId> {
    if mouse_pos.0 >= board_area_width() {
        return None;
    }
    let unit = unit_px(state.board.board_size());
    let (row, col) = camera.screen_to_board(mouse_pos.0, mouse_pos.1, unit);
    state.board.store().square_at(row, col).map(|sq| sq.id)
}

/// Drive the click/drag gesture from the left mouse button
pub fn handle_board_pointer(state: &mut AppState, camera: &Camera, mouse_pos: (f32, f32)) {
    let now = get_time();
    let hovered = square_under(state, camera, mouse_pos);

    // Leaving the board area aborts a drag
    if state.gesture.is_dragging() && mouse_pos.0 >= board_area_width() {
        let outcome = state.gesture.cancel();
        state.apply_gesture(outcome);
        return;
    }

    let outcome = if is_mouse_button_pressed(MouseButton::Left) {
        match hovered {
            Some(id) => state.gesture.press(id, mouse_pos, now),
            None => return,
        }
    } else if is_mouse_button_released(MouseButton::Left) {
        state.gesture.release()
    } else if is_mouse_button_down(MouseButton::Left) {
        state.gesture.hover(hovered, mouse_pos, now)
    } else {
        return;
    };
    state.apply_gesture(outcome);
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: AppState, camera: &mut Camera) -> AppState {
    type KeyAction = (KeyCode, fn(AppState) -> AppState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Enter, AppState::confirm),
        (KeyCode::KpEnter, AppState::confirm),
        (KeyCode::Escape, AppState::escape),
        (KeyCode::S, AppState::open_subdivide_options),
        (KeyCode::M, AppState::merge_selection),
        (KeyCode::C, AppState::clear_selection),
    ];

    let new_state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }

    new_state
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: AppState,
    camera: &mut Camera,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> AppState {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .fold(state, |s, btn| match btn.action() {
            ButtonAction::CreateBoard => {
                camera.reset();
                s.create_board()
            }
            ButtonAction::Subdivide => s.open_subdivide_options(),
            ButtonAction::ConfirmSubdivide => s.confirm_subdivide(),
            ButtonAction::CancelSubdivide => s.close_subdivide_options(),
            ButtonAction::Merge => s.merge_selection(),
            ButtonAction::ClearSelection => s.clear_selection(),
            ButtonAction::ResetView => {
                camera.reset();
                s
            }
        })
}
