use macroquad::prelude::*;

use crate::application::{AppState, Camera, GestureState, StatusKind};
use crate::domain::{selection::sweep_region, Region, Square};
use crate::ui::{
    board_area_height, board_area_width, grid_stepper_y, panel_x, unit_px, Button, Stepper,
    PANEL_WIDTH,
};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Screen rectangle of a board region.
/// Each edge is mapped from its own board coordinate and rounded, so
/// neighbouring squares share pixel edges and never leave a seam.
fn screen_rect(camera: &Camera, unit: f32, region: &Region) -> (f32, f32, f32, f32) {
    let (x0, y0) = camera.board_to_screen(region.min_row, region.min_col, unit);
    let (x1, y1) = camera.board_to_screen(region.max_row, region.max_col, unit);
    let (x0, y0, x1, y1) = (x0.round(), y0.round(), x1.round(), y1.round());
    (x0, y0, (x1 - x0).max(1.0), (y1 - y0).max(1.0))
}

fn square_color(square: &Square, selected: bool) -> Color {
    if selected {
        Color::from_rgba(255, 196, 0, 255)
    } else if square.is_merged() {
        Color::from_rgba(80, 160, 120, 255)
    } else if square.subdivided {
        Color::from_rgba(120, 140, 220, 255)
    } else {
        Color::from_rgba(200, 200, 210, 255)
    }
}

/// Draw every live square with camera support
pub fn draw_board(state: &AppState, camera: &Camera) {
    let board = &state.board;
    let unit = unit_px(board.board_size());
    let area_width = board_area_width();
    let area_height = board_area_height();
    let outline = Color::from_rgba(40, 40, 40, 255);

    for square in board.all_squares() {
        let (x, y, w, h) = screen_rect(camera, unit, &square.region());

        // Skip if outside viewport
        if x + w < 0.0 || x > area_width || y + h < 0.0 || y > area_height {
            continue;
        }

        draw_rectangle(x, y, w, h, square_color(square, board.is_selected(square.id)));
        if w >= 3.0 {
            draw_rectangle_lines(x, y, w, h, 1.0, outline);
        }
    }

    draw_sweep_outline(state, camera, unit);
}

/// Outline of the rectangle a running drag covers
fn draw_sweep_outline(state: &AppState, camera: &Camera, unit: f32) {
    let GestureState::Dragging { start, current } = state.gesture.state() else {
        return;
    };
    let store = state.board.store();
    let (Ok(start), Ok(end)) = (store.get(start), store.get(current)) else {
        return;
    };

    let region = sweep_region(start, end);
    let (x, y, w, h) = screen_rect(camera, unit, &region);
    draw_rectangle_lines(x, y, w, h, 2.0, Color::from_rgba(255, 255, 0, 200));
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons, steppers, counters and status
pub fn draw_controls(
    state: &AppState,
    camera: &Camera,
    buttons: &[Button],
    steppers: &[&Stepper],
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    steppers.iter().for_each(|stepper| stepper.draw(mouse_pos));

    let px = panel_x();
    let dim = Color::from_rgba(150, 150, 150, 255);

    draw_text_label(&state.board_preview(), px, 118.0, 13.0, dim);
    if state.subdivide_options_open {
        draw_text_label(&state.subdivide_preview(), px, grid_stepper_y() + 45.0, 13.0, dim);
    }

    let board = &state.board;
    let labels = [
        ("Squares:", px, 470.0, 16.0, WHITE),
        (
            &format_number(board.square_count()),
            px,
            490.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Selected:", px, 520.0, 16.0, WHITE),
        (
            &board.selection().len().to_string(),
            px,
            540.0,
            18.0,
            Color::from_rgba(255, 196, 0, 255),
        ),
        ("Zoom:", px, 570.0, 14.0, WHITE),
        (
            &format!("{}%", camera.zoom_percent()),
            px,
            585.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    let controls = [
        ("Controls:", px, 620.0, 14.0, WHITE),
        ("Click: Toggle square", px, 635.0, 12.0, GRAY),
        ("Drag: Select rectangle", px, 648.0, 12.0, GRAY),
        ("S / M / C: Split / Merge / Clear", px, 661.0, 12.0, GRAY),
        ("Wheel: Zoom  Mid-drag: Pan", px, 674.0, 12.0, GRAY),
    ];
    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    draw_status(state);
}

/// Draw the transient status message, fading during its last half second
fn draw_status(state: &AppState) {
    let Some(msg) = state.status.current() else {
        return;
    };
    let alpha = (msg.remaining() / 0.5).clamp(0.0, 1.0);
    let mut color = match msg.kind {
        StatusKind::Success => Color::from_rgba(0, 200, 100, 255),
        StatusKind::Error => Color::from_rgba(220, 60, 60, 255),
    };
    color.a = alpha;

    let font_size = 18.0;
    let measure = measure_text(&msg.text, None, font_size as u16, 1.0);
    let x = ((board_area_width() - measure.width) / 2.0).max(5.0);
    let y = board_area_height() - 20.0;
    draw_rectangle(
        x - 8.0,
        y - measure.height - 8.0,
        measure.width + 16.0,
        measure.height + 16.0,
        Color::new(0.0, 0.0, 0.0, 0.7 * alpha),
    );
    draw_text(&msg.text, x, y, font_size, color);
}
