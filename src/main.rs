use macroquad::prelude::*;
use square_board::{
    AppState, Camera, Settings,
    ui::{self, Stepper, BOARD_MARGIN},
    rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Square Board - Subdivide & Merge".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = Settings::default();
    let mut camera = Camera::new(
        (BOARD_MARGIN, BOARD_MARGIN),
        settings.min_zoom,
        settings.max_zoom,
    );
    let mut state = AppState::new(settings.clone());
    let mut last_pan = None;

    let px = ui::panel_x();
    let mut board_stepper = Stepper::new(
        px,
        70.0,
        ui::PANEL_WIDTH,
        "Board Size",
        settings.min_board_size,
        settings.max_board_size,
    );
    let mut grid_stepper = Stepper::new(
        px,
        ui::grid_stepper_y(),
        ui::PANEL_WIDTH,
        "Subdivision Size",
        settings.min_grid_size,
        settings.max_grid_size,
    );

    loop {
        let mouse_pos = mouse_position();

        // Update UI positions for responsiveness
        let px = ui::panel_x();
        board_stepper.set_position(px, 70.0);
        grid_stepper.set_position(px, ui::grid_stepper_y());

        // Steppers follow the state (keyboard may have changed it), then take clicks
        board_stepper.set_value(state.board_size_input);
        grid_stepper.set_value(state.grid_size_input);
        if let Some(size) = board_stepper.update(mouse_pos) {
            state.board_size_input = size;
        }
        if state.subdivide_options_open {
            if let Some(size) = grid_stepper.update(mouse_pos) {
                state.grid_size_input = size;
            }
        }

        let buttons = ui::create_buttons(&state);
        state = input::process_button_clicks(state, &mut camera, &buttons, mouse_pos);
        input::handle_zoom(&mut camera);
        input::handle_pan(&mut camera, mouse_pos, &mut last_pan);
        input::handle_board_pointer(&mut state, &camera, mouse_pos);
        state = input::process_keyboard_input(state, &mut camera);

        state = state.tick(get_frame_time());

        clear_background(Color::from_rgba(20, 20, 24, 255));
        rendering::draw_board(&state, &camera);

        let buttons = ui::create_buttons(&state);
        let steppers: Vec<&Stepper> = if state.subdivide_options_open {
            vec![&board_stepper, &grid_stepper]
        } else {
            vec![&board_stepper]
        };
        rendering::draw_controls(&state, &camera, &buttons, &steppers, mouse_pos);

        next_frame().await;
    }
}
