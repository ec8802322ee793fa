mod app_state;
mod camera;
pub mod gesture;
mod settings;
mod status;

pub use app_state::AppState;
pub use camera::Camera;
pub use gesture::{Gesture, GestureOutcome, GestureState};
pub use settings::Settings;
pub use status::{StatusBar, StatusKind, StatusMessage};
