use crate::domain::{MAX_BOARD_SIZE, MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Tunables for the editor. There is no config file; the defaults are the
/// configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Board created on start-up
    pub default_board_size: usize,
    /// Initial value of the subdivision size input
    pub default_grid_size: usize,
    pub min_board_size: usize,
    pub max_board_size: usize,
    pub min_grid_size: usize,
    pub max_grid_size: usize,
    /// Seconds a press must be held before entering another square starts a drag
    pub drag_delay: f64,
    /// Pixels the pointer must travel before a press becomes a drag
    pub drag_distance: f32,
    /// Seconds a status message stays visible
    pub status_duration: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_board_size: 5,
            default_grid_size: 2,
            min_board_size: 1,
            max_board_size: MAX_BOARD_SIZE,
            min_grid_size: MIN_GRID_SIZE,
            max_grid_size: MAX_GRID_SIZE,
            drag_delay: 0.1,
            drag_distance: 4.0,
            status_duration: 2.0,
            min_zoom: 0.25,
            max_zoom: 4.0,
        }
    }
}

impl Settings {
    /// Clamp a board size input to the accepted range
    pub fn clamp_board_size(&self, size: i64) -> usize {
        size.clamp(self.min_board_size as i64, self.max_board_size as i64) as usize
    }

    /// Clamp a subdivision size input to the accepted range
    pub fn clamp_grid_size(&self, size: i64) -> usize {
        size.clamp(self.min_grid_size as i64, self.max_grid_size as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_range() {
        let settings = Settings::default();
        assert_eq!(settings.clamp_board_size(settings.default_board_size as i64), 5);
        assert_eq!(settings.clamp_grid_size(settings.default_grid_size as i64), 2);
    }

    #[test]
    fn test_clamping() {
        let settings = Settings::default();
        assert_eq!(settings.clamp_board_size(0), 1);
        assert_eq!(settings.clamp_board_size(1000), MAX_BOARD_SIZE);
        assert_eq!(settings.clamp_grid_size(1), 2);
        assert_eq!(settings.clamp_grid_size(99), 20);
    }
}
