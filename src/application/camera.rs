/// Camera maps board units to screen pixels, with zoom and pan.
///
/// `unit_px` is the size of one board cell at zoom 1.0; rows run down the
/// screen and columns run across.
#[derive(Clone, Debug)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = fit, 2.0 = 2x zoomed in
    origin: (f32, f32),
    zoom_range: (f32, f32),
}

impl Camera {
    /// Camera whose home position puts the board's top-left at `origin`
    pub fn new(origin: (f32, f32), min_zoom: f32, max_zoom: f32) -> Self {
        Self {
            offset_x: origin.0,
            offset_y: origin.1,
            zoom: 1.0,
            origin,
            zoom_range: (min_zoom, max_zoom),
        }
    }

    /// Zoom in by factor
    pub fn zoom_in(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(self.zoom_range.0, self.zoom_range.1);
    }

    /// Zoom out by factor
    pub fn zoom_out(&mut self, factor: f32) {
        self.zoom = (self.zoom / factor).clamp(self.zoom_range.0, self.zoom_range.1);
    }

    /// Zoom as a whole percentage for display
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Screen position of the board point `(row, col)`
    pub fn board_to_screen(&self, row: f64, col: f64, unit_px: f32) -> (f32, f32) {
        let scale = (unit_px * self.zoom) as f64;
        let x = col * scale + self.offset_x as f64;
        let y = row * scale + self.offset_y as f64;
        (x as f32, y as f32)
    }

    /// Board point `(row, col)` under a screen position
    pub fn screen_to_board(&self, screen_x: f32, screen_y: f32, unit_px: f32) -> (f64, f64) {
        let scale = (unit_px * self.zoom) as f64;
        let col = (screen_x - self.offset_x) as f64 / scale;
        let row = (screen_y - self.offset_y) as f64 / scale;
        (row, col)
    }

    /// Move the home position (e.g. after a window resize) and go home
    pub fn set_origin(&mut self, origin: (f32, f32)) {
        self.origin = origin;
        self.reset();
    }

    /// Reset camera to its home position and zoom
    pub fn reset(&mut self) {
        self.offset_x = self.origin.0;
        self.offset_y = self.origin.1;
        self.zoom = 1.0;
    }
}
