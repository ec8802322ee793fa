use macroquad::prelude::*;

/// Numeric input with − / + buttons, bounded to `min..=max`
#[derive(Clone)]
pub struct Stepper {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    value: usize,
    min: usize,
    max: usize,
}

impl Stepper {
    pub fn new(
        x: f32,
        y: f32,
        width: f32,
        label: impl Into<String>,
        min: usize,
        max: usize,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            label: label.into(),
            value: min,
            min,
            max,
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Set value, clamped to the stepper's range
    pub fn set_value(&mut self, value: usize) {
        self.value = value.clamp(self.min, self.max);
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    fn minus_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.hit(mouse_pos, self.x)
    }

    fn plus_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.hit(mouse_pos, self.x + self.width - self.height)
    }

    fn hit(&self, mouse_pos: (f32, f32), left: f32) -> bool {
        mouse_pos.0 >= left
            && mouse_pos.0 <= left + self.height
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        draw_rectangle(self.x, self.y, self.width, self.height, Color::from_rgba(45, 45, 45, 255));
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        for (left, glyph, hovered) in [
            (self.x, "-", self.minus_hovered(mouse_pos)),
            (self.x + self.width - self.height, "+", self.plus_hovered(mouse_pos)),
        ] {
            let fill = if hovered {
                Color::from_rgba(100, 149, 237, 255)
            } else {
                Color::from_rgba(70, 130, 180, 255)
            };
            draw_rectangle(left, self.y, self.height, self.height, fill);
            draw_text(glyph, left + 10.0, self.y + 21.0, 22.0, WHITE);
        }

        let text = self.value.to_string();
        let measure = measure_text(&text, None, 18, 1.0);
        draw_text(
            &text,
            self.x + (self.width - measure.width) / 2.0,
            self.y + 21.0,
            18.0,
            WHITE,
        );
    }

    /// Handle clicks; returns the new value when it changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<usize> {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let next = if self.minus_hovered(mouse_pos) {
            self.value.saturating_sub(1).max(self.min)
        } else if self.plus_hovered(mouse_pos) {
            (self.value + 1).min(self.max)
        } else {
            return None;
        };

        (next != self.value).then(|| {
            self.value = next;
            next
        })
    }
}
