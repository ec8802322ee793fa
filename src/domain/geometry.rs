//! Real-valued geometry over board units.
//!
//! Square sizes come from repeated division (a unit square split by 3 has
//! edge 1/3), so nothing derived from a division is ever compared exactly.
//! Every comparison goes through [`EPSILON`].

/// Tolerance for all comparisons on derived coordinates, in board units.
pub const EPSILON: f64 = 1e-6;

/// Tolerant equality
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Axis-aligned half-open region `[min_row, max_row) × [min_col, max_col)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub min_row: f64,
    pub min_col: f64,
    pub max_row: f64,
    pub max_col: f64,
}

impl Region {
    pub const fn new(min_row: f64, min_col: f64, max_row: f64, max_col: f64) -> Self {
        Self { min_row, min_col, max_row, max_col }
    }

    /// Region covered by a square with top-left `(row, col)` and edge `size`
    pub fn square(row: f64, col: f64, size: f64) -> Self {
        Self::new(row, col, row + size, col + size)
    }

    /// Extent along the row axis
    pub fn height(&self) -> f64 {
        self.max_row - self.min_row
    }

    /// Extent along the column axis
    pub fn width(&self) -> f64 {
        self.max_col - self.min_col
    }

    pub fn area(&self) -> f64 {
        self.height() * self.width()
    }

    /// Smallest region enclosing both
    pub fn union(&self, other: &Region) -> Self {
        Self {
            min_row: self.min_row.min(other.min_row),
            min_col: self.min_col.min(other.min_col),
            max_row: self.max_row.max(other.max_row),
            max_col: self.max_col.max(other.max_col),
        }
    }

    /// True if the region has equal width and height
    pub fn is_square(&self) -> bool {
        is_square_region(self.min_row, self.min_col, self.max_row, self.max_col)
    }

    /// True if the point lies in the half-open region.
    /// Points within [`EPSILON`] of the min edge count as inside, points
    /// within [`EPSILON`] of the max edge count as outside.
    pub fn contains_point(&self, row: f64, col: f64) -> bool {
        row >= self.min_row - EPSILON
            && row < self.max_row - EPSILON
            && col >= self.min_col - EPSILON
            && col < self.max_col - EPSILON
    }

    /// True if `other` lies entirely inside this region
    pub fn contains(&self, other: &Region) -> bool {
        other.min_row >= self.min_row - EPSILON
            && other.min_col >= self.min_col - EPSILON
            && other.max_row <= self.max_row + EPSILON
            && other.max_col <= self.max_col + EPSILON
    }
}

/// `(max_row - min_row) == (max_col - min_col)` within tolerance
pub fn is_square_region(min_row: f64, min_col: f64, max_row: f64, max_col: f64) -> bool {
    approx_eq(max_row - min_row, max_col - min_col)
}

/// Half-open overlap on both axes. Regions that merely touch do not overlap.
pub fn rectangles_overlap(a: &Region, b: &Region) -> bool {
    a.min_row < b.max_row - EPSILON
        && b.min_row < a.max_row - EPSILON
        && a.min_col < b.max_col - EPSILON
        && b.min_col < a.max_col - EPSILON
}

/// Sorted coordinates with values closer than [`EPSILON`] folded into one
pub fn distinct_boundaries(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.into_iter().collect();
    values.sort_by(f64::total_cmp);
    values.dedup_by(|next, kept| approx_eq(*next, *kept));
    values
}

/// Position of `value` among `boundaries`, within tolerance
pub fn boundary_index(boundaries: &[f64], value: f64) -> Option<usize> {
    let idx = boundaries.partition_point(|b| *b < value - EPSILON);
    boundaries
        .get(idx)
        .filter(|b| approx_eq(**b, value))
        .map(|_| idx)
}
