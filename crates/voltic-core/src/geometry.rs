//! Rectangle splitting and inset helpers shared by the shape builders.

/// 2D point in icon coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Edge of a rectangle, used to anchor [`Rect::divide`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    MinX,
    MinY,
    MaxX,
    MaxY,
}

/// Axis-aligned rectangle. Immutable; every derived value is a new `Rect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f32 {
        self.x
    }

    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f32 {
        self.y
    }

    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// A rectangle with zero or negative extent draws nothing.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Shrinks by `dx` on the left/right and `dy` on the top/bottom.
    /// Negative values expand.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.x + dx,
            self.y + dy,
            self.width - dx * 2.0,
            self.height - dy * 2.0,
        )
    }

    /// Splits into `(slice, remainder)` at `distance` from the given edge.
    ///
    /// The slice lies flush against the edge with extent `distance`; the
    /// remainder covers the rest. `distance` is not clamped, so a value
    /// larger than the rect extent yields a negative-size remainder, which
    /// callers tolerate as an empty region.
    pub fn divide(&self, distance: f32, edge: Edge) -> (Rect, Rect) {
        match edge {
            Edge::MinX => (
                Rect::new(self.x, self.y, distance, self.height),
                Rect::new(self.x + distance, self.y, self.width - distance, self.height),
            ),
            Edge::MinY => (
                Rect::new(self.x, self.y, self.width, distance),
                Rect::new(self.x, self.y + distance, self.width, self.height - distance),
            ),
            Edge::MaxX => (
                Rect::new(self.max_x() - distance, self.y, distance, self.height),
                Rect::new(self.x, self.y, self.width - distance, self.height),
            ),
            Edge::MaxY => (
                Rect::new(self.x, self.max_y() - distance, self.width, distance),
                Rect::new(self.x, self.y, self.width, self.height - distance),
            ),
        }
    }
}
