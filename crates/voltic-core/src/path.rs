//! Framework-agnostic vector path model.
//!
//! A [`Path`] is an ordered list of [`PathElement`]s. Hosts replay the
//! elements with their own 2D primitives; both the tangent-tangent arc form
//! (used for the rounded corners of the battery outline) and the
//! center-angle form (used for partial arcs produced by clipping) are
//! supported by every mainstream canvas API.

use crate::geometry::Point;

/// Single path segment.
///
/// Angles are radians in screen coordinates (y grows downward) and arcs
/// sweep toward increasing angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathElement {
    MoveTo(Point),
    LineTo(Point),
    /// Arc tangent to the segments `current → tangent1` and
    /// `tangent1 → tangent2`, ending on the second segment.
    ArcTo {
        tangent1: Point,
        tangent2: Point,
        radius: f32,
    },
    /// Circular arc described by its center and angle range.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

/// Ordered sequence of path elements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn move_to(&mut self, point: Point) {
        self.elements.push(PathElement::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point) {
        self.elements.push(PathElement::LineTo(point));
    }

    pub fn arc_to(&mut self, tangent1: Point, tangent2: Point, radius: f32) {
        self.elements.push(PathElement::ArcTo {
            tangent1,
            tangent2,
            radius,
        });
    }

    pub fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        self.elements.push(PathElement::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    pub fn close(&mut self) {
        self.elements.push(PathElement::Close);
    }

    /// Returns the path rotated by `degrees` about `pivot`.
    ///
    /// Positive angles rotate clockwise on screen (y grows downward).
    pub fn rotated(&self, degrees: f32, pivot: Point) -> Path {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();

        let rotate = |point: Point| {
            let dx = point.x - pivot.x;
            let dy = point.y - pivot.y;

            Point::new(
                pivot.x + dx * cos - dy * sin,
                pivot.y + dx * sin + dy * cos,
            )
        };

        let elements = self
            .elements
            .iter()
            .map(|element| match *element {
                PathElement::MoveTo(point) => PathElement::MoveTo(rotate(point)),
                PathElement::LineTo(point) => PathElement::LineTo(rotate(point)),
                PathElement::ArcTo {
                    tangent1,
                    tangent2,
                    radius,
                } => PathElement::ArcTo {
                    tangent1: rotate(tangent1),
                    tangent2: rotate(tangent2),
                    radius,
                },
                PathElement::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => PathElement::Arc {
                    center: rotate(center),
                    radius,
                    start_angle: start_angle + radians,
                    end_angle: end_angle + radians,
                },
                PathElement::Close => PathElement::Close,
            })
            .collect();

        Path { elements }
    }
}
