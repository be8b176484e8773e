use crate::geometry::{Edge, Rect};

/// Rectangular charge-level region, anchored to the bottom of the body.
///
/// Operates on the raw bounds (not the stroke-inset ones); the composer
/// clips the result to the body silhouette so the rounded corners crop it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillShape {
    pub terminal_length_ratio: f32,
    /// Raw charge fraction; clamped to `[0, 1]` here, never stored clamped.
    pub level: f32,
}

impl FillShape {
    pub fn frame(&self, bounds: Rect) -> Rect {
        let terminal_length = self.terminal_length_ratio * bounds.height;
        let (_, body_frame) = bounds.divide(terminal_length, Edge::MinY);

        let level = self.level.max(0.0).min(1.0);

        Rect::new(
            body_frame.x,
            body_frame.y + body_frame.height * (1.0 - level),
            body_frame.width,
            body_frame.height * level,
        )
    }
}
