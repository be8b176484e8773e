//! Analytic intersection of the rounded body rectangle with the level fill.
//!
//! The fill rectangle always spans at least the body's width and reaches its
//! bottom, so the intersection reduces to "the part of a rounded rectangle
//! below a horizontal line". Partial corner arcs are emitted in center-angle
//! form; angles are screen-space radians sweeping toward increasing values,
//! which traces the outline clockwise.

use core::f32::consts::{FRAC_PI_2, PI};

use crate::geometry::{Point, Rect};
use crate::path::Path;

/// Returns the closed outline of `rect` (corner radius `radius`, top
/// corners included) cut off above the horizontal line `y = top`.
///
/// `top` at or below `rect.min_y()` yields the full rounded rectangle;
/// `top` at or beyond `rect.max_y()` yields an empty path. A radius larger
/// than half the smallest extent produces overlapping arcs and is not
/// corrected.
pub fn rounded_rect_below(rect: Rect, radius: f32, top: f32) -> Path {
    if rect.is_empty() || !top.is_finite() || top >= rect.max_y() {
        return Path::new();
    }

    let t = top.max(rect.min_y());
    let (x0, x1) = (rect.min_x(), rect.max_x());
    let (y0, y1) = (rect.min_y(), rect.max_y());
    let r = radius.max(0.0);

    let mut path = Path::new();

    if r <= 0.0 {
        path.move_to(Point::new(x0, t));
        path.line_to(Point::new(x1, t));
        path.line_to(Point::new(x1, y1));
        path.line_to(Point::new(x0, y1));
        path.close();
        return path;
    }

    if t <= y0 {
        // Full rounded rectangle, all four corners arced.
        path.move_to(Point::new(x0 + r, y0));
        path.line_to(Point::new(x1 - r, y0));
        path.arc(Point::new(x1 - r, y0 + r), r, -FRAC_PI_2, 0.0);
        path.line_to(Point::new(x1, y1 - r));
        path.arc(Point::new(x1 - r, y1 - r), r, 0.0, FRAC_PI_2);
        path.line_to(Point::new(x0 + r, y1));
        path.arc(Point::new(x0 + r, y1 - r), r, FRAC_PI_2, PI);
        path.line_to(Point::new(x0, y0 + r));
        path.arc(Point::new(x0 + r, y0 + r), r, PI, PI + FRAC_PI_2);
        path.close();
    } else if t < y0 + r {
        // The cut crosses the top corner arcs.
        let dy = (y0 + r) - t;
        let dx = (r * r - dy * dy).max(0.0).sqrt();
        let alpha = (dy / r).min(1.0).asin();

        path.move_to(Point::new(x0 + r - dx, t));
        path.line_to(Point::new(x1 - r + dx, t));
        path.arc(Point::new(x1 - r, y0 + r), r, -alpha, 0.0);
        path.line_to(Point::new(x1, y1 - r));
        path.arc(Point::new(x1 - r, y1 - r), r, 0.0, FRAC_PI_2);
        path.line_to(Point::new(x0 + r, y1));
        path.arc(Point::new(x0 + r, y1 - r), r, FRAC_PI_2, PI);
        path.line_to(Point::new(x0, y0 + r));
        path.arc(Point::new(x0 + r, y0 + r), r, PI, PI + alpha);
        path.close();
    } else if t <= y1 - r {
        // Straight cut between the corner regions.
        path.move_to(Point::new(x0, t));
        path.line_to(Point::new(x1, t));
        path.line_to(Point::new(x1, y1 - r));
        path.arc(Point::new(x1 - r, y1 - r), r, 0.0, FRAC_PI_2);
        path.line_to(Point::new(x0 + r, y1));
        path.arc(Point::new(x0 + r, y1 - r), r, FRAC_PI_2, PI);
        path.close();
    } else {
        // Only a sliver across the bottom corner arcs remains.
        let dy = t - (y1 - r);
        let dx = (r * r - dy * dy).max(0.0).sqrt();
        let alpha = (dy / r).min(1.0).asin();

        path.move_to(Point::new(x0 + r - dx, t));
        path.line_to(Point::new(x1 - r + dx, t));
        path.arc(Point::new(x1 - r, y1 - r), r, alpha, FRAC_PI_2);
        path.line_to(Point::new(x0 + r, y1));
        path.arc(Point::new(x0 + r, y1 - r), r, FRAC_PI_2, PI - alpha);
        path.close();
    }

    path
}
