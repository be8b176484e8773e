use crate::geometry::{Edge, Point, Rect};
use crate::path::Path;

/// Closed outline of the battery silhouette: rounded body plus terminal cap.
///
/// The path is suitable both for stroking the border and as the clip region
/// for the level fill. If `corner_radius` or `border_width` exceed half the
/// smallest relevant dimension the corner arcs overlap; the result is not
/// corrected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyShape {
    pub terminal_length_ratio: f32,
    pub terminal_width_ratio: f32,
    pub border_width: f32,
    pub corner_radius: f32,
}

impl BodyShape {
    /// The rounded rectangular region of the body, terminal excluded,
    /// within the stroke-inset bounds.
    pub fn body_frame(&self, bounds: Rect) -> Rect {
        self.split(bounds).1
    }

    fn split(&self, bounds: Rect) -> (Rect, Rect) {
        let bounds = bounds.inset(self.border_width / 2.0, self.border_width / 2.0);
        let terminal_length = self.terminal_length_ratio * bounds.height;

        bounds.divide(terminal_length, Edge::MinY)
    }

    /// Single closed clockwise path around body and terminal cap.
    pub fn path(&self, bounds: Rect) -> Path {
        let inset_bounds = bounds.inset(self.border_width / 2.0, self.border_width / 2.0);
        let (terminal_frame, body_frame) = self.split(bounds);

        // Narrow the terminal and re-anchor it flush with the top of the
        // inset bounds; only its x extents and top edge feed the path.
        let parallel_inset = (1.0 - self.terminal_width_ratio) / 2.0 * inset_bounds.width;
        let (_, terminal_frame) = terminal_frame
            .inset(parallel_inset, -self.border_width)
            .divide(self.border_width, Edge::MinY);

        let radius = self.corner_radius;
        let cap_radius = self.border_width / 3.0;
        let mut outline = Path::new();

        outline.move_to(Point::new(terminal_frame.max_x(), body_frame.min_y()));
        outline.line_to(Point::new(body_frame.max_x() - radius, body_frame.min_y()));
        outline.arc_to(
            Point::new(body_frame.max_x(), body_frame.min_y()),
            Point::new(body_frame.max_x(), body_frame.min_y() + radius),
            radius,
        );
        outline.line_to(Point::new(body_frame.max_x(), body_frame.max_y() - radius));
        outline.arc_to(
            Point::new(body_frame.max_x(), body_frame.max_y()),
            Point::new(body_frame.max_x() - radius, body_frame.max_y()),
            radius,
        );
        outline.line_to(Point::new(body_frame.min_x() + radius, body_frame.max_y()));
        outline.arc_to(
            Point::new(body_frame.min_x(), body_frame.max_y()),
            Point::new(body_frame.min_x(), body_frame.max_y() - radius),
            radius,
        );
        outline.line_to(Point::new(body_frame.min_x(), body_frame.min_y() + radius));
        outline.arc_to(
            Point::new(body_frame.min_x(), body_frame.min_y()),
            Point::new(body_frame.min_x() + radius, body_frame.min_y()),
            radius,
        );
        outline.line_to(Point::new(terminal_frame.min_x(), body_frame.min_y()));

        // Terminal cap with its own small corner radius.
        outline.line_to(Point::new(
            terminal_frame.min_x(),
            terminal_frame.min_y() + cap_radius,
        ));
        outline.arc_to(
            Point::new(terminal_frame.min_x(), terminal_frame.min_y()),
            Point::new(terminal_frame.min_x() + cap_radius, terminal_frame.min_y()),
            cap_radius,
        );
        outline.line_to(Point::new(
            terminal_frame.max_x() - cap_radius,
            terminal_frame.min_y(),
        ));
        outline.arc_to(
            Point::new(terminal_frame.max_x(), terminal_frame.min_y()),
            Point::new(terminal_frame.max_x(), terminal_frame.min_y() + cap_radius),
            cap_radius,
        );
        outline.line_to(Point::new(terminal_frame.max_x(), body_frame.min_y()));
        outline.close();

        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathElement;

    fn shape() -> BodyShape {
        BodyShape {
            terminal_length_ratio: 0.1,
            terminal_width_ratio: 0.4,
            border_width: 5.0,
            corner_radius: 10.0,
        }
    }

    fn path_points(path: &crate::path::Path) -> Vec<crate::geometry::Point> {
        path.elements()
            .iter()
            .flat_map(|element| match *element {
                PathElement::MoveTo(p) | PathElement::LineTo(p) => vec![p],
                PathElement::ArcTo {
                    tangent1, tangent2, ..
                } => vec![tangent1, tangent2],
                PathElement::Arc { .. } | PathElement::Close => vec![],
            })
            .collect()
    }

    #[test]
    fn outline_is_a_single_closed_path() {
        let path = shape().path(Rect::new(0.0, 0.0, 60.0, 100.0));

        let moves = path
            .elements()
            .iter()
            .filter(|e| matches!(e, PathElement::MoveTo(_)))
            .count();
        assert_eq!(moves, 1);
        assert!(matches!(path.elements().first(), Some(PathElement::MoveTo(_))));
        assert!(matches!(path.elements().last(), Some(PathElement::Close)));
    }

    #[test]
    fn outline_stays_within_bounds() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        let path = shape().path(bounds);

        for point in path_points(&path) {
            assert!(point.x >= bounds.min_x() - 1e-4 && point.x <= bounds.max_x() + 1e-4);
            assert!(point.y >= bounds.min_y() - 1e-4 && point.y <= bounds.max_y() + 1e-4);
        }
    }

    #[test]
    fn body_frame_sits_below_terminal_split() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        let body_frame = shape().body_frame(bounds);

        // Inset by border_width / 2 = 2.5, then the top 10% goes to the
        // terminal: 2.5 + 0.1 * 95 = 12.0.
        assert!((body_frame.min_y() - 12.0).abs() < 1e-4);
        assert!((body_frame.max_y() - 97.5).abs() < 1e-4);
        assert!((body_frame.min_x() - 2.5).abs() < 1e-4);
        assert!((body_frame.max_x() - 57.5).abs() < 1e-4);
    }

    #[test]
    fn terminal_cap_top_is_flush_with_inset_bounds() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        let path = shape().path(bounds);

        // The highest y coordinate on the outline is the terminal top edge,
        // which coincides with the top of the stroke-inset bounds.
        let min_y = path_points(&path)
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        assert!((min_y - 2.5).abs() < 1e-4);
    }

    #[test]
    fn terminal_is_centered_and_ratio_wide() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        let path = shape().path(bounds);

        // First element starts at the terminal's right x on the body top edge.
        let PathElement::MoveTo(start) = path.elements()[0] else {
            panic!("expected MoveTo");
        };
        // Inset bounds are 55 wide starting at 2.5; the terminal spans the
        // middle 40%: 2.5 + 0.3 * 55 .. 2.5 + 0.7 * 55.
        assert!((start.x - (2.5 + 0.7 * 55.0)).abs() < 1e-4);
    }

    #[test]
    fn degenerate_bounds_produce_finite_path() {
        let path = shape().path(Rect::new(0.0, 0.0, 0.0, 0.0));
        // Still a structurally valid closed path, just geometrically empty.
        assert!(matches!(path.elements().last(), Some(PathElement::Close)));
        for point in path_points(&path) {
            assert!(point.x.is_finite() && point.y.is_finite());
        }
    }
}
