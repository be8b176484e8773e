use crate::geometry::{Edge, Point, Rect};
use crate::path::Path;

/// Seven-point lightning bolt overlaid on the body while charging.
///
/// The path is emitted unrotated; the composer rotates it about the bolt
/// frame's center (which is also the path's own center, the zig-zag being
/// symmetric about it).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoltShape {
    pub terminal_length_ratio: f32,
    pub border_width: f32,
}

impl BoltShape {
    /// Region the bolt occupies: the body frame inset by a quarter of its
    /// width and a sixth of its height.
    pub fn frame(&self, bounds: Rect) -> Rect {
        let bounds = bounds.inset(self.border_width / 2.0, self.border_width / 2.0);
        let terminal_length = self.terminal_length_ratio * bounds.height;
        let (_, body_frame) = bounds.divide(terminal_length, Edge::MinY);

        body_frame.inset(body_frame.width / 4.0, body_frame.height / 6.0)
    }

    pub fn path(&self, bounds: Rect) -> Path {
        let bolt = self.frame(bounds);
        let waist = self.border_width / 1.3;
        let mut path = Path::new();

        path.move_to(Point::new(bolt.mid_x(), bolt.min_y()));
        path.line_to(Point::new(bolt.max_x(), bolt.mid_y()));
        path.line_to(Point::new(bolt.mid_x(), bolt.mid_y() + waist));
        path.line_to(Point::new(bolt.mid_x(), bolt.max_y()));
        path.line_to(Point::new(bolt.min_x(), bolt.mid_y()));
        path.line_to(Point::new(bolt.mid_x(), bolt.mid_y() - waist));
        path.line_to(Point::new(bolt.mid_x(), bolt.min_y()));
        path.close();

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathElement;

    fn shape() -> BoltShape {
        BoltShape {
            terminal_length_ratio: 0.1,
            border_width: 5.0,
        }
    }

    #[test]
    fn path_is_a_closed_seven_point_zigzag() {
        let path = shape().path(Rect::new(0.0, 0.0, 60.0, 100.0));
        let elements = path.elements();

        // Seven vertices: the start plus six line targets, the last of
        // which returns to the start before the close.
        assert_eq!(elements.len(), 8);
        assert!(matches!(elements[0], PathElement::MoveTo(_)));
        assert_eq!(
            elements[1..7]
                .iter()
                .filter(|e| matches!(e, PathElement::LineTo(_)))
                .count(),
            6
        );
        assert!(matches!(elements[7], PathElement::Close));
    }

    #[test]
    fn frame_insets_body_frame() {
        let bolt = shape().frame(Rect::new(0.0, 0.0, 60.0, 100.0));

        // Inset bounds {2.5, 2.5, 55, 95}; body frame starts at y = 12 with
        // height 85.5; bolt insets by width / 4 and height / 6.
        assert!((bolt.min_x() - (2.5 + 55.0 / 4.0)).abs() < 1e-4);
        assert!((bolt.width - 55.0 / 2.0).abs() < 1e-4);
        assert!((bolt.min_y() - (12.0 + 85.5 / 6.0)).abs() < 1e-4);
        assert!((bolt.height - 85.5 * 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn waist_vertices_straddle_the_midline() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        let bolt = shape().frame(bounds);
        let path = shape().path(bounds);

        let PathElement::LineTo(upper) = path.elements()[2] else {
            panic!("expected LineTo");
        };
        let PathElement::LineTo(lower) = path.elements()[5] else {
            panic!("expected LineTo");
        };

        let waist = 5.0 / 1.3;
        assert!((upper.y - (bolt.mid_y() + waist)).abs() < 1e-4);
        assert!((lower.y - (bolt.mid_y() - waist)).abs() < 1e-4);
        assert!((upper.x - bolt.mid_x()).abs() < 1e-4);
    }

    #[test]
    fn path_is_symmetric_about_frame_center() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 100.0);
        let bolt = shape().frame(bounds);
        let path = shape().path(bounds);

        // A half turn about the frame center maps the zig-zag onto itself,
        // so rotating about that center keeps the bolt visually centered.
        let turned = path.rotated(180.0, bolt.center());
        let y_extent = |p: &Path| {
            p.elements()
                .iter()
                .filter_map(|e| match e {
                    PathElement::LineTo(p) | PathElement::MoveTo(p) => Some(p.y),
                    _ => None,
                })
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
                    (lo.min(y), hi.max(y))
                })
        };

        let (lo, hi) = y_extent(&path);
        let (turned_lo, turned_hi) = y_extent(&turned);
        assert!((lo - turned_lo).abs() < 1e-3 && (hi - turned_hi).abs() < 1e-3);
    }
}
