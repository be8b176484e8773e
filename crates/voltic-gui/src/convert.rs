//! Conversions from the framework-agnostic core types to iced canvas types.

use iced::Radians;
use iced::widget::canvas;

use voltic_core::{LineCap, LineJoin, Path, PathElement, Point};
use voltic_proto::Color;

pub fn color(color: Color) -> iced::Color {
    iced::Color::from_rgba(color.r, color.g, color.b, color.a)
}

fn point(point: Point) -> iced::Point {
    iced::Point::new(point.x, point.y)
}

pub fn path(path: &Path) -> canvas::Path {
    let mut builder = canvas::path::Builder::new();

    for element in path.elements() {
        match *element {
            PathElement::MoveTo(p) => builder.move_to(point(p)),
            PathElement::LineTo(p) => builder.line_to(point(p)),
            PathElement::ArcTo {
                tangent1,
                tangent2,
                radius,
            } => builder.arc_to(point(tangent1), point(tangent2), radius),
            PathElement::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => builder.arc(canvas::path::Arc {
                center: point(center),
                radius,
                start_angle: Radians(start_angle),
                end_angle: Radians(end_angle),
            }),
            PathElement::Close => builder.close(),
        }
    }

    builder.build()
}

pub fn line_cap(cap: LineCap) -> canvas::LineCap {
    match cap {
        LineCap::Butt => canvas::LineCap::Butt,
        LineCap::Round => canvas::LineCap::Round,
    }
}

pub fn line_join(join: LineJoin) -> canvas::LineJoin {
    match join {
        LineJoin::Miter => canvas::LineJoin::Miter,
        LineJoin::Round => canvas::LineJoin::Round,
    }
}
