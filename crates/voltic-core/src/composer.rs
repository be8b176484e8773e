//! Assembles the ordered draw-op sequence for one render of the icon.

use log::debug;
use voltic_proto::BatteryIconConfig;

use crate::clip;
use crate::color::level_color;
use crate::draw::{DrawOp, LineCap, LineJoin};
use crate::geometry::Rect;
use crate::shapes::{BodyShape, BoltShape, FillShape};

/// Fixed width to height proportion of the icon.
pub const ASPECT_RATIO: f32 = 0.6;

const BOLT_ROTATION_DEGREES: f32 = -12.0;

/// Produces the draw ops for a battery icon letterboxed into `bounds`.
///
/// Pure and idempotent: identical inputs yield structurally identical op
/// sequences. Op order is level fill (clipped to the body silhouette), body
/// stroke, then the bolt fill and stroke when `charging`. Degenerate bounds
/// yield an empty sequence and zero-area fills are omitted rather than
/// emitted as empty ops.
pub fn compose_battery_icon(
    bounds: Rect,
    config: &BatteryIconConfig,
    level: f32,
    charging: bool,
) -> Vec<DrawOp> {
    if bounds.is_empty() {
        debug!("skipping battery icon render, degenerate bounds: {bounds:?}");
        return Vec::new();
    }

    let frame = fit_aspect(bounds, ASPECT_RATIO);

    // Configured zero (or negative) means "derive from the rendered size".
    let border_width = if config.border_width > 0.0 {
        config.border_width
    } else {
        frame.height / 20.0
    };
    let corner_radius = if config.corner_radius > 0.0 {
        config.corner_radius
    } else {
        frame.height / 10.0
    };

    let terminal_length_ratio = config.terminal_length_ratio.clamp(0.0, 1.0);
    let terminal_width_ratio = config.terminal_width_ratio.clamp(0.0, 1.0);

    let body = BodyShape {
        terminal_length_ratio,
        terminal_width_ratio,
        border_width,
        corner_radius,
    };

    let mut ops = Vec::with_capacity(if charging { 4 } else { 2 });

    let fill = FillShape {
        terminal_length_ratio,
        level,
    }
    .frame(frame);

    if !fill.is_empty() {
        let path = clip::rounded_rect_below(body.body_frame(frame), corner_radius, fill.min_y());
        if !path.is_empty() {
            ops.push(DrawOp::Fill {
                path,
                color: level_color(level, config),
            });
        }
    }

    ops.push(DrawOp::Stroke {
        path: body.path(frame),
        color: config.palette.border,
        width: border_width,
        cap: LineCap::Butt,
        join: LineJoin::Miter,
    });

    if charging {
        let bolt = BoltShape {
            terminal_length_ratio,
            border_width,
        };
        let path = bolt
            .path(frame)
            .rotated(BOLT_ROTATION_DEGREES, bolt.frame(frame).center());

        ops.push(DrawOp::Fill {
            path: path.clone(),
            color: config.palette.border,
        });
        ops.push(DrawOp::Stroke {
            path,
            color: config.palette.border,
            width: border_width / 1.2,
            cap: LineCap::Round,
            join: LineJoin::Round,
        });
    }

    ops
}

/// Largest rectangle of the given width:height ratio centered in `bounds`.
fn fit_aspect(bounds: Rect, aspect: f32) -> Rect {
    let (width, height) = if bounds.width / bounds.height > aspect {
        (bounds.height * aspect, bounds.height)
    } else {
        (bounds.width, bounds.width / aspect)
    };

    Rect::new(
        bounds.x + (bounds.width - width) / 2.0,
        bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    )
}
