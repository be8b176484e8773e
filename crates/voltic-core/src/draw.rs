//! Drawing instructions handed to the host rendering surface.

use voltic_proto::Color;

use crate::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Atomic fill or stroke instruction.
///
/// An ordered `Vec<DrawOp>` fully describes the icon for one render; the
/// host replays the ops in sequence with its own fill/stroke primitives.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Fill {
        path: Path,
        color: Color,
    },
    Stroke {
        path: Path,
        color: Color,
        width: f32,
        cap: LineCap,
        join: LineJoin,
    },
}

impl DrawOp {
    pub fn path(&self) -> &Path {
        match self {
            DrawOp::Fill { path, .. } => path,
            DrawOp::Stroke { path, .. } => path,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawOp::Fill { color, .. } => *color,
            DrawOp::Stroke { color, .. } => *color,
        }
    }
}
