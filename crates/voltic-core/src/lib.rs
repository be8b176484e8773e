//! Pure path-construction core for the battery level indicator.
//!
//! Given a bounding rectangle, a [`BatteryIconConfig`], a charge level and a
//! charging flag, [`compose_battery_icon`] produces an ordered list of
//! [`DrawOp`]s that fully describes one render of the icon. Everything here
//! is a pure function of its inputs: no caching, no shared state, safe to
//! call from any thread at per-frame rates.
//!
//! [`BatteryIconConfig`]: voltic_proto::BatteryIconConfig

pub mod clip;
pub mod color;
pub mod composer;
pub mod draw;
pub mod geometry;
pub mod path;
pub mod shapes;

pub use composer::{ASPECT_RATIO, compose_battery_icon};
pub use draw::{DrawOp, LineCap, LineJoin};
pub use geometry::{Edge, Point, Rect};
pub use path::{Path, PathElement};
