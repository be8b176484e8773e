//! iced adapter for the battery icon.
//!
//! The geometry lives in `voltic-core`; this crate only replays the
//! composed [`DrawOp`](voltic_core::DrawOp) list onto an iced canvas.

pub mod convert;
pub mod widget;

pub use widget::{BatteryIcon, battery_icon};
