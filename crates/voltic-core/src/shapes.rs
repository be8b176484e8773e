//! The three shape builders making up the battery icon.
//!
//! Each builder is a plain value type whose `path`/`frame` methods are pure
//! functions of the supplied bounds; nothing is cached between calls.

pub mod body;
pub mod bolt;
pub mod fill;

pub use body::BodyShape;
pub use bolt::BoltShape;
pub use fill::FillShape;
