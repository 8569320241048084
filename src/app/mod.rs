//! Platform-independent application core.
//!
//! [`Tracker`] holds the tracked-window state and drives the overlay through
//! the [`surface`] traits, so the whole gesture/refresh cycle can be tested
//! without a window manager.

pub mod surface;
pub mod tracker;

pub use surface::{CursorSource, GeometrySource, OverlaySurface};
pub use tracker::{Frame, Tick, Tracker};
