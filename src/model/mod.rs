//! Application domain model.
//!
//! Pure logic with no FFI dependencies: geometry types, label formatting,
//! overlay placement and the compile-time style constants.
//!
//! The Win32 side lives in `platform::windows`.

pub mod constants;
pub mod geometry;
pub mod layout;
pub mod style;

pub use constants::*;
pub use geometry::{Point, Rect, Size, WindowGeometry, WindowId};
pub use layout::{format_label, overlay_layout, OverlayLayout};
pub use style::OverlayStyle;
