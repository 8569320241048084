//! Thin layer over Win32 types and queries.
//!
//! - Conversions between `HWND`/`RECT`/`POINT` and the model types
//! - `GeometrySource` / `CursorSource` backed by the real window manager

pub mod query;
pub mod types;

pub use query::{Win32Cursor, Win32Geometry};
pub use types::*;
