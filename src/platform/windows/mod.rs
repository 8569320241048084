//! Windows implementation using the Win32 API and GDI.
//!
//! This module contains all Windows-specific code:
//! - FFI conversions and geometry/cursor queries
//! - UI components (layered overlay window, error dialog)
//! - Input handling (WinEvent move/resize hook)
//! - Session lifecycle, dispatch table and message loop

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod ui;

// Re-export commonly used items
pub use app::{deliver, pump_messages, Session};
pub use ui::*;
