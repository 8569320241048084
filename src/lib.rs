//! Window position/size overlay.
//!
//! While the user drags or resizes any window, a small tooltip next to the
//! cursor shows the window's position, outer size and client size.
//!
//! Everything outside `platform` is pure Rust so tests run as normal
//! integration tests on any host.

pub mod app;
pub mod error;
pub mod events;
pub mod logging;
pub mod model;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the main types for convenience
pub use app::{Tick, Tracker};
pub use error::{Error, Result};
pub use events::{AppEvent, Dispatcher, EventKind};
pub use model::{OverlayLayout, OverlayStyle, WindowGeometry, WindowId};

/// Pack an RGB triple into a GDI `COLORREF` value (0x00BBGGRR).
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    (r as u32) | ((g as u32) << 8) | ((b as u32) << 16)
}

/// Encode `s` as a NUL-terminated UTF-16 buffer for wide Win32 calls.
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Decode a UTF-16 buffer up to the first NUL (or its end).
pub fn from_wide(buf: &[u16]) -> String {
    let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
    String::from_utf16_lossy(&buf[..len])
}
