//! Platform-specific implementations.
//!
//! Only Windows has a backend. Each platform module provides:
//! - FFI conversions and OS-backed implementations of the `app` traits
//! - UI components (the overlay window, dialogs)
//! - Input handling (WinEvent hook)
//! - The session lifecycle and message loop

#[cfg(target_os = "windows")]
pub mod windows;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "windows")]
pub use windows::*;
