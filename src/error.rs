//! Error types.
//!
//! Startup failures are fatal and end the process with exit code 1.
//! Per-tick failures are transient: the caller skips that frame.

use thiserror::Error;

use crate::model::WindowId;

#[derive(Debug, Error)]
pub enum Error {
    /// The overlay window could not be registered or created.
    #[error("overlay window creation failed: {0}")]
    OverlayCreation(String),

    /// `SetWinEventHook` returned a null handle.
    #[error("failed to set WinEvent hook")]
    HookRegistration,

    /// The polling timer could not be started.
    #[error("failed to start polling timer: {0}")]
    TimerRegistration(String),

    /// The tracked window's rectangles could not be read (usually: it closed).
    #[error("geometry unavailable for window {0}")]
    GeometryUnavailable(WindowId),

    /// The cursor position could not be read.
    #[error("cursor position unavailable: {0}")]
    CursorUnavailable(String),

    /// Text measurement or drawing on the overlay failed.
    #[error("overlay drawing failed: {0}")]
    Drawing(String),

    /// Built for a platform without a windowing backend.
    #[error("sizetip only runs on Windows")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, Error>;
