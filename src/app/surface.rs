//! Seams between the tracker and the operating system.
//!
//! The Win32 implementations live in `platform::windows`; tests provide
//! in-memory fakes.

use crate::error::Result;
use crate::model::{OverlayLayout, Point, Size, WindowGeometry, WindowId};

/// The overlay window as seen by the tracker.
pub trait OverlaySurface {
    /// Rendered extent of `text` in the overlay font.
    fn measure(&mut self, text: &str) -> Result<Size>;

    /// Move, resize and redraw the overlay with `text`.
    fn present(&mut self, layout: OverlayLayout, text: &str) -> Result<()>;

    /// Make the overlay visible without taking focus.
    fn show(&mut self);

    /// Hide the overlay.
    fn hide(&mut self);
}

/// Reads the rectangles of an arbitrary window.
pub trait GeometrySource {
    fn geometry(&self, window: WindowId) -> Result<WindowGeometry>;
}

/// Reads the current cursor position in screen coordinates.
pub trait CursorSource {
    fn cursor_position(&self) -> Result<Point>;
}
