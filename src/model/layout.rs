//! Label text and overlay placement.

use super::geometry::{Point, Size, WindowGeometry};
use super::style::OverlayStyle;

/// Where the overlay window goes and how big it is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayLayout {
    pub position: Point,
    pub size: Size,
}

/// Format the label shown for a tracked window.
///
/// Keeps the trailing space; the overlay width is measured with it.
pub fn format_label(geometry: &WindowGeometry) -> String {
    let outer = &geometry.outer;
    let client = &geometry.client;
    format!(
        "x:{}, y:{}, w:{}, h:{} (Client w:{}, h:{}) ",
        outer.left,
        outer.top,
        outer.width(),
        outer.height(),
        client.width(),
        client.height()
    )
}

/// Place the overlay next to the cursor, sized to the measured text.
pub fn overlay_layout(cursor: Point, measured: Size, style: &OverlayStyle) -> OverlayLayout {
    OverlayLayout {
        position: cursor.offset(style.cursor_offset.0, style.cursor_offset.1),
        size: measured.pad(style.padding.width, style.padding.height),
    }
}
