//! Plain geometry types (pure Rust, no FFI).

use std::fmt;

/// Opaque identifier of an OS window.
///
/// Holds the raw handle value. It does not own the window, which may be
/// destroyed at any time; queries through it are expected to fail then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(isize);

impl WindowId {
    /// Wrap a raw handle value. Returns `None` for the null handle.
    pub fn from_raw(raw: isize) -> Option<Self> {
        if raw == 0 {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn raw(self) -> isize {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A point in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A width/height pair in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow by `(dw, dh)`.
    pub const fn pad(self, dw: i32, dh: i32) -> Self {
        Self {
            width: self.width + dw,
            height: self.height + dh,
        }
    }
}

/// Edge-based rectangle, right/bottom exclusive, as the OS reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Result of one geometry query on a tracked window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowGeometry {
    /// Bounding rectangle in screen coordinates, frame included.
    pub outer: Rect,
    /// Client area; origin is always (0, 0).
    pub client: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_is_not_a_window() {
        assert_eq!(WindowId::from_raw(0), None);
        assert_eq!(WindowId::from_raw(0x1234).map(WindowId::raw), Some(0x1234));
    }

    #[test]
    fn window_id_displays_as_hex() {
        let id = WindowId::from_raw(0x00ab_cdef).unwrap();
        assert_eq!(id.to_string(), "0xabcdef");
    }

    #[test]
    fn rect_dimensions() {
        let r = Rect::new(100, 200, 400, 350);
        assert_eq!(r.width(), 300);
        assert_eq!(r.height(), 150);
        assert_eq!(r.origin(), Point::new(100, 200));
        assert_eq!(r.size(), Size::new(300, 150));
    }

    #[test]
    fn rect_with_negative_origin() {
        // Windows on a monitor left of the primary have negative coordinates
        let r = Rect::new(-1920, -8, -960, 500);
        assert_eq!(r.width(), 960);
        assert_eq!(r.height(), 508);
    }

    #[test]
    fn point_offset_and_size_pad() {
        assert_eq!(Point::new(5, -5).offset(10, 10), Point::new(15, 5));
        assert_eq!(Size::new(3, 4).pad(20, 10), Size::new(23, 14));
    }
}
