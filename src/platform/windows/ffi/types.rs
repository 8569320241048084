//! Conversions between Win32 types and the model types.

use windows::Win32::Foundation::{COLORREF, HWND, POINT, RECT};

use crate::model::{Point, Rect, WindowId};

/// Rebuild a window handle from a tracked id.
pub fn hwnd_from_id(window: WindowId) -> HWND {
    HWND(window.raw() as *mut _)
}

pub fn rect_from_win32(rect: &RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

pub fn point_from_win32(point: &POINT) -> Point {
    Point::new(point.x, point.y)
}

pub fn colorref((r, g, b): (u8, u8, u8)) -> COLORREF {
    COLORREF(crate::rgb(r, g, b))
}
