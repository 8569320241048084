//! OS-backed geometry and cursor sources.

use windows::Win32::Foundation::{POINT, RECT};
use windows::Win32::UI::WindowsAndMessaging::{GetClientRect, GetCursorPos, GetWindowRect};

use super::types::{hwnd_from_id, point_from_win32, rect_from_win32};
use crate::app::{CursorSource, GeometrySource};
use crate::error::{Error, Result};
use crate::model::{Point, WindowGeometry, WindowId};

/// Reads window rectangles with `GetWindowRect` / `GetClientRect`.
///
/// Works on windows of any process. A window that closed mid-gesture makes
/// the query fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Geometry;

impl GeometrySource for Win32Geometry {
    fn geometry(&self, window: WindowId) -> Result<WindowGeometry> {
        let hwnd = hwnd_from_id(window);
        let mut outer = RECT::default();
        let mut client = RECT::default();

        unsafe {
            GetWindowRect(hwnd, &mut outer)
                .and_then(|_| GetClientRect(hwnd, &mut client))
                .map_err(|_| Error::GeometryUnavailable(window))?;
        }

        Ok(WindowGeometry {
            outer: rect_from_win32(&outer),
            client: rect_from_win32(&client),
        })
    }
}

/// Reads the cursor with `GetCursorPos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32Cursor;

impl CursorSource for Win32Cursor {
    fn cursor_position(&self) -> Result<Point> {
        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| Error::CursorUnavailable(e.to_string()))?;
        Ok(point_from_win32(&point))
    }
}
