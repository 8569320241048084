//! In-memory stand-ins for the OS seams.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use sizetip::app::{CursorSource, GeometrySource, OverlaySurface};
use sizetip::error::{Error, Result};
use sizetip::model::{OverlayLayout, Point, Rect, Size, WindowGeometry, WindowId};

/// Pretend every character is 7px wide and a line is 16px tall.
pub const CHAR_WIDTH: i32 = 7;
pub const LINE_HEIGHT: i32 = 16;

/// Records everything the tracker does to the overlay.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub visible: bool,
    pub layout: Option<OverlayLayout>,
    pub text: Option<String>,
    pub presents: u32,
    pub visibility_changes: u32,
    /// Make `measure` fail, as if the DC were unavailable.
    pub fail_measure: bool,
    /// Make `present` fail after recording nothing.
    pub fail_present: bool,
}

impl OverlaySurface for FakeSurface {
    fn measure(&mut self, text: &str) -> Result<Size> {
        if self.fail_measure {
            return Err(Error::Drawing("GetDC returned no DC".into()));
        }
        if text.is_empty() {
            return Ok(Size::default());
        }
        Ok(Size::new(
            text.chars().count() as i32 * CHAR_WIDTH,
            LINE_HEIGHT,
        ))
    }

    fn present(&mut self, layout: OverlayLayout, text: &str) -> Result<()> {
        if self.fail_present {
            return Err(Error::Drawing("SetWindowPos failed".into()));
        }
        self.layout = Some(layout);
        self.text = Some(text.to_string());
        self.presents += 1;
        Ok(())
    }

    fn show(&mut self) {
        if !self.visible {
            self.visibility_changes += 1;
        }
        self.visible = true;
    }

    fn hide(&mut self) {
        if self.visible {
            self.visibility_changes += 1;
        }
        self.visible = false;
    }
}

/// Window table; a window missing from it behaves like a closed one.
#[derive(Debug, Default)]
pub struct FakeWindows {
    windows: RefCell<HashMap<WindowId, WindowGeometry>>,
    pub queries: Cell<u32>,
}

impl FakeWindows {
    pub fn with(window: WindowId, geometry: WindowGeometry) -> Self {
        let fake = Self::default();
        fake.set(window, geometry);
        fake
    }

    pub fn set(&self, window: WindowId, geometry: WindowGeometry) {
        self.windows.borrow_mut().insert(window, geometry);
    }

    pub fn close(&self, window: WindowId) {
        self.windows.borrow_mut().remove(&window);
    }
}

impl GeometrySource for FakeWindows {
    fn geometry(&self, window: WindowId) -> Result<WindowGeometry> {
        self.queries.set(self.queries.get() + 1);
        self.windows
            .borrow()
            .get(&window)
            .copied()
            .ok_or(Error::GeometryUnavailable(window))
    }
}

/// Cursor position; `None` behaves like a failing `GetCursorPos`.
#[derive(Debug)]
pub struct FakeCursor(pub Cell<Option<Point>>);

impl Default for FakeCursor {
    fn default() -> Self {
        Self::at(0, 0)
    }
}

impl FakeCursor {
    pub fn at(x: i32, y: i32) -> Self {
        Self(Cell::new(Some(Point::new(x, y))))
    }

    pub fn move_to(&self, x: i32, y: i32) {
        self.0.set(Some(Point::new(x, y)));
    }

    pub fn lose(&self) {
        self.0.set(None);
    }
}

impl CursorSource for FakeCursor {
    fn cursor_position(&self) -> Result<Point> {
        self.0
            .get()
            .ok_or_else(|| Error::CursorUnavailable("access denied".into()))
    }
}

pub fn window(raw: isize) -> WindowId {
    WindowId::from_raw(raw).expect("non-null test handle")
}

/// The reference window: outer (100,200)-(400,350), client 280x130.
pub fn reference_geometry() -> WindowGeometry {
    WindowGeometry {
        outer: Rect::new(100, 200, 400, 350),
        client: Rect::new(0, 0, 280, 130),
    }
}
