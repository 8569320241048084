//! Tracked-window state and the per-tick refresh.
//!
//! `Tracker` is the single application context: it knows which window is
//! being moved (if any) and what was last drawn. It never touches the OS
//! directly; everything goes through the traits in [`super::surface`].

use log::{debug, trace};

use super::surface::{CursorSource, GeometrySource, OverlaySurface};
use crate::error::Result;
use crate::events::AppEvent;
use crate::model::{format_label, overlay_layout, OverlayLayout, OverlayStyle, WindowId};

/// The last label that made it to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub layout: OverlayLayout,
    pub label: String,
}

/// Outcome of one polling tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing is tracked.
    Idle,
    /// A query or draw failed; the overlay was left as it was.
    Skipped,
    /// The overlay was redrawn at this layout.
    Rendered(OverlayLayout),
}

#[derive(Debug, Default)]
pub struct Tracker {
    style: OverlayStyle,
    tracked: Option<WindowId>,
    last_frame: Option<Frame>,
}

impl Tracker {
    pub fn new(style: OverlayStyle) -> Self {
        Self {
            style,
            tracked: None,
            last_frame: None,
        }
    }

    /// Window currently being moved or resized.
    pub fn tracked(&self) -> Option<WindowId> {
        self.tracked
    }

    /// The overlay is shown exactly while a window is tracked.
    pub fn overlay_visible(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Apply a gesture event. Returns `true` if a window started or stopped
    /// being tracked; an end with nothing tracked still hides but returns `false`.
    ///
    /// Any window in the system is accepted; there is no owner filter.
    pub fn on_event<S: OverlaySurface>(&mut self, event: &AppEvent, surface: &mut S) -> bool {
        match *event {
            AppEvent::MoveSizeStart(window) => {
                debug!("Tracking window {}", window);
                self.tracked = Some(window);
                surface.show();
                true
            }
            AppEvent::MoveSizeEnd => {
                surface.hide();
                match self.tracked.take() {
                    Some(window) => {
                        debug!("Stopped tracking window {}", window);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Polling timer callback.
    pub fn on_tick<G, C, S>(&mut self, geometry: &G, cursor: &C, surface: &mut S) -> Tick
    where
        G: GeometrySource,
        C: CursorSource,
        S: OverlaySurface,
    {
        let Some(window) = self.tracked else {
            return Tick::Idle;
        };

        match self.refresh(window, geometry, cursor, surface) {
            Ok(layout) => Tick::Rendered(layout),
            Err(e) => {
                trace!("Skipping tick: {}", e);
                Tick::Skipped
            }
        }
    }

    fn refresh<G, C, S>(
        &mut self,
        window: WindowId,
        geometry: &G,
        cursor: &C,
        surface: &mut S,
    ) -> Result<OverlayLayout>
    where
        G: GeometrySource,
        C: CursorSource,
        S: OverlaySurface,
    {
        let geometry = geometry.geometry(window)?;
        let label = format_label(&geometry);
        let cursor = cursor.cursor_position()?;
        let measured = surface.measure(&label)?;
        let layout = overlay_layout(cursor, measured, &self.style);

        surface.present(layout, &label)?;
        trace!("{} -> {:?}", label, layout);

        self.last_frame = Some(Frame { layout, label });
        Ok(layout)
    }
}
