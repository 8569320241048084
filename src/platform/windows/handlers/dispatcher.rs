//! Dispatch table for the Windows session.

use log::trace;

use crate::events::{AppEvent, Dispatcher, EventKind};
use crate::platform::windows::app::Session;
use crate::platform::windows::ffi::{Win32Cursor, Win32Geometry};

/// Build the kind → handler table used by `deliver`.
pub fn table() -> Dispatcher<Session> {
    Dispatcher::new()
        .on(EventKind::MoveSizeStart, on_gesture)
        .on(EventKind::MoveSizeEnd, on_gesture)
        .on(EventKind::Tick, on_tick)
        .on(EventKind::Paint, on_paint)
        .on(EventKind::OverlayDestroyed, on_overlay_destroyed)
}

fn on_gesture(session: &mut Session, event: &AppEvent) {
    session.tracker.on_event(event, &mut session.overlay);
}

fn on_tick(session: &mut Session, _: &AppEvent) {
    session
        .tracker
        .on_tick(&Win32Geometry, &Win32Cursor, &mut session.overlay);
}

fn on_paint(session: &mut Session, _: &AppEvent) {
    if let Err(e) = session.overlay.paint() {
        trace!("Paint skipped: {}", e);
    }
}

fn on_overlay_destroyed(session: &mut Session, _: &AppEvent) {
    session.overlay.mark_destroyed();
}
