//! Events delivered to the application by the message loop.
//!
//! This module is pure Rust with no FFI dependencies, making it fully testable.

use crate::model::WindowId;

/// `EVENT_SYSTEM_MOVESIZESTART` from winuser.h.
pub const EVENT_SYSTEM_MOVESIZESTART: u32 = 0x000A;

/// `EVENT_SYSTEM_MOVESIZEEND` from winuser.h.
pub const EVENT_SYSTEM_MOVESIZEEND: u32 = 0x000B;

/// Everything the run loop can hand to the application.
///
/// Hook callbacks, timer ticks and paint requests all arrive on the same
/// thread, one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The user started moving or resizing a window.
    MoveSizeStart(WindowId),

    /// The move/resize gesture ended.
    MoveSizeEnd,

    /// The polling timer fired.
    Tick,

    /// The overlay needs repainting.
    Paint,

    /// The overlay window received `WM_DESTROY`.
    OverlayDestroyed,

    /// Any other WinEvent code. Never changes state.
    Other(u32),
}

/// Discriminant used as the dispatch table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MoveSizeStart,
    MoveSizeEnd,
    Tick,
    Paint,
    OverlayDestroyed,
}

impl EventKind {
    pub const COUNT: usize = 5;

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl AppEvent {
    /// Decode a raw WinEvent notification.
    ///
    /// A start notification without a window handle carries nothing to track
    /// and is reported as `Other`.
    pub fn from_win_event(event: u32, hwnd: isize) -> Self {
        match event {
            EVENT_SYSTEM_MOVESIZESTART => match WindowId::from_raw(hwnd) {
                Some(id) => AppEvent::MoveSizeStart(id),
                None => AppEvent::Other(event),
            },
            EVENT_SYSTEM_MOVESIZEEND => AppEvent::MoveSizeEnd,
            other => AppEvent::Other(other),
        }
    }

    /// Start or end of a move/resize gesture.
    pub fn is_gesture(&self) -> bool {
        matches!(self, AppEvent::MoveSizeStart(_) | AppEvent::MoveSizeEnd)
    }

    /// Dispatch key, or `None` for events nobody handles.
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            AppEvent::MoveSizeStart(_) => Some(EventKind::MoveSizeStart),
            AppEvent::MoveSizeEnd => Some(EventKind::MoveSizeEnd),
            AppEvent::Tick => Some(EventKind::Tick),
            AppEvent::Paint => Some(EventKind::Paint),
            AppEvent::OverlayDestroyed => Some(EventKind::OverlayDestroyed),
            AppEvent::Other(_) => None,
        }
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::MoveSizeStart(_) => "Move/resize started",
            AppEvent::MoveSizeEnd => "Move/resize ended",
            AppEvent::Tick => "Polling timer tick",
            AppEvent::Paint => "Overlay paint request",
            AppEvent::OverlayDestroyed => "Overlay window destroyed",
            AppEvent::Other(_) => "Unhandled window event",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [EventKind; EventKind::COUNT] = [
        EventKind::MoveSizeStart,
        EventKind::MoveSizeEnd,
        EventKind::Tick,
        EventKind::Paint,
        EventKind::OverlayDestroyed,
    ];

    #[test]
    fn test_decode_move_size_start() {
        let event = AppEvent::from_win_event(EVENT_SYSTEM_MOVESIZESTART, 0x42);
        assert_eq!(event, AppEvent::MoveSizeStart(WindowId::from_raw(0x42).unwrap()));
    }

    #[test]
    fn test_decode_start_without_window_is_other() {
        let event = AppEvent::from_win_event(EVENT_SYSTEM_MOVESIZESTART, 0);
        assert_eq!(event, AppEvent::Other(EVENT_SYSTEM_MOVESIZESTART));
        assert_eq!(event.kind(), None);
    }

    #[test]
    fn test_decode_move_size_end_ignores_handle() {
        assert_eq!(
            AppEvent::from_win_event(EVENT_SYSTEM_MOVESIZEEND, 0),
            AppEvent::MoveSizeEnd
        );
        assert_eq!(
            AppEvent::from_win_event(EVENT_SYSTEM_MOVESIZEEND, 0x42),
            AppEvent::MoveSizeEnd
        );
    }

    #[test]
    fn test_decode_unrelated_event() {
        // EVENT_SYSTEM_FOREGROUND
        assert_eq!(AppEvent::from_win_event(0x0003, 0x42), AppEvent::Other(0x0003));
    }

    #[test]
    fn test_kind_indices_are_dense() {
        for (i, kind) in ALL_KINDS.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_all_events_have_descriptions() {
        let id = WindowId::from_raw(1).unwrap();
        let events = [
            AppEvent::MoveSizeStart(id),
            AppEvent::MoveSizeEnd,
            AppEvent::Tick,
            AppEvent::Paint,
            AppEvent::OverlayDestroyed,
            AppEvent::Other(0),
        ];

        for event in events {
            assert!(!event.description().is_empty());
        }
    }

    #[test]
    fn test_only_start_and_end_are_gestures() {
        let id = WindowId::from_raw(1).unwrap();
        assert!(AppEvent::MoveSizeStart(id).is_gesture());
        assert!(AppEvent::MoveSizeEnd.is_gesture());
        assert!(!AppEvent::Tick.is_gesture());
        assert!(!AppEvent::Paint.is_gesture());
        assert!(!AppEvent::OverlayDestroyed.is_gesture());
        assert!(!AppEvent::Other(EVENT_SYSTEM_MOVESIZEEND).is_gesture());
    }
}
