//! Holding slot for gesture events that arrive while a handler is running.
//!
//! Only the latest gesture matters for visibility: a start followed by an
//! end leaves nothing tracked, an end followed by a start leaves the new
//! window tracked. One slot is therefore enough.

use super::types::AppEvent;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PendingGesture(Option<AppEvent>);

impl PendingGesture {
    pub const fn new() -> Self {
        Self(None)
    }

    /// Keep `event` for replay, replacing any older gesture.
    ///
    /// Returns `false` for non-gesture events, which are not kept.
    pub fn defer(&mut self, event: AppEvent) -> bool {
        if !event.is_gesture() {
            return false;
        }
        self.0 = Some(event);
        true
    }

    pub fn take(&mut self) -> Option<AppEvent> {
        self.0.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowId;

    #[test]
    fn test_non_gestures_are_not_kept() {
        let mut pending = PendingGesture::new();
        assert!(!pending.defer(AppEvent::Tick));
        assert!(!pending.defer(AppEvent::Paint));
        assert!(!pending.defer(AppEvent::Other(3)));
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_latest_gesture_wins() {
        let mut pending = PendingGesture::new();
        let id = WindowId::from_raw(0x20).unwrap();

        assert!(pending.defer(AppEvent::MoveSizeStart(id)));
        assert!(pending.defer(AppEvent::MoveSizeEnd));
        assert_eq!(pending.take(), Some(AppEvent::MoveSizeEnd));
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_tick_does_not_evict_gesture() {
        let mut pending = PendingGesture::new();
        pending.defer(AppEvent::MoveSizeEnd);
        pending.defer(AppEvent::Tick);
        assert_eq!(pending.take(), Some(AppEvent::MoveSizeEnd));
    }
}
