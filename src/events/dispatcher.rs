//! Dispatch table from event kind to handler.
//!
//! The window procedure, the WinEvent hook and the timer all funnel into
//! [`Dispatcher::dispatch`], which runs the registered handler synchronously
//! on the calling thread.

use super::types::{AppEvent, EventKind};

/// Handler signature: the application context plus the event being handled.
pub type Handler<C> = fn(&mut C, &AppEvent);

/// Fixed-size table of at most one handler per [`EventKind`].
pub struct Dispatcher<C> {
    handlers: [Option<Handler<C>>; EventKind::COUNT],
}

impl<C> Dispatcher<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            handlers: [None; EventKind::COUNT],
        }
    }

    /// Register `handler` for `kind`, replacing any previous one.
    pub fn on(mut self, kind: EventKind, handler: Handler<C>) -> Self {
        self.handlers[kind.index()] = Some(handler);
        self
    }

    /// Run the handler for `event`, if any.
    ///
    /// Returns `true` when a handler ran.
    pub fn dispatch(&self, ctx: &mut C, event: &AppEvent) -> bool {
        let Some(kind) = event.kind() else {
            return false;
        };
        match self.handlers[kind.index()] {
            Some(handler) => {
                handler(ctx, event);
                true
            }
            None => false,
        }
    }
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindowId;

    #[derive(Default)]
    struct Log(Vec<&'static str>);

    fn on_start(log: &mut Log, _: &AppEvent) {
        log.0.push("start");
    }

    fn on_end(log: &mut Log, _: &AppEvent) {
        log.0.push("end");
    }

    fn on_tick(log: &mut Log, _: &AppEvent) {
        log.0.push("tick");
    }

    fn table() -> Dispatcher<Log> {
        Dispatcher::new()
            .on(EventKind::MoveSizeStart, on_start)
            .on(EventKind::MoveSizeEnd, on_end)
            .on(EventKind::Tick, on_tick)
    }

    #[test]
    fn test_routes_by_kind() {
        let mut log = Log::default();
        let id = WindowId::from_raw(7).unwrap();
        let d = table();

        assert!(d.dispatch(&mut log, &AppEvent::MoveSizeStart(id)));
        assert!(d.dispatch(&mut log, &AppEvent::Tick));
        assert!(d.dispatch(&mut log, &AppEvent::MoveSizeEnd));
        assert_eq!(log.0, vec!["start", "tick", "end"]);
    }

    #[test]
    fn test_unregistered_kind_is_not_handled() {
        let mut log = Log::default();
        let d = table();

        assert!(!d.dispatch(&mut log, &AppEvent::Paint));
        assert!(log.0.is_empty());
    }

    #[test]
    fn test_other_events_never_dispatch() {
        let mut log = Log::default();
        assert!(!table().dispatch(&mut log, &AppEvent::Other(0x8005)));
        assert!(log.0.is_empty());
    }

    #[test]
    fn test_later_registration_wins() {
        let mut log = Log::default();
        let d = Dispatcher::new()
            .on(EventKind::Tick, on_start)
            .on(EventKind::Tick, on_tick);

        d.dispatch(&mut log, &AppEvent::Tick);
        assert_eq!(log.0, vec!["tick"]);
    }

    #[test]
    fn test_destroy_notification_routes_to_its_handler() {
        fn on_destroyed(log: &mut Log, _: &AppEvent) {
            log.0.push("destroyed");
        }

        let mut log = Log::default();
        let d = table().on(EventKind::OverlayDestroyed, on_destroyed);

        assert!(d.dispatch(&mut log, &AppEvent::OverlayDestroyed));
        assert_eq!(log.0, vec!["destroyed"]);
    }
}
