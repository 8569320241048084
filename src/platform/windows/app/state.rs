//! Windows runtime state management.
//!
//! `Session` bundles the tracker with every OS resource it drives. It lives
//! in a thread-local slot because the window procedure and the WinEvent hook
//! are `extern "system"` functions with no user pointer.

use std::cell::{Cell, RefCell};

use log::{debug, info, warn};
use scopeguard::{guard, ScopeGuard};
use windows::Win32::UI::Accessibility::HWINEVENTHOOK;
use windows::Win32::UI::WindowsAndMessaging::{KillTimer, SetTimer, WNDPROC};

use crate::app::Tracker;
use crate::error::{Error, Result};
use crate::events::{AppEvent, Dispatcher, PendingGesture};
use crate::model::constants::*;
use crate::model::OverlayStyle;
use crate::platform::windows::handlers::dispatcher;
use crate::platform::windows::input::{install_move_size_hook, uninstall_move_size_hook};
use crate::platform::windows::ui::overlay::GdiOverlay;

/// Application context for one run of the message loop.
pub struct Session {
    pub tracker: Tracker,
    pub overlay: GdiOverlay,
    hook: HWINEVENTHOOK,
    timer: usize,
}

impl Session {
    /// Create the overlay, install the hook and start the polling timer.
    ///
    /// Anything already acquired is released again if a later step fails.
    pub fn init(wndproc: WNDPROC, style: OverlayStyle) -> Result<Self> {
        let overlay = guard(GdiOverlay::create(wndproc, style.clone())?, GdiOverlay::destroy);
        let hook = guard(install_move_size_hook()?, uninstall_move_size_hook);

        let timer = unsafe { SetTimer(Some(overlay.hwnd()), TIMER_TICK, TIMER_INTERVAL_MS, None) };
        if timer == 0 {
            return Err(Error::TimerRegistration(format!(
                "SetTimer({}ms) returned 0",
                TIMER_INTERVAL_MS
            )));
        }

        info!("Overlay ready, polling every {}ms", TIMER_INTERVAL_MS);

        Ok(Self {
            tracker: Tracker::new(style),
            overlay: ScopeGuard::into_inner(overlay),
            hook: ScopeGuard::into_inner(hook),
            timer,
        })
    }

    /// Unhook, stop the timer and destroy the overlay, in that order.
    ///
    /// If the overlay window is already gone its timer went with it, so only
    /// the hook and the font are left to release.
    pub fn shutdown(self) {
        uninstall_move_size_hook(self.hook);
        if self.overlay.is_alive() {
            unsafe {
                if let Err(e) = KillTimer(Some(self.overlay.hwnd()), self.timer) {
                    warn!("KillTimer failed: {}", e);
                }
            }
        }
        self.overlay.destroy();
        info!("Overlay shut down");
    }
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    static DISPATCH: Dispatcher<Session> = dispatcher::table();
    static PENDING: Cell<PendingGesture> = const { Cell::new(PendingGesture::new()) };
}

/// Make `session` the target of [`deliver`].
pub fn install_session(session: Session) {
    SESSION.with(|s| *s.borrow_mut() = Some(session));
}

/// Detach the session, e.g. once the message loop has ended.
pub fn take_session() -> Option<Session> {
    SESSION.with(|s| s.borrow_mut().take())
}

/// Route `event` to its handler. Returns `true` if a handler ran.
///
/// A gesture that arrives while a handler is still running (a re-entrant
/// window message) is parked and replayed after that handler returns. Other
/// re-entrant events are dropped.
pub fn deliver(event: AppEvent) -> bool {
    if event.kind().is_none() {
        return false;
    }

    SESSION.with(|slot| {
        let handled = {
            let Ok(mut slot) = slot.try_borrow_mut() else {
                park(event);
                return false;
            };
            let Some(session) = slot.as_mut() else {
                return false;
            };
            DISPATCH.with(|table| table.dispatch(session, &event))
        };

        while let Some(next) = take_parked() {
            let Ok(mut slot) = slot.try_borrow_mut() else {
                break;
            };
            let Some(session) = slot.as_mut() else {
                break;
            };
            debug!("Replaying {}", next.description());
            DISPATCH.with(|table| table.dispatch(session, &next));
        }

        handled
    })
}

fn park(event: AppEvent) {
    let kept = PENDING.with(|cell| {
        let mut pending = cell.get();
        let kept = pending.defer(event);
        cell.set(pending);
        kept
    });
    if kept {
        debug!("Deferred re-entrant event: {}", event.description());
    } else {
        warn!("Dropped re-entrant event: {}", event.description());
    }
}

fn take_parked() -> Option<AppEvent> {
    PENDING.with(|cell| cell.take().take())
}
