//! System-wide move/resize WinEvent hook.

use log::warn;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Accessibility::{SetWinEventHook, UnhookWinEvent, HWINEVENTHOOK};
use windows::Win32::UI::WindowsAndMessaging::{
    EVENT_SYSTEM_MOVESIZEEND, EVENT_SYSTEM_MOVESIZESTART, WINEVENT_OUTOFCONTEXT,
};

use crate::error::{Error, Result};
use crate::events::AppEvent;
use crate::platform::windows::app::deliver;

/// Subscribe to move/resize start and end for every window in the system.
///
/// Out-of-context: callbacks arrive through this thread's message loop.
pub fn install_move_size_hook() -> Result<HWINEVENTHOOK> {
    let hook = unsafe {
        SetWinEventHook(
            EVENT_SYSTEM_MOVESIZESTART,
            EVENT_SYSTEM_MOVESIZEEND,
            None,
            Some(win_event_proc),
            0,
            0,
            WINEVENT_OUTOFCONTEXT,
        )
    };

    if hook.is_invalid() {
        return Err(Error::HookRegistration);
    }
    Ok(hook)
}

pub fn uninstall_move_size_hook(hook: HWINEVENTHOOK) {
    unsafe {
        if !UnhookWinEvent(hook).as_bool() {
            warn!("UnhookWinEvent({:?}) failed", hook);
        }
    }
}

/// WinEvent callback. No filter on process or object: any window counts.
unsafe extern "system" fn win_event_proc(
    _hook: HWINEVENTHOOK,
    event: u32,
    hwnd: HWND,
    _id_object: i32,
    _id_child: i32,
    _event_thread: u32,
    _event_time: u32,
) {
    deliver(AppEvent::from_win_event(event, hwnd.0 as isize));
}
