//! Blocking message pump.

use windows::Win32::UI::WindowsAndMessaging::{DispatchMessageW, GetMessageW, TranslateMessage, MSG};

/// Pump messages until `WM_QUIT` (or a `GetMessageW` error).
///
/// Timer, paint and WinEvent callbacks all run from inside this loop.
pub fn pump_messages() {
    let mut msg = MSG::default();
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}
