//! Blocking error dialog for fatal startup failures.

use windows::core::{w, PCWSTR};
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

use crate::error::Error;
use crate::to_wide;

/// Text shown when the WinEvent hook cannot be installed.
const HOOK_FAILED_MESSAGE: &str = "Failed to set WinEvent hook!";

/// Show a modal error box for `err`. Blocks until dismissed.
pub fn show_error_dialog(err: &Error) {
    let message = match err {
        Error::HookRegistration => HOOK_FAILED_MESSAGE.to_string(),
        other => other.to_string(),
    };
    let message_wide = to_wide(&message);

    unsafe {
        MessageBoxW(
            None,
            PCWSTR(message_wide.as_ptr()),
            w!("Error"),
            MB_OK | MB_ICONERROR,
        );
    }
}
