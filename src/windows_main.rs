//! Windows-specific entry point.
//!
//! Owns the overlay's window procedure and brackets the message loop with
//! session init/shutdown.

use log::{error, info};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, PostQuitMessage, MA_NOACTIVATE, WM_DESTROY, WM_MOUSEACTIVATE, WM_PAINT,
    WM_TIMER,
};

use sizetip::error::{Error, Result};
use sizetip::events::AppEvent;
use sizetip::model::constants::TIMER_TICK;
use sizetip::model::OverlayStyle;
use sizetip::platform::windows::app::{
    deliver, install_session, pump_messages, take_session, Session,
};
use sizetip::platform::windows::ui::dialogs::show_error_dialog;

/// Run the overlay until the message loop ends. Returns the exit code.
pub fn run() -> i32 {
    match run_app() {
        Ok(()) => 0,
        Err(e) => {
            error!("sizetip error: {}", e);
            if matches!(e, Error::HookRegistration) {
                show_error_dialog(&e);
            }
            1
        }
    }
}

fn run_app() -> Result<()> {
    let session = Session::init(Some(wndproc), OverlayStyle::default())?;
    install_session(session);

    pump_messages();

    if let Some(session) = take_session() {
        session.shutdown();
    }
    info!("Message loop ended");
    Ok(())
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_TIMER if wparam.0 == TIMER_TICK => {
                deliver(AppEvent::Tick);
                LRESULT(0)
            }

            WM_PAINT => {
                if deliver(AppEvent::Paint) {
                    LRESULT(0)
                } else {
                    // Still validates the update region
                    DefWindowProcW(hwnd, msg, wparam, lparam)
                }
            }

            // Clicking the overlay must not steal focus from the dragged window
            WM_MOUSEACTIVATE => LRESULT(MA_NOACTIVATE as isize),

            WM_DESTROY => {
                deliver(AppEvent::OverlayDestroyed);
                PostQuitMessage(0);
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
