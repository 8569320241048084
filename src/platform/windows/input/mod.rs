//! Input handling for Windows (WinEvent hook).

pub mod winevent;

pub use winevent::{install_move_size_hook, uninstall_move_size_hook};
