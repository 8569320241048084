//! UI components for Windows.

pub mod dialogs;
pub mod overlay;

pub use dialogs::*;
pub use overlay::*;
