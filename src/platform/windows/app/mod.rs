//! Session lifecycle and message loop for Windows.

pub mod message_loop;
pub mod state;

pub use message_loop::pump_messages;
pub use state::{deliver, install_session, take_session, Session};
