//! Event routing.
//!
//! Every OS notification the app cares about becomes an [`AppEvent`] and is
//! routed through a [`Dispatcher`] table to exactly one handler.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  WinEvent   │     │  WM_TIMER   │     │  WM_PAINT   │
//! │    hook     │     │             │     │             │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │                   │                   │
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │              Dispatcher (kind → handler)            │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ synchronous call
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │          Tracker + overlay (single thread)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Delivery is already serialized by the OS message loop, so there are no
//! locks here. A gesture that arrives while a handler is still running is
//! parked in a [`PendingGesture`] and replayed once that handler returns.

pub mod dispatcher;
pub mod pending;
pub mod types;

pub use dispatcher::{Dispatcher, Handler};
pub use pending::PendingGesture;
pub use types::{AppEvent, EventKind};
