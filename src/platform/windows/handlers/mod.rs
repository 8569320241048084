//! Event handlers for Windows.

pub mod dispatcher;
