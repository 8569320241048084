//! Overlay window and its GDI drawing.

pub mod drawing;
pub mod renderer;

pub use renderer::GdiOverlay;
