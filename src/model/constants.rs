//! Compile-time tunables.
//!
//! There is no runtime configuration: every knob of the overlay lives here.

// === Timing ===

/// Polling timer identifier on the overlay window.
pub const TIMER_TICK: usize = 1;

/// Polling interval in milliseconds.
pub const TIMER_INTERVAL_MS: u32 = 10;

// === Layout ===

/// Horizontal padding added around the measured label, in pixels.
pub const PADDING_X: i32 = 20;

/// Vertical padding added around the measured label, in pixels.
pub const PADDING_Y: i32 = 10;

/// Horizontal distance from the cursor to the overlay's top-left corner.
pub const CURSOR_OFFSET_X: i32 = 10;

/// Vertical distance from the cursor to the overlay's top-left corner.
pub const CURSOR_OFFSET_Y: i32 = 10;

// === Visual Defaults ===

/// Background fill (R, G, B) - pale yellow.
pub const BACKGROUND_COLOR: (u8, u8, u8) = (255, 255, 224);

/// Label text color (R, G, B) - black.
pub const TEXT_COLOR: (u8, u8, u8) = (0, 0, 0);

/// Label font face.
pub const FONT_FACE: &str = "Arial";

/// Label font cell height in pixels.
pub const FONT_HEIGHT: i32 = 16;

/// Overlay opacity in percent.
pub const OPACITY_PCT: u32 = 90;

// === Window ===

/// Window class registered for the overlay.
pub const OVERLAY_CLASS_NAME: &str = "SizetipOverlay";

/// Initial overlay size before the first refresh.
pub const INITIAL_SIZE: (i32, i32) = (200, 50);

/// Capacity of the caption buffer read back during paint.
pub const CAPTION_CAPACITY: usize = 256;
