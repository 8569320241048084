//! Visual style of the overlay (pure Rust, no FFI).

use super::constants::*;
use super::geometry::Size;

/// Everything the renderer needs to know about how the overlay looks.
///
/// Built from the compile-time constants; there is no way to change it at
/// runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Extra space around the measured label.
    pub padding: Size,
    /// Distance from the cursor to the overlay's top-left corner.
    pub cursor_offset: (i32, i32),
    /// Background fill (R, G, B).
    pub background: (u8, u8, u8),
    /// Text color (R, G, B).
    pub text_color: (u8, u8, u8),
    /// Font face name.
    pub font_face: &'static str,
    /// Font cell height in pixels.
    pub font_height: i32,
    /// Window opacity [0, 100].
    pub opacity_pct: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            padding: Size::new(PADDING_X, PADDING_Y),
            cursor_offset: (CURSOR_OFFSET_X, CURSOR_OFFSET_Y),
            background: BACKGROUND_COLOR,
            text_color: TEXT_COLOR,
            font_face: FONT_FACE,
            font_height: FONT_HEIGHT,
            opacity_pct: OPACITY_PCT,
        }
    }
}

impl OverlayStyle {
    /// Layered-window alpha for the configured opacity.
    pub fn alpha(&self) -> u8 {
        ((255 * self.opacity_pct.min(100)) / 100) as u8
    }

    /// Background as a GDI `COLORREF` value (0x00BBGGRR).
    pub fn background_ref(&self) -> u32 {
        crate::rgb(self.background.0, self.background.1, self.background.2)
    }

    /// Text color as a GDI `COLORREF` value (0x00BBGGRR).
    pub fn text_ref(&self) -> u32 {
        crate::rgb(self.text_color.0, self.text_color.1, self.text_color.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_alpha_is_ninety_percent() {
        assert_eq!(OverlayStyle::default().alpha(), 229);
    }

    #[test]
    fn alpha_caps_at_fully_opaque() {
        let style = OverlayStyle {
            opacity_pct: 150,
            ..OverlayStyle::default()
        };
        assert_eq!(style.alpha(), 255);
    }

    #[test]
    fn default_colors() {
        let style = OverlayStyle::default();
        assert_eq!(style.background_ref(), 0x00E0_FFFF);
        assert_eq!(style.text_ref(), 0);
    }
}
