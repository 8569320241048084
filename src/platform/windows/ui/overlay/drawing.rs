//! GDI drawing for the overlay label.

use windows::core::PCWSTR;
use windows::Win32::Foundation::RECT;
use windows::Win32::Graphics::Gdi::{
    CreateFontW, CreateSolidBrush, DeleteObject, DrawTextW, FillRect, SelectObject, SetBkMode,
    SetTextColor, CLEARTYPE_QUALITY, CLIP_DEFAULT_PRECIS, DEFAULT_CHARSET, DT_CENTER,
    DT_SINGLELINE, DT_VCENTER, FW_NORMAL, HDC, HFONT, OUT_OUTLINE_PRECIS, TRANSPARENT,
    VARIABLE_PITCH,
};

use crate::model::OverlayStyle;
use crate::platform::windows::ffi::colorref;
use crate::to_wide;

/// Create the label font described by `style`.
///
/// Returns an invalid handle on failure; the caller checks.
pub unsafe fn create_label_font(style: &OverlayStyle) -> HFONT {
    let face = to_wide(style.font_face);
    CreateFontW(
        style.font_height,
        0,
        0,
        0,
        FW_NORMAL.0 as i32,
        0,
        0,
        0,
        DEFAULT_CHARSET,
        OUT_OUTLINE_PRECIS,
        CLIP_DEFAULT_PRECIS,
        CLEARTYPE_QUALITY,
        VARIABLE_PITCH.0 as u32,
        PCWSTR(face.as_ptr()),
    )
}

/// Fill `rect` with the background and draw `text` centered on it.
///
/// Used both for explicit refreshes and for `WM_PAINT`.
pub unsafe fn draw_label(hdc: HDC, rect: &RECT, text: &str, style: &OverlayStyle, font: HFONT) {
    let brush = CreateSolidBrush(colorref(style.background));
    FillRect(hdc, rect, brush);
    let _ = DeleteObject(brush.into());

    SetTextColor(hdc, colorref(style.text_color));
    SetBkMode(hdc, TRANSPARENT);

    let old_font = SelectObject(hdc, font.into());
    let mut wide: Vec<u16> = text.encode_utf16().collect();
    let mut bounds = *rect;
    DrawTextW(
        hdc,
        &mut wide,
        &mut bounds,
        DT_CENTER | DT_VCENTER | DT_SINGLELINE,
    );
    SelectObject(hdc, old_font);
}
