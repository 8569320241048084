//! The overlay window.
//!
//! A topmost, 90%-opaque, tool-style popup sized to its label. The current
//! label is kept as the window caption so `WM_PAINT` can redraw it without
//! asking the tracker.

use log::{error, warn};
use scopeguard::{guard, ScopeGuard};
use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{COLORREF, HWND, RECT, SIZE};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, DeleteObject, EndPaint, GetDC, GetTextExtentPoint32W, ReleaseDC, SelectObject,
    HDC, HFONT, PAINTSTRUCT,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyWindow, GetClientRect, GetWindowTextW, RegisterClassW,
    SetLayeredWindowAttributes, SetWindowPos, SetWindowTextW, ShowWindow, CW_USEDEFAULT,
    HWND_TOPMOST, LWA_ALPHA, SWP_NOACTIVATE, SW_HIDE, SW_SHOWNOACTIVATE, WNDCLASSW, WNDPROC,
    WS_EX_LAYERED, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};

use super::drawing::{create_label_font, draw_label};
use crate::app::OverlaySurface;
use crate::error::{Error, Result};
use crate::model::constants::*;
use crate::model::{OverlayLayout, OverlayStyle, Size};
use crate::{from_wide, to_wide};

/// Owns the overlay `HWND` and its font.
pub struct GdiOverlay {
    hwnd: HWND,
    font: HFONT,
    style: OverlayStyle,
    alive: bool,
}

impl GdiOverlay {
    /// Register the window class and create the (hidden) overlay.
    pub fn create(wndproc: WNDPROC, style: OverlayStyle) -> Result<Self> {
        unsafe {
            let instance =
                GetModuleHandleW(None).map_err(|e| Error::OverlayCreation(e.to_string()))?;
            let class_name = to_wide(OVERLAY_CLASS_NAME);

            let wc = WNDCLASSW {
                lpfnWndProc: wndproc,
                hInstance: instance.into(),
                lpszClassName: PCWSTR(class_name.as_ptr()),
                ..Default::default()
            };
            if RegisterClassW(&wc) == 0 {
                return Err(Error::OverlayCreation(
                    "RegisterClassW returned no atom".into(),
                ));
            }

            let hwnd = CreateWindowExW(
                WS_EX_TOPMOST | WS_EX_LAYERED | WS_EX_TOOLWINDOW,
                PCWSTR(class_name.as_ptr()),
                w!(""),
                WS_POPUP,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                INITIAL_SIZE.0,
                INITIAL_SIZE.1,
                None,
                None,
                Some(instance.into()),
                None,
            )
            .map_err(|e| Error::OverlayCreation(e.to_string()))?;

            // Without alpha the window still works, just fully opaque
            if let Err(e) = SetLayeredWindowAttributes(hwnd, COLORREF(0), style.alpha(), LWA_ALPHA)
            {
                warn!("SetLayeredWindowAttributes failed: {}", e);
            }

            let font = create_label_font(&style);
            if font.is_invalid() {
                let _ = DestroyWindow(hwnd);
                return Err(Error::OverlayCreation(format!(
                    "could not create font {} {}px",
                    style.font_face, style.font_height
                )));
            }

            Ok(Self {
                hwnd,
                font,
                style,
                alive: true,
            })
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// `false` once the window has received `WM_DESTROY`.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn mark_destroyed(&mut self) {
        self.alive = false;
    }

    /// `WM_PAINT` handler: redraw whatever the caption currently holds.
    pub fn paint(&self) -> Result<()> {
        unsafe {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(self.hwnd, &mut ps);
            let _end = guard((), |_| {
                let _ = EndPaint(self.hwnd, &ps);
            });
            if hdc.is_invalid() {
                return Err(Error::Drawing("BeginPaint returned no DC".into()));
            }

            let mut rect = RECT::default();
            GetClientRect(self.hwnd, &mut rect).map_err(|e| Error::Drawing(e.to_string()))?;

            draw_label(hdc, &rect, &self.caption(), &self.style, self.font);
            Ok(())
        }
    }

    /// Immediate redraw outside of `WM_PAINT`.
    fn redraw(&self, text: &str) -> Result<()> {
        unsafe {
            let hdc = self.window_dc()?;

            let mut rect = RECT::default();
            GetClientRect(self.hwnd, &mut rect).map_err(|e| Error::Drawing(e.to_string()))?;

            draw_label(*hdc, &rect, text, &self.style, self.font);
            Ok(())
        }
    }

    /// Window DC released when the guard drops.
    unsafe fn window_dc(&self) -> Result<ScopeGuard<HDC, impl FnOnce(HDC) + '_>> {
        let hdc = GetDC(Some(self.hwnd));
        if hdc.is_invalid() {
            return Err(Error::Drawing("GetDC returned no DC".into()));
        }
        Ok(guard(hdc, move |hdc| {
            if ReleaseDC(Some(self.hwnd), hdc) != 1 {
                error!("ReleaseDC({:?}) failed", hdc);
            }
        }))
    }

    fn caption(&self) -> String {
        let mut buf = [0u16; CAPTION_CAPACITY];
        let len = unsafe { GetWindowTextW(self.hwnd, &mut buf) };
        from_wide(&buf[..len.max(0) as usize])
    }

    /// Destroy the window (unless it already is) and release the font.
    pub fn destroy(self) {
        unsafe {
            if self.alive {
                if let Err(e) = DestroyWindow(self.hwnd) {
                    warn!("DestroyWindow failed: {}", e);
                }
            }
            let _ = DeleteObject(self.font.into());
        }
    }
}

impl OverlaySurface for GdiOverlay {
    fn measure(&mut self, text: &str) -> Result<Size> {
        if text.is_empty() {
            return Ok(Size::default());
        }

        unsafe {
            let hdc = self.window_dc()?;
            let old_font = SelectObject(*hdc, self.font.into());

            let wide: Vec<u16> = text.encode_utf16().collect();
            let mut extent = SIZE::default();
            let measured = GetTextExtentPoint32W(*hdc, &wide, &mut extent).as_bool();

            SelectObject(*hdc, old_font);
            if !measured {
                return Err(Error::Drawing("GetTextExtentPoint32W failed".into()));
            }
            Ok(Size::new(extent.cx, extent.cy))
        }
    }

    fn present(&mut self, layout: OverlayLayout, text: &str) -> Result<()> {
        unsafe {
            SetWindowPos(
                self.hwnd,
                Some(HWND_TOPMOST),
                layout.position.x,
                layout.position.y,
                layout.size.width,
                layout.size.height,
                SWP_NOACTIVATE,
            )
            .map_err(|e| Error::Drawing(e.to_string()))?;

            let caption = to_wide(text);
            SetWindowTextW(self.hwnd, PCWSTR(caption.as_ptr()))
                .map_err(|e| Error::Drawing(e.to_string()))?;
        }

        self.redraw(text)
    }

    fn show(&mut self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOWNOACTIVATE);
        }
    }

    fn hide(&mut self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_HIDE);
        }
    }
}
