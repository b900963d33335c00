// ── Fullscreen toggling ───────────────────────────────────────────────────────
//
// Switches a window between its normal overlapped style and a borderless
// rect covering the monitor it sits on.  The windowed placement is saved on
// the way in and restored on the way out; the cursor is hidden while
// fullscreen, matching what a game host expects.

#![allow(unsafe_code)]

use windows::Win32::{
    Foundation::HWND,
    Graphics::Gdi::{GetMonitorInfoW, MonitorFromWindow, MONITORINFO, MONITOR_DEFAULTTOPRIMARY},
    UI::WindowsAndMessaging::{
        GetWindowLongW, GetWindowPlacement, SetWindowLongW, SetWindowPlacement, SetWindowPos,
        GWL_STYLE, SWP_FRAMECHANGED, SWP_NOMOVE, SWP_NOOWNERZORDER, SWP_NOSIZE, SWP_NOZORDER,
        WINDOWPLACEMENT, WINDOW_STYLE, WS_OVERLAPPEDWINDOW,
    },
};

use super::{last_error, win32_error, window::show_cursor};
use crate::error::Result;

/// Remembered windowed-mode placement for one window.
///
/// Hold one of these per window you intend to toggle; the first toggle must
/// happen while the window is windowed (which is how `open_window` leaves
/// it), so there is always a placement to restore.
#[derive(Default)]
pub struct Fullscreen {
    restore: WINDOWPLACEMENT,
}

impl Fullscreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `hwnd` currently carries any of the overlapped-window style
    /// bits, i.e. it is in windowed mode.
    pub fn is_windowed(hwnd: HWND) -> bool {
        (current_style(hwnd) & WS_OVERLAPPEDWINDOW) != WINDOW_STYLE(0)
    }

    /// Flip `hwnd` between windowed and borderless fullscreen.
    pub fn toggle(&mut self, hwnd: HWND) -> Result<()> {
        if Self::is_windowed(hwnd) {
            self.enter(hwnd)
        } else {
            self.leave(hwnd)
        }
    }

    fn enter(&mut self, hwnd: HWND) -> Result<()> {
        let style = current_style(hwnd);

        self.restore.length = std::mem::size_of::<WINDOWPLACEMENT>() as u32;
        // SAFETY: hwnd references a live window (caller invariant) and
        // self.restore is a properly sized WINDOWPLACEMENT.
        unsafe { GetWindowPlacement(hwnd, &mut self.restore) }
            .map_err(|e| win32_error("GetWindowPlacement", e))?;

        // SAFETY: MonitorFromWindow with DEFAULTTOPRIMARY never returns a
        // null monitor handle.
        let monitor = unsafe { MonitorFromWindow(hwnd, MONITOR_DEFAULTTOPRIMARY) };
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        // SAFETY: monitor is valid and info.cbSize is set, as the API requires.
        if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
            return Err(last_error("GetMonitorInfoW"));
        }

        // SAFETY: hwnd is live; stripping style bits and repositioning are
        // plain window-management calls with no memory-safety obligations.
        unsafe {
            let _ = SetWindowLongW(hwnd, GWL_STYLE, (style & !WS_OVERLAPPEDWINDOW).0 as i32);
            SetWindowPos(
                hwnd,
                None,
                info.rcMonitor.left,
                info.rcMonitor.top,
                info.rcMonitor.right - info.rcMonitor.left,
                info.rcMonitor.bottom - info.rcMonitor.top,
                SWP_NOOWNERZORDER | SWP_FRAMECHANGED,
            )
            .map_err(|e| win32_error("SetWindowPos", e))?;
        }

        show_cursor(false);
        Ok(())
    }

    fn leave(&mut self, hwnd: HWND) -> Result<()> {
        let style = current_style(hwnd);

        // SAFETY: hwnd is live; self.restore holds the placement captured by
        // enter().  The zero-size SetWindowPos only forces a frame refresh
        // (NOMOVE | NOSIZE), the real geometry comes from the placement.
        unsafe {
            let _ = SetWindowLongW(hwnd, GWL_STYLE, (style | WS_OVERLAPPEDWINDOW).0 as i32);
            SetWindowPlacement(hwnd, &self.restore)
                .map_err(|e| win32_error("SetWindowPlacement", e))?;
            SetWindowPos(
                hwnd,
                None,
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOOWNERZORDER | SWP_FRAMECHANGED,
            )
            .map_err(|e| win32_error("SetWindowPos", e))?;
        }

        show_cursor(true);
        Ok(())
    }
}

/// The window's current style bits.
fn current_style(hwnd: HWND) -> WINDOW_STYLE {
    // SAFETY: hwnd references a live window; GWL_STYLE is always a valid index.
    WINDOW_STYLE(unsafe { GetWindowLongW(hwnd, GWL_STYLE) } as u32)
}
