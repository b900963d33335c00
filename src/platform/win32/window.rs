// ── Window creation ───────────────────────────────────────────────────────────
//
// Responsibilities in this file (unsafe confined here):
//   • Register the shared window class.
//   • Create the top-level window and return its handle to the caller.
//   • Small HWND helpers: window title, cursor visibility, error dialog.
//
// What deliberately does NOT live here: the window procedure and the message
// loop.  The caller supplies the procedure, pumps its own messages, and owns
// the window from the moment `open_window` returns.  If class registration
// succeeds but window creation fails, the class registration is left in
// place; nothing here unregisters it.

#![allow(unsafe_code)]

use windows::{
    core::{w, PCWSTR},
    Win32::{
        Foundation::{GetLastError, BOOL, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM},
        System::LibraryLoader::GetModuleHandleW,
        UI::WindowsAndMessaging::{
            CreateWindowExW, LoadCursorW, MessageBoxW, RegisterClassExW, SetWindowTextW,
            ShowCursor, IDC_ARROW, MB_ICONERROR, MB_OK, WINDOW_EX_STYLE, WNDCLASSEXW,
            WS_OVERLAPPEDWINDOW, WS_VISIBLE,
        },
    },
};

use super::win32_error;
use crate::error::{Error, Result};

// ── Window identity ───────────────────────────────────────────────────────────

/// Atom name used to register the shared window class.  Fixed: one process,
/// one class, however many times the host asks.
const CLASS_NAME: PCWSTR = w!("CasementWindow");

/// Initial position of the window's top-left corner, in screen pixels.
const INITIAL_X: i32 = 100;
const INITIAL_Y: i32 = 100;

/// The window-procedure signature the OS calls back into.
///
/// The function must stay callable for as long as the class registration
/// lives — for all practical purposes, the rest of the process.
pub type WndProc = unsafe extern "system" fn(HWND, u32, WPARAM, LPARAM) -> LRESULT;

// ── Public API ────────────────────────────────────────────────────────────────

/// Register the window class and create one visible top-level window of the
/// requested size, driven by `wnd_proc`.
///
/// Two OS calls, two failure points: a zero atom from `RegisterClassExW`
/// yields [`Error::RegisterClassFailed`] (window creation is never attempted),
/// and a refused `CreateWindowExW` yields [`Error::CreateWindowFailed`].
/// `width` and `height` are handed to the OS unvalidated; zero or negative
/// values are clamped or rejected by Windows, not by this crate.
///
/// Must be called on the thread that will pump the window's messages.
pub fn open_window(wnd_proc: WndProc, width: i32, height: i32) -> Result<HWND> {
    // Startup benchmark harness — only compiled in debug builds so the
    // variable is never unused in release mode.
    #[cfg(debug_assertions)]
    let t0 = std::time::Instant::now();

    // SAFETY: GetModuleHandleW(None) returns the .exe's own HMODULE, which is
    // always valid for the process lifetime and never fails in practice.
    let hmodule =
        unsafe { GetModuleHandleW(None) }.map_err(|e| win32_error("GetModuleHandleW", e))?;

    // HINSTANCE and HMODULE represent the same underlying value on Windows
    // (guaranteed by the Win32 ABI); the explicit field conversion compiles
    // regardless of whether the two are distinct types.
    let hinstance = HINSTANCE(hmodule.0);

    register_class(hinstance, wnd_proc)?;
    let hwnd = create_window(hinstance, width, height)?;

    // Startup milestone — WS_VISIBLE means the window is now on screen.
    #[cfg(debug_assertions)]
    eprintln!(
        "[casement] window visible in {:.1} ms",
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(hwnd)
}

/// Set the window's title-bar text.
///
/// The window is created untitled; hosts name it afterwards with this.
pub fn set_title(hwnd: HWND, title: &str) -> Result<()> {
    let wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();

    // SAFETY: wide is a valid null-terminated UTF-16 string that remains
    // allocated for the duration of the call.  hwnd must reference a live
    // window — the caller owns that invariant.
    unsafe { SetWindowTextW(hwnd, PCWSTR(wide.as_ptr())) }
        .map_err(|e| win32_error("SetWindowTextW", e))
}

/// Show or hide the mouse cursor for this thread's windows.
pub fn show_cursor(visible: bool) {
    // SAFETY: ShowCursor only adjusts the thread's cursor display counter;
    // it has no preconditions.  The returned counter value is not useful here.
    unsafe {
        let _ = ShowCursor(BOOL::from(visible));
    }
}

/// Show a modal error dialog with the given message.
///
/// Safe to call from any context; performs the UTF-16 conversion internally.
/// Intended for hosts whose `open_window` call failed — the only reliable
/// output path in a GUI process.
pub fn show_error_dialog(message: &str) {
    let msg_wide: Vec<u16> = message.encode_utf16().chain(std::iter::once(0)).collect();

    // SAFETY: msg_wide is a valid null-terminated UTF-16 string that remains
    // allocated for the duration of the MessageBoxW call.  HWND::default()
    // (null) means the dialog has no owner window.  Return value (button
    // pressed) is intentionally unused for an error dialog.
    unsafe {
        let _ = MessageBoxW(
            HWND::default(),
            PCWSTR(msg_wide.as_ptr()),
            w!("Casement - Fatal Error"),
            MB_OK | MB_ICONERROR,
        );
    }
}

// ── Window class registration ─────────────────────────────────────────────────

fn register_class(hinstance: HINSTANCE, wnd_proc: WndProc) -> Result<()> {
    // SAFETY: LoadCursorW with IDC_ARROW always succeeds; the arrow cursor is
    // a built-in resource guaranteed to exist on all Windows versions.
    let cursor = unsafe { LoadCursorW(None, IDC_ARROW) }.map_err(|e| win32_error("LoadCursorW", e))?;

    // Class name, callback, arrow cursor — everything else stays zeroed, the
    // same descriptor shape a plain C registration would use.
    let wndclass = WNDCLASSEXW {
        // WNDCLASSEXW is ~72 bytes; the cast to u32 is always lossless.
        cbSize: std::mem::size_of::<WNDCLASSEXW>() as u32,
        lpfnWndProc: Some(wnd_proc),
        hInstance: hinstance,
        hCursor: cursor,
        lpszClassName: CLASS_NAME,
        ..Default::default()
    };

    // SAFETY: wndclass is fully initialised with valid handles; CLASS_NAME is
    // a valid null-terminated UTF-16 string literal.
    let atom = unsafe { RegisterClassExW(&wndclass) };
    if atom == 0 {
        // SAFETY: GetLastError reads the thread-local code RegisterClassExW
        // just set; nothing else has run on this thread in between.
        let code = unsafe { GetLastError() };
        return Err(Error::RegisterClassFailed { code: code.0 });
    }

    Ok(())
}

// ── Window creation ───────────────────────────────────────────────────────────

fn create_window(hinstance: HINSTANCE, width: i32, height: i32) -> Result<HWND> {
    // SAFETY: CLASS_NAME has been registered on this thread; hinstance is the
    // exe's module.  None for parent and menu creates a plain top-level
    // window; None for lpParam means no creation data.  A null window name
    // leaves the title empty — hosts call set_title afterwards.
    unsafe {
        CreateWindowExW(
            WINDOW_EX_STYLE(0),
            CLASS_NAME,
            PCWSTR::null(),
            WS_OVERLAPPEDWINDOW | WS_VISIBLE,
            INITIAL_X,
            INITIAL_Y,
            width,
            height,
            None,
            None,
            hinstance,
            None,
        )
    }
    .map_err(|e| Error::CreateWindowFailed {
        code: e.code().0 as u32,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::UI::WindowsAndMessaging::{DefWindowProcW, DestroyWindow};

    unsafe extern "system" fn test_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        DefWindowProcW(hwnd, msg, wparam, lparam)
    }

    const ERROR_CLASS_ALREADY_EXISTS: u32 = 1410;

    /// The class name is fixed and the registration is process-wide, so every
    /// property that touches the real class registry runs in one ordered
    /// sequence rather than racing across parallel test threads.
    #[test]
    fn creation_sequence() {
        // Before anything has registered the class, the creation step alone
        // fails: CreateWindowExW rejects the unknown class name.  This is the
        // "registration succeeded elsewhere, creation refused" failure arm.
        // SAFETY: see open_window — the exe's own module handle.
        let hmodule = unsafe { GetModuleHandleW(None) }.expect("GetModuleHandleW");
        let hinstance = HINSTANCE(hmodule.0);
        match create_window(hinstance, 640, 480) {
            Err(Error::CreateWindowFailed { code }) => {
                assert_ne!(code, 0, "a failing create carries the OS error code");
            }
            other => panic!("expected CreateWindowFailed, got {other:?}"),
        }

        // Valid callback, positive size: OK and a non-null handle.
        let hwnd = open_window(test_proc, 640, 480).expect("first open_window");
        assert!(!hwnd.0.is_null());

        // Retitle through the safe helper; creation leaves the title empty.
        set_title(hwnd, "casement test").expect("set_title");

        // Same fixed class name again: the OS rejects the re-registration
        // and no second window is created.
        match open_window(test_proc, 640, 480) {
            Err(Error::RegisterClassFailed { code }) => {
                assert_eq!(code, ERROR_CLASS_ALREADY_EXISTS);
            }
            other => panic!("expected RegisterClassFailed, got {other:?}"),
        }

        // Zero width/height is passed through, not rejected locally.  The
        // class already exists, so drive the creation step directly.
        let tiny = create_window(hinstance, 0, 0).expect("zero-size create");
        assert!(!tiny.0.is_null());

        // SAFETY: both handles were just created on this thread and have not
        // been destroyed; results are irrelevant during teardown.
        unsafe {
            let _ = DestroyWindow(tiny);
            let _ = DestroyWindow(hwnd);
        }
    }
}
