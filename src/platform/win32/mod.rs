// ── Win32 platform implementation ─────────────────────────────────────────────
//
// This is the only module in the codebase where `unsafe` code is permitted.
// Every `unsafe` block MUST carry a `// SAFETY:` comment that states:
//   • which invariant makes the operation sound, and
//   • what the caller is responsible for maintaining.
//
// Nothing in this module is `pub` beyond what callers genuinely need; keep the
// unsafe surface as small as possible.

#![allow(unsafe_code)]

use windows::Win32::Foundation::GetLastError;

use crate::error::Error;

// ── Sub-modules ───────────────────────────────────────────────────────────────

pub mod fullscreen; // windowed ↔ borderless monitor-rect switching
pub mod window; // class registration + window creation, small HWND helpers

// ── Error helpers ─────────────────────────────────────────────────────────────

/// Capture the current Win32 last-error code and wrap it in an `Error`.
///
/// Call immediately after a Win32 function that signals failure — `GetLastError`
/// reads thread-local state that can be overwritten by any subsequent API call.
pub(crate) fn last_error(function: &'static str) -> Error {
    // SAFETY: GetLastError reads thread-local state set by the last Win32 call.
    // It is always safe to call and never fails.
    let code = unsafe { GetLastError() };
    Error::Win32 {
        function,
        code: code.0,
    }
}

/// Wrap a windows-crate error (HRESULT) so `map_err` can attach the name of
/// the failing function.  Win32 errors appear as 0x8007xxxx HRESULTs.
pub(crate) fn win32_error(function: &'static str, e: windows::core::Error) -> Error {
    // HRESULT.0 is i32; reinterpret bits as u32 for display purposes.
    Error::Win32 {
        function,
        code: e.code().0 as u32,
    }
}
