// ── Platform abstraction layer ────────────────────────────────────────────────
//
// This module defines the public interface that hosts use to talk to the OS.
// No `unsafe` lives here; all Win32 FFI is confined to the `win32` sub-module
// and never leaks outward.  On non-Windows targets the whole sub-module is
// compiled out and only the portable parts of the crate remain.

#[cfg(windows)]
pub mod win32;
