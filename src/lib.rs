//! Casement opens one top-level Win32 window and hands the handle back.
//!
//! The crate deliberately stops there: the caller supplies the window
//! procedure, runs its own message loop, and owns the window from the moment
//! [`open_window`] returns. A few small helpers from the same layer ride
//! along because every host ends up wanting them: window title, cursor
//! visibility, fullscreen toggling, and remembered window placement.

// ── Safety policy ────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere except `platform::win32` — the one
// module that talks to the Win32 API directly.  Each unsafe block in that
// module MUST carry a `// SAFETY:` comment.
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod platform;

pub use error::{Error, Result, Status};

#[cfg(windows)]
pub use platform::win32::{
    fullscreen::Fullscreen,
    window::{open_window, set_title, show_cursor, show_error_dialog, WndProc},
};
