// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in casement return `error::Result<T>`.  No panics
// in production paths; a host can surface errors as a dialog (see
// `platform::win32::window::show_error_dialog`) or map them to wire status
// codes via `Error::status`.

/// Every error that casement can produce.
#[derive(Debug)]
pub enum Error {
    /// `RegisterClassExW` returned a zero atom.
    RegisterClassFailed {
        /// The raw `GetLastError()` value captured at the failure site.
        code: u32,
    },

    /// `CreateWindowExW` refused to create the window.
    CreateWindowFailed {
        /// The raw Win32 error code or HRESULT reported by the call.
        code: u32,
    },

    /// Any other Win32 call outside the creation sequence failed.
    Win32 {
        /// The name of the failing function, for display purposes.
        function: &'static str,
        /// The raw Win32 error code (`GetLastError()` value) or HRESULT.
        code: u32,
    },
}

impl Error {
    /// The wire status kind for this failure.
    pub fn status(&self) -> Status {
        match self {
            Self::RegisterClassFailed { .. } => Status::RegisterClassFailed,
            Self::CreateWindowFailed { .. } => Status::CreateWindowFailed,
            Self::Win32 { .. } => Status::OtherWin32,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegisterClassFailed { code } => {
                write!(f, "RegisterClassExW failed (error {code:#010x})")
            }
            Self::CreateWindowFailed { code } => {
                write!(f, "CreateWindowExW failed (error {code:#010x})")
            }
            Self::Win32 { function, code } => {
                write!(f, "{function} failed (error {code:#010x})")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

// ── Wire status codes ─────────────────────────────────────────────────────────

/// C-style status code for a window-creation attempt.
///
/// Zero is success; each failure code pins down which OS call rejected the
/// attempt.  `OtherWin32` covers helper failures that are not part of the
/// creation sequence itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Status {
    Ok = 0,
    RegisterClassFailed = 1,
    CreateWindowFailed = 2,
    OtherWin32 = 3,
}

impl Status {
    /// The integer value carried across an FFI-style boundary.
    pub fn code(self) -> i32 {
        self as i32
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_wire_contract() {
        assert_eq!(Status::Ok.code(), 0);
        assert_eq!(Status::RegisterClassFailed.code(), 1);
        assert_eq!(Status::CreateWindowFailed.code(), 2);
        assert_eq!(Status::OtherWin32.code(), 3);
    }

    #[test]
    fn errors_map_to_their_status_kind() {
        let e = Error::RegisterClassFailed { code: 1410 };
        assert_eq!(e.status(), Status::RegisterClassFailed);

        let e = Error::CreateWindowFailed { code: 0x8007_0057 };
        assert_eq!(e.status(), Status::CreateWindowFailed);

        let e = Error::Win32 {
            function: "SetWindowTextW",
            code: 1400,
        };
        assert_eq!(e.status(), Status::OtherWin32);
    }

    #[test]
    fn display_names_the_failing_call() {
        let e = Error::RegisterClassFailed { code: 1410 };
        let text = e.to_string();
        assert!(text.contains("RegisterClassExW"), "got: {text}");
        assert!(text.contains("0x00000582"), "got: {text}");

        let e = Error::Win32 {
            function: "GetMonitorInfoW",
            code: 6,
        };
        assert!(e.to_string().starts_with("GetMonitorInfoW"));
    }
}
