// ── Window preferences ────────────────────────────────────────────────────────
//
// Reads and writes `%APPDATA%\<app>\window.json`: the last window position,
// size, and fullscreen state, so a host can reopen its window where the user
// left it.  No `unsafe` — pure safe Rust + serde_json.

use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

// ── On-disk type ──────────────────────────────────────────────────────────────

/// Remembered window placement for the next launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub version: u32,
    /// Screen position of the window's top-left corner, in pixels.
    pub x: i32,
    pub y: i32,
    /// Requested frame size, in pixels.  Passed to the OS as-is.
    pub width: i32,
    pub height: i32,
    #[serde(default)] // backward-compat: old files without this field parse as false
    pub fullscreen: bool,
}

// ── Format version ────────────────────────────────────────────────────────────

const CONFIG_VERSION: u32 = 1;

impl Default for WindowConfig {
    /// The same initial placement `open_window` uses: (100, 100), 800×800,
    /// windowed.
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            x: 100,
            y: 100,
            width: 800,
            height: 800,
            fullscreen: false,
        }
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// Return the path to the preferences file: `%APPDATA%\<app>\window.json`.
///
/// Returns `None` if the `APPDATA` environment variable is not set.
pub fn config_path(app: &str) -> Option<PathBuf> {
    let appdata = std::env::var_os("APPDATA")?;
    let mut p = PathBuf::from(appdata);
    p.push(app);
    p.push("window.json");
    Some(p)
}

// ── Save ──────────────────────────────────────────────────────────────────────

/// Write the preferences to `%APPDATA%\<app>\window.json`.
///
/// Creates the `<app>` directory if it does not exist.  Hosts typically
/// discard any returned error — losing a remembered placement is harmless.
pub fn save(app: &str, cfg: &WindowConfig) -> io::Result<()> {
    let path = config_path(app)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "APPDATA not set"))?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let file = fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, cfg).map_err(io::Error::other)
}

// ── Load ──────────────────────────────────────────────────────────────────────

/// Read and parse the preferences file.
///
/// Returns `None` on any error: file missing, JSON parse failure, or an
/// unrecognised version number.  The host falls back to `Default`.
pub fn load(app: &str) -> Option<WindowConfig> {
    let path = config_path(app)?;
    let data = fs::read(&path).ok()?;
    let cfg: WindowConfig = serde_json::from_slice(&data).ok()?;
    if cfg.version != CONFIG_VERSION {
        return None;
    }
    Some(cfg)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let cfg = WindowConfig {
            version: CONFIG_VERSION,
            x: -8,
            y: 32,
            width: 1280,
            height: 720,
            fullscreen: true,
        };
        let json = serde_json::to_string(&cfg).expect("serialize");
        let cfg2: WindowConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(cfg2, cfg);
    }

    /// Files written before the fullscreen flag existed have no such field.
    /// `#[serde(default)]` must make them parse as `fullscreen = false`.
    #[test]
    fn fullscreen_defaults_to_false_when_absent() {
        let json = r#"{"version":1,"x":100,"y":100,"width":800,"height":800}"#;
        let cfg: WindowConfig = serde_json::from_str(json).expect("deserialize old format");
        assert!(!cfg.fullscreen, "missing fullscreen should default to false");
    }

    /// A file with an unrecognised version number must be rejected by
    /// `load()`.  Test the parse-and-check logic directly.
    #[test]
    fn wrong_version_is_rejected() {
        let cfg = WindowConfig {
            version: 99,
            ..WindowConfig::default()
        };
        let json = serde_json::to_string(&cfg).expect("serialize");
        let parsed: WindowConfig = serde_json::from_str(&json).expect("deserialize");
        // load() would return None for this version; assert the condition directly.
        assert_ne!(parsed.version, CONFIG_VERSION);
    }

    #[test]
    fn defaults_match_the_creation_constants() {
        let cfg = WindowConfig::default();
        assert_eq!((cfg.x, cfg.y), (100, 100));
        assert_eq!((cfg.width, cfg.height), (800, 800));
        assert!(!cfg.fullscreen);
        assert_eq!(cfg.version, CONFIG_VERSION);
    }
}
