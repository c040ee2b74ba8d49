use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shell settings, persisted to `~/.config/snfs/shell.json`.
///
/// `#[serde(default)]` fills in any field missing from an older file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    // ── Window ───────────────────────────────────────────────────────────
    pub window_width: i32,
    pub window_height: i32,
    pub frameless: bool,
    pub remember_window_size: bool,

    // ── UI source ────────────────────────────────────────────────────────
    pub use_dev_server: bool,
    pub dev_server_url: String,
    pub open_devtools: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        ShellSettings {
            window_width: 800,
            window_height: 600,
            frameless: true,
            remember_window_size: true,

            use_dev_server: false,
            dev_server_url: String::from("http://localhost:3000"),
            open_devtools: false,
        }
    }
}

impl ShellSettings {
    /// Minimum size a remembered window is restored at.
    pub const MIN_WIDTH: i32 = 480;
    pub const MIN_HEIGHT: i32 = 320;

    /// Record the window size on close, clamped to the minimum.
    pub fn remember_size(&mut self, width: i32, height: i32) {
        if !self.remember_window_size {
            return;
        }
        self.window_width = width.max(Self::MIN_WIDTH);
        self.window_height = height.max(Self::MIN_HEIGHT);
    }

    fn clamped(mut self) -> Self {
        self.window_width = self.window_width.max(Self::MIN_WIDTH);
        self.window_height = self.window_height.max(Self::MIN_HEIGHT);
        self
    }
}

fn settings_path() -> PathBuf {
    let config_dir = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        PathBuf::from(home).join(".config")
    });
    config_dir.join("snfs").join("shell.json")
}

pub fn load() -> ShellSettings {
    load_from(&settings_path())
}

pub fn save(settings: &ShellSettings) {
    if let Err(e) = save_to(&settings_path(), settings) {
        log::warn!("Failed to save shell settings: {}", e);
    }
}

/// Missing or unreadable files yield defaults. Window sizes are clamped to
/// the minimum.
pub fn load_from(path: &Path) -> ShellSettings {
    let settings = match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed settings in {:?}: {}", path, e);
            ShellSettings::default()
        }),
        Err(_) => ShellSettings::default(),
    };
    settings.clamped()
}

pub fn save_to(path: &Path, settings: &ShellSettings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {:?}: {}", parent, e))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {:?}: {}", path, e))
}
