use fs2::FileExt;
use include_dir::{include_dir, Dir};
use std::path::{Path, PathBuf};

pub const INDEX_HTML: &str = include_str!("../web/index.html");
pub const BRIDGE_JS: &str = include_str!("../web/bridge.js");
pub const SHELL_CSS: &str = include_str!("../web/shell.css");

pub const UI_VERSION: &str = env!("CARGO_PKG_VERSION");

static WEB_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/web");

/// Ensure the bundled UI is extracted to the local data directory.
///
/// Returns the extraction directory
/// (e.g. `~/.local/share/snfs/shell-ui/0.1.0/` on Linux).
pub fn ensure_ui_extracted() -> Result<PathBuf, String> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| "Cannot determine data home directory".to_string())?;
    extract_into(&data_dir.join("snfs").join("shell-ui"))
}

/// Extract the bundled UI under `root/<version>/`.
///
/// The web files are rewritten on every launch; only the directory setup
/// is skipped once the version marker matches.
pub fn extract_into(root: &Path) -> Result<PathBuf, String> {
    let ui_dir = root.join(UI_VERSION);

    std::fs::create_dir_all(root)
        .map_err(|e| format!("Failed to create UI directory: {}", e))?;
    let lock_file = std::fs::File::create(root.join(".extract.lock"))
        .map_err(|e| format!("Failed to create lock file: {}", e))?;
    lock_file
        .lock_exclusive()
        .map_err(|e| format!("Failed to acquire extraction lock: {}", e))?;

    let marker = ui_dir.join(".complete");
    if marker.is_file() {
        if let Ok(version) = std::fs::read_to_string(&marker) {
            if version.trim() == UI_VERSION {
                // Web files may change between builds of the same version.
                extract_dir_recursive(&WEB_DIR, &ui_dir)?;
                return Ok(ui_dir);
            }
        }
        log::info!("Shell UI marker mismatch, re-extracting...");
        let _ = std::fs::remove_dir_all(&ui_dir);
    }

    log::info!("Extracting shell UI v{} to {:?}", UI_VERSION, ui_dir);

    std::fs::create_dir_all(&ui_dir)
        .map_err(|e| format!("Failed to create UI directory: {}", e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = std::fs::set_permissions(&ui_dir, std::fs::Permissions::from_mode(0o700));
    }

    extract_dir_recursive(&WEB_DIR, &ui_dir)?;

    // Marker last: a half-finished extraction is retried next launch.
    std::fs::write(&marker, UI_VERSION)
        .map_err(|e| format!("Failed to write completion marker: {}", e))?;

    Ok(ui_dir)
}

fn extract_dir_recursive(dir: &Dir<'_>, target: &Path) -> Result<(), String> {
    for file in dir.files() {
        let path = target.join(file.path());
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {:?}: {}", parent, e))?;
        }
        std::fs::write(&path, file.contents())
            .map_err(|e| format!("Failed to write {:?}: {}", path, e))?;
    }
    for subdir in dir.dirs() {
        extract_dir_recursive(subdir, target)?;
    }
    Ok(())
}
