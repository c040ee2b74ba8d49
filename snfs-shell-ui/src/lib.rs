pub mod assets;

use snfs_shell_core::settings::ShellSettings;

/// Name of the script message handler the bridge posts window commands to.
pub const MESSAGE_HANDLER: &str = "snfs";

/// URI the webview should load: the dev server when enabled, otherwise the
/// extracted bundle.
pub fn ui_uri(settings: &ShellSettings) -> Result<String, String> {
    if settings.use_dev_server {
        return Ok(settings.dev_server_url.clone());
    }
    let ui_dir = assets::ensure_ui_extracted()?;
    Ok(format!("file://{}/index.html", ui_dir.display()))
}
