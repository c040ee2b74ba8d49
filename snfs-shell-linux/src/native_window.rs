use gtk4::prelude::*;
use libadwaita as adw;

use snfs_shell_core::NativeWindow;

/// The shell's toplevel as seen by the window-command receiver.
///
/// Maximize, minimize and close are requests to the compositor; GTK
/// ignores the ones that do not apply.
pub struct GtkNativeWindow {
    window: adw::ApplicationWindow,
}

impl GtkNativeWindow {
    pub fn new(window: &adw::ApplicationWindow) -> Self {
        Self {
            window: window.clone(),
        }
    }
}

impl NativeWindow for GtkNativeWindow {
    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn maximize(&self) {
        self.window.maximize();
    }

    fn unmaximize(&self) {
        self.window.unmaximize();
    }

    fn minimize(&self) {
        self.window.minimize();
    }

    fn close(&self) {
        self.window.close();
    }
}
