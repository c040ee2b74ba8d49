use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4::prelude::*;
use libadwaita as adw;
use libadwaita::prelude::*;
use webkit6::prelude::*;

use snfs_shell_core::settings;
use snfs_shell_core::{local_host, LocalHost, WindowCommandReceiver, WindowCommandSender};

use crate::cli::LaunchOptions;
use crate::native_window::GtkNativeWindow;

type SharedReceiver = Rc<RefCell<WindowCommandReceiver<GtkNativeWindow>>>;

/// How often shortcut commands queued on the local host are handed to the receiver.
const INBOX_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Height of the native grab strip above the webview in frameless mode.
const DRAG_STRIP_HEIGHT: i32 = 8;

pub fn build_window(app: &adw::Application, options: &LaunchOptions) {
    let saved = Rc::new(RefCell::new(settings::load()));
    let effective = options.effective(&saved.borrow());

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("SNFS")
        .default_width(effective.window_width)
        .default_height(effective.window_height)
        .decorated(!effective.frameless)
        .build();

    // Script message handler for the web UI's traffic lights
    let user_content_manager = webkit6::UserContentManager::new();

    let webview = webkit6::WebView::builder()
        .user_content_manager(&user_content_manager)
        .hexpand(true)
        .vexpand(true)
        .build();

    let bg_rgba = gtk4::gdk::RGBA::new(0.09, 0.09, 0.12, 1.0);
    webview.set_background_color(&bg_rgba);

    if let Some(wk_settings) = webkit6::prelude::WebViewExt::settings(&webview) {
        wk_settings.set_enable_javascript(true);
        wk_settings.set_enable_developer_extras(effective.open_devtools);
    }

    let receiver: SharedReceiver = Rc::new(RefCell::new(WindowCommandReceiver::new(
        GtkNativeWindow::new(&window),
    )));

    user_content_manager.register_script_message_handler(snfs_shell_ui::MESSAGE_HANDLER, None);
    {
        let receiver = receiver.clone();
        user_content_manager.connect_script_message_received(
            Some(snfs_shell_ui::MESSAGE_HANDLER),
            move |_ucm, value| {
                let body = value.to_str().to_string();
                receiver.borrow_mut().handle_message(&body);
            },
        );
    }

    // Native shortcuts go through the same command path as the web UI
    let (host, inbox) = local_host();
    install_window_shortcuts(&window, Rc::new(WindowCommandSender::new(host)));
    {
        let receiver = receiver.clone();
        gtk4::glib::timeout_add_local(INBOX_POLL_INTERVAL, move || {
            let mut receiver = receiver.borrow_mut();
            for body in inbox.drain() {
                receiver.handle_message(&body);
            }
            if receiver.is_attached() {
                gtk4::glib::ControlFlow::Continue
            } else {
                // Dropping the inbox makes later shortcut sends unavailable.
                gtk4::glib::ControlFlow::Break
            }
        });
    }

    // Persist window size on close
    {
        let saved = saved.clone();
        window.connect_close_request(move |window| {
            let mut s = saved.borrow_mut();
            if !window.is_maximized() {
                s.remember_size(window.width(), window.height());
            }
            settings::save(&s);
            gtk4::glib::Propagation::Proceed
        });
    }

    match snfs_shell_ui::ui_uri(&effective) {
        Ok(uri) => {
            log::info!("Loading shell UI from {}", uri);
            webview.load_uri(&uri);
        }
        Err(e) => {
            log::error!("Failed to prepare shell UI: {}", e);
            let error_html = format!(
                "<html><body style='background:#17181e;color:#d8dae5;font-family:sans-serif;padding:2em'>\
                 <h3>Shell UI failed to load</h3><p>{}</p></body></html>",
                e
            );
            webview.load_html(&error_html, None);
        }
    }

    let content = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    if effective.frameless {
        // WebKitGTK has no CSS drag regions, so moving the window needs a native handle.
        let strip = gtk4::Box::new(gtk4::Orientation::Horizontal, 0);
        strip.set_height_request(DRAG_STRIP_HEIGHT);
        let handle = gtk4::WindowHandle::new();
        handle.set_child(Some(&strip));
        content.append(&handle);
    }
    content.append(&webview);
    window.set_content(Some(&content));
    window.present();

    if effective.open_devtools {
        if let Some(inspector) = webview.inspector() {
            inspector.show();
        }
    }
}

/// Ctrl+W close, Ctrl+M minimize, F11 / Super+Up maximize toggle.
///
/// Capture phase, so the focused WebView does not swallow them first.
fn install_window_shortcuts(
    window: &adw::ApplicationWindow,
    sender: Rc<WindowCommandSender<LocalHost>>,
) {
    let controller = gtk4::ShortcutController::new();
    controller.set_propagation_phase(gtk4::PropagationPhase::Capture);

    {
        let sender = sender.clone();
        add_shortcut(&controller, "<Control>w", move || sender.close());
    }
    {
        let sender = sender.clone();
        add_shortcut(&controller, "<Control>m", move || sender.minimize());
    }
    add_shortcut(&controller, "F11|<Super>Up", move || sender.maximize());

    window.add_controller(controller);
}

fn add_shortcut(controller: &gtk4::ShortcutController, accel: &str, callback: impl Fn() + 'static) {
    let trigger = gtk4::ShortcutTrigger::parse_string(accel);
    let action = gtk4::CallbackAction::new(move |_widget, _args| {
        callback();
        gtk4::glib::Propagation::Stop
    });
    match trigger {
        Some(trigger) => {
            let shortcut = gtk4::Shortcut::new(Some(trigger), Some(action));
            controller.add_shortcut(shortcut);
        }
        None => log::warn!("Invalid shortcut trigger: {}", accel),
    }
}
