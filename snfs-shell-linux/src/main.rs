mod cli;
mod native_window;
mod window;

use libadwaita as adw;
use libadwaita::prelude::*;

use crate::cli::LaunchOptions;

const APP_ID: &str = "dev.snfs.Shell";

fn main() -> gtk4::glib::ExitCode {
    env_logger::init();

    let options = match LaunchOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("snfs-shell: {}\n\n{}", e, cli::USAGE);
            return gtk4::glib::ExitCode::FAILURE;
        }
    };
    if options.help {
        println!("{}", cli::USAGE);
        return gtk4::glib::ExitCode::SUCCESS;
    }

    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_startup(|_app| {
        adw::StyleManager::default().set_color_scheme(adw::ColorScheme::ForceDark);
    });

    app.connect_activate(move |app| {
        window::build_window(app, &options);
    });

    // Our flags were consumed above; GTK only sees argv[0].
    let argv0: Vec<String> = std::env::args().take(1).collect();
    app.run_with_args(&argv0)
}
