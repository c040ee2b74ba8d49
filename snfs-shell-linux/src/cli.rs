use snfs_shell_core::settings::ShellSettings;

pub const USAGE: &str = "\
Usage: snfs-shell [OPTIONS]

Options:
  --dev         Load the UI from the configured dev server
  --devtools    Open the web inspector on start
  -h, --help    Print this help";

/// Command-line overrides layered over the saved settings for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub dev: bool,
    pub devtools: bool,
    pub help: bool,
}

impl LaunchOptions {
    pub fn parse<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = LaunchOptions::default();
        for arg in args {
            match arg.as_ref() {
                "--dev" => options.dev = true,
                "--devtools" => options.devtools = true,
                "-h" | "--help" => options.help = true,
                other => return Err(format!("unrecognized option '{}'", other)),
            }
        }
        Ok(options)
    }

    /// Settings for this run. Not written back to disk.
    pub fn effective(&self, saved: &ShellSettings) -> ShellSettings {
        let mut settings = saved.clone();
        settings.use_dev_server |= self.dev;
        settings.open_devtools |= self.devtools;
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_is_default() {
        let options = LaunchOptions::parse(Vec::<String>::new()).unwrap();
        assert_eq!(options, LaunchOptions::default());
    }

    #[test]
    fn parses_known_flags() {
        let options = LaunchOptions::parse(["--dev", "--devtools"]).unwrap();
        assert!(options.dev);
        assert!(options.devtools);
        assert!(!options.help);
        assert!(LaunchOptions::parse(["-h"]).unwrap().help);
    }

    #[test]
    fn rejects_unknown_flag() {
        assert_eq!(
            LaunchOptions::parse(["--frame"]),
            Err("unrecognized option '--frame'".to_string())
        );
    }

    #[test]
    fn overrides_do_not_clear_saved_flags() {
        let saved = ShellSettings {
            open_devtools: true,
            ..ShellSettings::default()
        };
        let effective = LaunchOptions::default().effective(&saved);
        assert!(effective.open_devtools);
        assert!(!effective.use_dev_server);

        let effective = LaunchOptions::parse(["--dev"]).unwrap().effective(&saved);
        assert!(effective.use_dev_server);
    }
}
