use crate::theme::Theme;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "subscription-filter")]
#[command(about = "Pick categories and sender/keyword filters for Gmail subscriptions", long_about = None)]
pub struct Cli {
    /// Visual theme
    #[arg(long, value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `--verbose`.
    pub fn log_filter(&self) -> EnvFilter {
        let default = if self.verbose { "debug" } else { "info" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["subscription-filter"]).unwrap();
        assert_eq!(cli.theme, Theme::Dark);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_light_theme_and_verbose() {
        let cli = Cli::try_parse_from(["subscription-filter", "--theme", "light", "-v"]).unwrap();
        assert_eq!(cli.theme, Theme::Light);
        assert!(cli.verbose);
    }

    #[test]
    fn test_unknown_theme_rejected() {
        assert!(Cli::try_parse_from(["subscription-filter", "--theme", "sepia"]).is_err());
    }
}
