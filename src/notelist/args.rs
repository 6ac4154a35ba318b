use clap::Parser;
use rowkit::ThemeMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notelist")]
#[command(about = "Preview a list of notes with hashtag highlighting", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding an array of notes
    pub notes: PathBuf,

    /// Mark the note at this position as selected (repeatable)
    #[arg(short, long = "select", value_name = "POSITION")]
    pub select: Vec<usize>,

    /// First position to show
    #[arg(long, default_value_t = 0)]
    pub offset: usize,

    /// Number of rows in the viewport
    #[arg(long, default_value_t = 20)]
    pub rows: usize,

    /// Row width in columns (overrides config)
    #[arg(long)]
    pub width: Option<usize>,

    /// Locale for dates, e.g. en_US or de_DE (overrides config)
    #[arg(long)]
    pub locale: Option<String>,

    /// Show dates at this offset from UTC, in minutes (overrides config)
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<i32>,

    /// Palette: auto, light or dark (overrides config)
    #[arg(long)]
    pub theme: Option<ThemeMode>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Directory holding config.json
    #[arg(long)]
    pub config_dir: Option<PathBuf>,

    /// Log level for stderr diagnostics
    #[arg(long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_selection_and_negative_offset() {
        let cli = Cli::try_parse_from([
            "notelist",
            "notes.json",
            "--select",
            "1",
            "-s",
            "3",
            "--utc-offset",
            "-300",
            "--theme",
            "dark",
        ])
        .unwrap();
        assert_eq!(cli.select, vec![1, 3]);
        assert_eq!(cli.utc_offset, Some(-300));
        assert_eq!(cli.theme, Some(ThemeMode::Dark));
        assert!(!cli.no_color);
    }
}
