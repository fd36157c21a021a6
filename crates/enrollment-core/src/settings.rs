use clap::Parser;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// School enrollment statistics for the Calgary high school dataset
#[derive(Parser, Debug, Clone)]
#[command(
    name = "school-stats",
    about = "School enrollment statistics for the Calgary high school dataset",
    version
)]
pub struct Settings {
    /// School name or code; skips the prompt when it matches a school
    #[arg(long)]
    pub school: Option<String>,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::load_from_args(std::env::args_os())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut settings = Settings::parse_from(args);
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
