use crate::console::OutputFormat;
use crate::error::DemoError;
use tracing::Level;

/// Runtime settings for the demonstration binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: Level,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Build settings from the command line and environment.
    ///
    /// The first argument selects the log level, falling back to
    /// `STOCKDEMO_LOG`. `STOCKDEMO_FORMAT` selects the output format.
    /// A `.env` file is read if present.
    pub fn load(args: &[String]) -> Result<Self, DemoError> {
        dotenv::dotenv().ok();
        let log_env = dotenv::var("STOCKDEMO_LOG").ok();
        let format_env = dotenv::var("STOCKDEMO_FORMAT").ok();
        Self::resolve(args, log_env.as_deref(), format_env.as_deref())
    }

    fn resolve(
        args: &[String],
        log_env: Option<&str>,
        format_env: Option<&str>,
    ) -> Result<Self, DemoError> {
        let mut settings = Settings::default();

        // The argument is lenient like the original binary; the env var is not.
        if args.len() >= 2 {
            settings.log_level = level_from_arg(&args[1]);
        } else if let Some(value) = log_env {
            settings.log_level = parse_level(value)?;
        }

        if let Some(value) = format_env {
            settings.format = value.parse()?;
        }

        Ok(settings)
    }
}

fn level_from_arg(arg: &str) -> Level {
    match arg {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

fn parse_level(value: &str) -> Result<Level, DemoError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(DemoError::InvalidLogLevel {
            value: value.to_string(),
        }),
    }
}
