use anyhow::{Result, anyhow};
use clap::ValueEnum;
use std::path::PathBuf;

/// Environment variable naming a dataset JSON file
pub const DATA_VAR: &str = "LISTENING_DATA";
/// Environment variable naming the output format
pub const FORMAT_VAR: &str = "LISTENING_FORMAT";

/// How the report is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Configuration loaded from environment variables
#[derive(Debug, Default)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub format: Option<OutputFormat>,
}

/// Load configuration from `.env` and environment
pub fn load_config() -> Result<Config> {
    // Load `.env` file if present
    dotenv::dotenv().ok();
    config_from(|name| std::env::var(name).ok())
}

/// Build configuration from a variable lookup
pub fn config_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let data_path = lookup(DATA_VAR)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from);

    let format = match lookup(FORMAT_VAR) {
        Some(value) if !value.trim().is_empty() => Some(
            OutputFormat::from_str(value.trim(), true)
                .map_err(|e| anyhow!("{FORMAT_VAR}={value} is not a valid format: {e}"))?,
        ),
        _ => None,
    };

    Ok(Config { data_path, format })
}

impl Config {
    /// Resolve the dataset path: CLI > environment > built-in (None)
    pub fn resolve_data_path(&self, cli: Option<PathBuf>) -> Option<PathBuf> {
        cli.or_else(|| self.data_path.clone())
    }

    /// Resolve the output format: CLI > environment > text
    pub fn resolve_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.or(self.format).unwrap_or_default()
    }
}
