use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::error::Error;

/// Configuration file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "PathSum.toml";

/// Largest accepted grid side. The adjacency matrix holds `size^4` cells.
pub const MAX_GRID_SIZE: usize = 64;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GridConfig {
    pub size: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InputConfig {
    pub matrix_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    pub dot_path: PathBuf,
    pub list_paths: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub grid: GridConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Command-line flags take precedence over file and environment values.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.grid_size {
            self.grid.size = size;
        }
        if let Some(input) = &cli.input {
            self.input.matrix_path = input.clone();
        }
        if let Some(dot) = &cli.dot {
            self.output.dot_path = dot.clone();
        }
        if cli.best_only {
            self.output.list_paths = false;
        }
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.grid.size == 0 {
            return Err(Error::ConfigLoadError(
                "grid.size must be at least 1".to_string(),
            ));
        }
        if self.grid.size > MAX_GRID_SIZE {
            return Err(Error::ConfigLoadError(format!(
                "grid.size {} exceeds the maximum of {}",
                self.grid.size, MAX_GRID_SIZE
            )));
        }
        Ok(())
    }
}

/// Loads configuration from built-in defaults, a TOML file and `PATHSUM_*` environment variables.
///
/// An explicitly requested file must exist. Without one, `PathSum.toml` in the
/// working directory is used if present. Nested keys are addressed from the
/// environment with a double underscore, e.g. `PATHSUM_INPUT__MATRIX_PATH`.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, Error> {
    let builder = ConfigLoader::builder()
        .set_default("grid.size", 5)
        .and_then(|b| b.set_default("input.matrix_path", "matrix.txt"))
        .and_then(|b| b.set_default("output.dot_path", "graph.dot"))
        .and_then(|b| b.set_default("output.list_paths", true))
        .map_err(config_error)?;

    let builder = match explicit {
        Some(config_file_path) => {
            if !config_file_path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found at path: {}",
                    config_file_path.display()
                )));
            }
            builder.add_source(File::from(config_file_path).required(true))
        }
        None => builder.add_source(File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
    };

    let s = builder
        .add_source(
            Environment::with_prefix("PATHSUM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(config_error)?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;

    Ok(app_config)
}

fn config_error(e: ConfigError) -> Error {
    Error::ConfigLoadError(e.to_string())
}
