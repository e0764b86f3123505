//! Command-line configuration
//!
//! Settings the `thale` binary derives from its arguments.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Extension accepted for Thale source files
pub const SOURCE_EXTENSION: &str = "thl";

/// How scanned tokens are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Token: <code>` per line
    #[default]
    Codes,
    /// `<line>:<column>`, kind and lexeme per line
    Detailed,
}

/// When diagnostics are styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Style only when stderr is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            Self::Auto => std::io::stderr().is_terminal(),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("expected a .{} source file, got '{}'", SOURCE_EXTENSION, .path.display())]
    WrongExtension { path: PathBuf },
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub color: ColorMode,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::default(),
            color: ColorMode::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Reject inputs that are not Thale source files
    pub fn validate(&self) -> Result<(), ConfigError> {
        if has_source_extension(&self.input) {
            Ok(())
        } else {
            Err(ConfigError::WrongExtension {
                path: self.input.clone(),
            })
        }
    }

    /// Install the color choice for every diagnostic rendered afterwards
    pub fn apply_color(&self) {
        colored::control::set_override(self.color.enabled());
    }

    /// Name used in error locations
    pub fn display_name(&self) -> String {
        self.input.display().to_string()
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
}
