//! Color mode configuration for reports.

use clap::ValueEnum;
use std::io::{IsTerminal, stdout};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    /// Whether console output should be colored right now.
    #[must_use]
    pub fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => stdout().is_terminal(),
        }
    }
}
