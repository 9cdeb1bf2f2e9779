use std::path::PathBuf;

use crate::cli::Args;

use super::defaults::*;

/// Runtime settings for the optimization engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Ghostscript executable, either a bare name resolved via PATH or a full path
    pub gs_binary: PathBuf,
    pub compatibility_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gs_binary: PathBuf::from(DEFAULT_GS_BINARY),
            compatibility_level: DEFAULT_COMPATIBILITY_LEVEL.to_string(),
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self::default();
        if let Some(ref gs) = args.gs {
            settings.gs_binary = gs.clone();
        }
        settings
    }
}
