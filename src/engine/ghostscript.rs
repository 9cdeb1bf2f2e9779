//! Ghostscript-backed engine
//!
//! Runs the `pdfwrite` device with `-dPDFSETTINGS=/<profile>`:
//!
//! ```bash
//! $ gs -sDEVICE=pdfwrite -dCompatibilityLevel=1.4 -dPDFSETTINGS=/screen -dNOPAUSE -dQUIET -dBATCH -sOutputFile=out.pdf in.pdf
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::defaults::IN_PLACE_TEMP_SUFFIX;
use crate::config::Settings;
use crate::error::EngineError;

use super::{Directive, OptimizationEngine};

#[derive(Debug, Clone)]
pub struct Ghostscript {
    settings: Settings,
}

impl Ghostscript {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Full argument list for one invocation, excluding the binary itself
    pub fn build_args(&self, directive: &Directive, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-sDEVICE=pdfwrite".into(),
            format!("-dCompatibilityLevel={}", self.settings.compatibility_level).into(),
            format!("-dPDFSETTINGS=/{}", directive.profile().name()).into(),
            "-dNOPAUSE".into(),
            "-dQUIET".into(),
            "-dBATCH".into(),
        ];

        if let Some(dpi) = directive.image_dpi() {
            for kind in ["Color", "Gray", "Mono"] {
                args.push(format!("-dDownsample{}Images=true", kind).into());
                args.push(format!("-d{}ImageResolution={}", kind, dpi).into());
            }
        }

        let mut output_arg = OsString::from("-sOutputFile=");
        output_arg.push(output);
        args.push(output_arg);
        args.push(input.into());
        args
    }

    fn binary_name(&self) -> String {
        self.settings.gs_binary.display().to_string()
    }

    fn run(&self, directive: &Directive, input: &Path, output: &Path) -> Result<(), EngineError> {
        let args = self.build_args(directive, input, output);
        log::debug!(
            "Running {} {}",
            self.binary_name(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let result = Command::new(&self.settings.gs_binary)
            .args(&args)
            .output()
            .map_err(|source| EngineError::Spawn {
                binary: self.binary_name(),
                source,
            })?;

        if result.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&result.stderr).trim().to_string();
        log::warn!("{} reported: {}", self.binary_name(), stderr);
        Err(EngineError::Failed {
            binary: self.binary_name(),
            code: result
                .status
                .code()
                .map_or_else(|| "unknown".to_string(), |c| c.to_string()),
            stderr,
        })
    }
}

/// Scratch path next to `path` that the in-place run writes first
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(IN_PLACE_TEMP_SUFFIX);
    PathBuf::from(name)
}

impl OptimizationEngine for Ghostscript {
    fn optimize(
        &self,
        directive: &Directive,
        input: &Path,
        output: &Path,
    ) -> Result<(), EngineError> {
        self.run(directive, input, output)
    }

    fn optimize_in_place(&self, directive: &Directive, path: &Path) -> Result<(), EngineError> {
        let scratch = temp_path(path);

        if let Err(e) = self.run(directive, path, &scratch) {
            if scratch.exists() {
                if let Err(cleanup) = fs::remove_file(&scratch) {
                    log::warn!("Failed to remove {}: {}", scratch.display(), cleanup);
                }
            }
            return Err(e);
        }

        fs::rename(&scratch, path)?;
        Ok(())
    }
}
