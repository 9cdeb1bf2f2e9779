use std::ffi::OsStr;
use std::fs;
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use crate::error::{OptimizeError, SizeSide};

use super::profile::Profile;

/// Fully resolved plan for a single run; built once and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub profile: Profile,
    /// Image resolution override; `None` keeps the profile's own DPI policy
    pub dpi_override: Option<NonZeroU32>,
    pub in_place: bool,
    pub silent: bool,
}

impl InvocationRequest {
    /// Build a request, rejecting an explicit output combined with in-place mode
    pub fn new(
        input_path: PathBuf,
        explicit_output: Option<PathBuf>,
        profile: Profile,
        dpi: i32,
        in_place: bool,
        silent: bool,
    ) -> Result<Self, OptimizeError> {
        if in_place && explicit_output.is_some() {
            return Err(OptimizeError::invalid(
                "output argument not allowed with --inplace flag",
            ));
        }

        let output_path =
            resolve_output_path(&input_path, explicit_output.as_deref(), in_place, profile);

        Ok(Self {
            input_path,
            output_path,
            profile,
            dpi_override: positive_dpi(dpi),
            in_place,
            silent,
        })
    }
}

/// Map the raw `--dpi` value to an override; zero and negatives mean "unset"
pub fn positive_dpi(dpi: i32) -> Option<NonZeroU32> {
    u32::try_from(dpi).ok().and_then(NonZeroU32::new)
}

/// Derive the destination path for an optimization run.
///
/// An explicit output wins, in-place mode reuses the input, and otherwise
/// the name is generated as `<input without .pdf>.<profile>.pdf`.
pub fn resolve_output_path(
    input: &Path,
    explicit_output: Option<&Path>,
    in_place: bool,
    profile: Profile,
) -> PathBuf {
    if let Some(output) = explicit_output {
        return output.to_path_buf();
    }
    if in_place {
        return input.to_path_buf();
    }

    let raw = input.as_os_str();
    let mut name = match raw.as_encoded_bytes().strip_suffix(b".pdf") {
        // SAFETY: the bytes come from an OsStr and are split right before
        // the ASCII ".pdf" suffix, which is a valid UTF-8 boundary.
        Some(stem) => unsafe { OsStr::from_encoded_bytes_unchecked(stem) }.to_owned(),
        None => raw.to_owned(),
    };
    name.push(format!(".{}.pdf", profile.name()));
    PathBuf::from(name)
}

/// File size captured at one point of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSample {
    pub path: PathBuf,
    pub bytes: u64,
}

impl SizeSample {
    pub fn capture(path: &Path, side: SizeSide) -> Result<Self, OptimizeError> {
        let metadata = fs::metadata(path).map_err(|source| OptimizeError::ReadSize {
            side,
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            bytes: metadata.len(),
        })
    }
}
