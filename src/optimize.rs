//! Top-level run: measure, optimize, measure again, report

use std::io::Write;

use crate::engine::{Directive, OptimizationEngine};
use crate::error::{OptimizeError, SizeSide};
use crate::model::{InvocationRequest, SizeSample};
use crate::report::SizeReport;

/// Execute one optimization request.
///
/// Unless the request is silent, the announcement and the size report are
/// written to `out`, and the size report is also returned. Each step runs at
/// most once; the first failure aborts the run.
pub fn run<E, W>(
    request: &InvocationRequest,
    engine: &E,
    out: &mut W,
) -> Result<Option<SizeReport>, OptimizeError>
where
    E: OptimizationEngine + ?Sized,
    W: Write,
{
    log::debug!("Validated request: {:?}", request);

    let before = if request.silent {
        None
    } else {
        writeln!(
            out,
            "Optimizing {} to {} for {}...",
            request.input_path.display(),
            request.output_path.display(),
            request.profile
        )
        .map_err(OptimizeError::Report)?;

        let sample = SizeSample::capture(&request.input_path, SizeSide::Original)?;
        log::debug!("Original size of {}: {} bytes", sample.path.display(), sample.bytes);
        Some(sample)
    };

    let mut directive = Directive::from(request.profile);
    if let Some(dpi) = request.dpi_override {
        directive = directive.with_image_dpi(dpi);
    }

    if request.in_place {
        engine.optimize_in_place(&directive, &request.input_path)?;
    } else {
        engine.optimize(&directive, &request.input_path, &request.output_path)?;
    }
    log::info!(
        "Optimized {} ({})",
        request.output_path.display(),
        request.profile
    );

    let Some(before) = before else {
        return Ok(None);
    };

    let after = SizeSample::capture(&request.output_path, SizeSide::Optimized)?;
    log::debug!("New size of {}: {} bytes", after.path.display(), after.bytes);

    let report = SizeReport::new(before.bytes, after.bytes);
    writeln!(out, "{}", report).map_err(OptimizeError::Report)?;

    Ok(Some(report))
}
