use anyhow::Result;
use clap::Parser;
use std::io;

use pdfoptimize::cli::Args;
use pdfoptimize::config::Settings;
use pdfoptimize::engine::Ghostscript;
use pdfoptimize::optimize::run;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // All validation happens here, before the filesystem or engine is touched
    let request = args.to_request()?;

    let engine = Ghostscript::new(Settings::from_args(&args));

    let stdout = io::stdout();
    run(&request, &engine, &mut stdout.lock())?;

    Ok(())
}
