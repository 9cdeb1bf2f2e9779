use clap::Parser;
use std::path::PathBuf;

use crate::error::OptimizeError;
use crate::model::{select_profile, InvocationRequest, ProfileFlags};

#[derive(Parser, Debug)]
#[command(name = "pdfoptimize")]
#[command(author, version, about = "Optimize PDF files")]
pub struct Args {
    /// Input PDF file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to <input>.<style>.pdf)
    pub output: Option<PathBuf>,

    /// Optimize file in-place
    #[arg(short, long)]
    pub inplace: bool,

    /// No output
    #[arg(short = 'q', long)]
    pub silent: bool,

    /// Optimization style (screen, ebook, print, prepress)
    #[arg(long)]
    pub style: Option<String>,

    /// Optimize for print
    #[arg(short, long)]
    pub print: bool,

    /// Optimize for ebook
    #[arg(short, long)]
    pub ebook: bool,

    /// Optimize for screen
    #[arg(short, long)]
    pub screen: bool,

    /// Optimize for prepress
    #[arg(long)]
    pub prepress: bool,

    /// Image DPI (0 = auto)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub dpi: i32,

    /// Ghostscript executable to run
    #[arg(long, env = "PDFOPTIMIZE_GS")]
    pub gs: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn profile_flags(&self) -> ProfileFlags<'_> {
        ProfileFlags {
            style: self.style.as_deref(),
            screen: self.screen,
            ebook: self.ebook,
            print: self.print,
            prepress: self.prepress,
        }
    }

    /// Validate the raw arguments and turn them into an immutable request
    pub fn to_request(&self) -> Result<InvocationRequest, OptimizeError> {
        let profile = select_profile(self.profile_flags())?;

        InvocationRequest::new(
            self.input.clone(),
            self.output.clone(),
            profile,
            self.dpi,
            self.inplace,
            self.silent,
        )
    }
}
