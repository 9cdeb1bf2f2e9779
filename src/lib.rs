pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod optimize;
pub mod report;

pub use cli::Args;
pub use config::Settings;
pub use engine::{Directive, Ghostscript, OptimizationEngine};
pub use error::{EngineError, OptimizeError, SizeSide};
pub use model::{InvocationRequest, Profile};
pub use optimize::run;
pub use report::{format_bytes, SizeReport};
