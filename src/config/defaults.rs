/// Ghostscript executable looked up on PATH when no override is given
pub const DEFAULT_GS_BINARY: &str = "gs";

/// PDF version written by the pdfwrite device
pub const DEFAULT_COMPATIBILITY_LEVEL: &str = "1.4";

/// Suffix of the scratch file used while optimizing in place
pub const IN_PLACE_TEMP_SUFFIX: &str = ".pdfoptimize.tmp";
