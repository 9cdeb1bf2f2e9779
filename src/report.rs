//! Before/after size report
//!
//! Formats byte counts with binary (1024-based) units and describes the
//! relative change between the original and optimized file.

use std::fmt;

const UNIT: u64 = 1024;
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count, e.g. `500 B`, `1.5 KB`, `1.0 MB`
pub fn format_bytes(bytes: u64) -> String {
    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, UNIT_PREFIXES[exp])
}

/// Direction of the size change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Rounded percentage by which the file shrank (or stayed the same)
    Smaller(u64),
    /// Rounded percentage by which the file grew
    Larger(u64),
    /// The original file was empty, so no percentage exists
    Undefined,
}

impl Change {
    pub fn between(before: u64, after: u64) -> Self {
        if before == 0 {
            return Change::Undefined;
        }

        let reduction = (before as f64 - after as f64) / before as f64 * 100.0;
        let magnitude = reduction.abs().round() as u64;
        if reduction >= 0.0 {
            Change::Smaller(magnitude)
        } else {
            Change::Larger(magnitude)
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Smaller(pct) => write!(f, "{}% smaller", pct),
            Change::Larger(pct) => write!(f, "{}% LARGER", pct),
            Change::Undefined => write!(f, "n/a (original file was empty)"),
        }
    }
}

/// Three-line size report printed after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub before: u64,
    pub after: u64,
}

impl SizeReport {
    pub fn new(before: u64, after: u64) -> Self {
        Self { before, after }
    }

    pub fn change(&self) -> Change {
        Change::between(self.before, self.after)
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size: {}", format_bytes(self.before))?;
        writeln!(f, "New size: {}", format_bytes(self.after))?;
        write!(f, "Change: {}", self.change())
    }
}
