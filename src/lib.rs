//! dumpscan Library
//!
//! CLI harness over the extraction crates: runs an analysis through the
//! dumpscan-app engine and emits one JSON object per record.

// Module declarations
pub mod emit;
pub mod run;

// Re-export main entry points
pub use run::{run_anr_analysis, run_crash_analysis, run_crash_analysis_stdin};
