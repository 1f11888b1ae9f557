//! # dumpscan-core - Core Domain Types and Extractors
//!
//! Foundation crate for dumpscan. Provides the record types, pattern
//! matchers, and line-oriented extractors that turn raw Android bug-report
//! text into structured crash and ANR records.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`model`)
//! - [`CrashRecord`] - One parsed crash occurrence from a bug report
//! - [`AnrRecord`] - One parsed ANR trace file
//! - [`Severity`] - Crash severity (Low, Medium, High, Critical)
//! - [`DeviceInfo`] - Device metadata placeholder fields
//! - [`BugReportFile`] - A loaded bug report plus its extracted crashes
//!
//! ### Crash Extraction (`crash_block`)
//! - [`extract_crashes()`] - Scan full in-memory text for crash blocks
//! - [`extract_crashes_from_lines()`] - Same algorithm over any line iterator
//!
//! ### ANR Extraction (`anr`)
//! - [`parse_anr_file()`] - Read and extract one ANR trace file
//! - [`parse_anr_lines()`] - Pure extraction over a file's lines
//!
//! ### Pattern Matching (`matchers`)
//! - [`exception_info()`] - Exception type/message from a trigger line
//! - [`process_info()`] - Process name/pid from block text (ordered rules)
//!
//! ### Identifiers (`ident`)
//! - [`IdStrategy`] - Stable (content hash) or Random id generation
//! - [`crash_id()`], [`anr_id()`] - Record id construction
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dumpscan_core::prelude::*;
//! ```

pub mod anr;
pub mod crash_block;
pub mod error;
pub mod ident;
pub mod logging;
pub mod matchers;
pub mod model;

/// Prelude for common imports used throughout all dumpscan crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use anr::{parse_anr_file, parse_anr_lines, SUMMARY_FALLBACK_LINES};
pub use crash_block::{extract_crashes, extract_crashes_from_lines, WINDOW_LINES};
pub use error::{Error, Result, ResultExt};
pub use ident::{anr_id, crash_id, IdStrategy};
pub use matchers::{exception_info, process_info, root_cause_for, severity_for, suggested_fix_for};
pub use model::{AnrRecord, BugReportFile, CrashRecord, DeviceInfo, Severity};
