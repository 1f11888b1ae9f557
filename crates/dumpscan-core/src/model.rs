//! Record types produced by the extractors
//!
//! Field names serialize in camelCase to match the schema the UI
//! collaborator consumes. Several CrashRecord fields are schema
//! placeholders: the extraction path leaves them at their defaults and
//! they must round-trip that way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crash severity, graded from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

/// Device metadata attached to a crash (placeholder -- not populated by
/// the current extraction path)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    #[serde(default)]
    pub android_version: String,
    #[serde(default)]
    pub device_model: String,
    #[serde(default)]
    pub app_version: String,
    #[serde(default)]
    pub build_number: String,
}

/// One parsed crash occurrence from a bug report
///
/// Invariant: every populated field derives from `raw_block` -- the exact
/// window of lines the crash was carved from. No field references content
/// outside that window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrashRecord {
    /// Stable within one parse pass; a lookup key for one file's record
    /// set, not a globally unique id
    pub id: String,

    /// Exception type from the trigger line ("FATAL EXCEPTION: main",
    /// "java.lang.NullPointerException", or "UnknownException")
    pub exception_type: String,

    /// Exception message from the trigger line; may be empty
    pub exception_message: String,

    /// Window lines after the trigger line, newline-joined
    pub stack_trace: String,

    /// Always High for matched blocks; the schema leaves room for grading
    pub severity: Severity,

    /// Process name from the block, "Unknown" if no rule matched
    pub process_name: String,

    /// Process id from the block, "Unknown" if no rule matched
    pub process_id: String,

    /// The full extraction window (trigger line + following lines),
    /// preserved verbatim for display
    pub raw_block: String,

    // ─────────────────────────────────────────────────────────
    // Placeholder fields for future enrichment
    // ─────────────────────────────────────────────────────────
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub line_number: Option<usize>,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub method_name: String,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub suggested_fix: String,
    #[serde(default)]
    pub device_info: DeviceInfo,
}

/// One parsed ANR trace file
///
/// Each labeled field comes from a single line of the file (`Subject:`,
/// `Exception...`, `TimeStamp...`, `ProcessName...`, `Pid...`); an absent
/// label leaves the field empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnrRecord {
    /// File stem plus a content-based discriminator
    pub id: String,
    pub file_name: String,
    pub subject: String,
    pub exception: String,
    pub timestamp: String,
    pub process_name: String,
    pub pid: String,
    /// `Summary` label value, or the first 10 lines of the file when the
    /// label is absent
    pub summary: String,
    /// Entire file content, newline-joined, preserved verbatim
    pub full_trace: String,
}

/// A loaded bug report plus its extracted crashes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BugReportFile {
    pub file_name: String,
    pub file_size: u64,
    pub content: String,
    #[serde(default)]
    pub crashes: Vec<CrashRecord>,
}
