//! Message types delivered by analysis workers (TEA pattern)

use dumpscan_core::{AnrRecord, CrashRecord};

/// Results and failures flowing from background analysis to the state
#[derive(Debug, Clone)]
pub enum Message {
    /// Crash extraction finished for one bug report
    CrashesReady {
        file_name: String,
        crashes: Vec<CrashRecord>,
    },

    /// ANR ingestion finished for one archive
    AnrReportsReady {
        archive_name: String,
        reports: Vec<AnrRecord>,
    },

    /// Analysis failed with a user-visible description; prior state is
    /// left untouched
    AnalysisFailed(String),

    /// Analysis was abandoned before completion; contributes no records
    AnalysisCancelled,
}
