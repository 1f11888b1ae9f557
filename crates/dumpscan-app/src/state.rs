//! Analysis state (Model in TEA pattern)

use dumpscan_core::{AnrRecord, CrashRecord};

use crate::message::Message;

/// Where the current analysis stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalysisPhase {
    /// Nothing loaded yet
    #[default]
    Idle,

    /// A worker is extracting records
    Processing,

    /// Records are available for display
    Ready,

    /// The last analysis failed; prior records are still shown
    Failed,
}

/// The full analysis model consumed by a UI collaborator
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    pub phase: AnalysisPhase,

    /// Name of the file or archive being analyzed
    pub source_name: String,

    /// Crash records from the last completed bug-report analysis
    pub crashes: Vec<CrashRecord>,

    /// ANR records from the last completed archive ingestion
    pub anr_reports: Vec<AnrRecord>,

    /// User-visible description of the last failure
    pub error: Option<String>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the start of a new analysis
    pub fn begin(&mut self, source_name: impl Into<String>) {
        self.phase = AnalysisPhase::Processing;
        self.source_name = source_name.into();
        self.error = None;
    }

    fn has_records(&self) -> bool {
        !self.crashes.is_empty() || !self.anr_reports.is_empty()
    }
}

/// Fold one worker message into the state.
///
/// Completed analyses replace the matching record set wholesale; there is
/// no incremental update. Failures and cancellations leave prior records
/// untouched.
pub fn update(state: &mut AnalysisState, message: Message) {
    match message {
        Message::CrashesReady { file_name, crashes } => {
            state.phase = AnalysisPhase::Ready;
            state.source_name = file_name;
            state.crashes = crashes;
            state.error = None;
        }
        Message::AnrReportsReady {
            archive_name,
            reports,
        } => {
            state.phase = AnalysisPhase::Ready;
            state.source_name = archive_name;
            state.anr_reports = reports;
            state.error = None;
        }
        Message::AnalysisFailed(description) => {
            state.phase = AnalysisPhase::Failed;
            state.error = Some(description);
        }
        Message::AnalysisCancelled => {
            state.phase = if state.has_records() {
                AnalysisPhase::Ready
            } else {
                AnalysisPhase::Idle
            };
        }
    }
}
