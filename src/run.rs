//! Analysis entry points for the CLI
//!
//! Each run drives the dumpscan-app engine: spawn the background worker,
//! fold its message into the state, then emit whatever records the state
//! holds. One analysis per invocation, so exactly one message arrives.

use std::io;
use std::path::Path;

use tokio::sync::mpsc;
use tracing::info;

use dumpscan_app::{
    spawn_anr_analysis, spawn_crash_analysis, update, AnalysisPhase, AnalysisState, CancelFlag,
};
use dumpscan_core::{Error, Result};
use dumpscan_ingest::crashes_from_reader;

use crate::emit::emit_records;

/// Analyze one bug-report file and emit its crash records as JSON lines
pub async fn run_crash_analysis(path: &Path, pretty: bool) -> Result<()> {
    let mut state = AnalysisState::new();
    state.begin(path.display().to_string());

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_crash_analysis(path.to_path_buf(), tx, CancelFlag::new())
        .await
        .map_err(|e| Error::analysis(e.to_string()))?;

    let message = rx.recv().await.ok_or(Error::ChannelClosed)?;
    update(&mut state, message);
    finish(state, pretty)
}

/// Analyze bug-report text from stdin and emit crash records as JSON lines
pub fn run_crash_analysis_stdin(pretty: bool) -> Result<()> {
    let stdin = io::stdin();
    let crashes = crashes_from_reader(stdin.lock())?;
    info!("Extracted {} crashes from stdin", crashes.len());
    emit_records(&crashes, pretty, &mut io::stdout().lock())
}

/// Ingest one ANR zip archive and emit its records as JSON lines
pub async fn run_anr_analysis(zip_path: &Path, work_dir: &Path, pretty: bool) -> Result<()> {
    let mut state = AnalysisState::new();
    state.begin(zip_path.display().to_string());

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_anr_analysis(
        zip_path.to_path_buf(),
        work_dir.to_path_buf(),
        tx,
        CancelFlag::new(),
    )
    .await
    .map_err(|e| Error::analysis(e.to_string()))?;

    let message = rx.recv().await.ok_or(Error::ChannelClosed)?;
    update(&mut state, message);
    finish(state, pretty)
}

/// Emit the completed state's records, or surface its failure
fn finish(state: AnalysisState, pretty: bool) -> Result<()> {
    match state.phase {
        AnalysisPhase::Ready => {
            let mut out = io::stdout().lock();
            emit_records(&state.crashes, pretty, &mut out)?;
            emit_records(&state.anr_reports, pretty, &mut out)?;
            Ok(())
        }
        AnalysisPhase::Failed => Err(Error::analysis(
            state.error.unwrap_or_else(|| "analysis failed".to_string()),
        )),
        // Cancelled before any records arrived
        AnalysisPhase::Idle | AnalysisPhase::Processing => Ok(()),
    }
}
