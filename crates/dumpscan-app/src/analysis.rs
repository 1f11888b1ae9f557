//! Background analysis workers
//!
//! Extraction is synchronous and CPU-cheap but sits behind file I/O, so
//! each analysis runs on a blocking worker and reports back over an
//! unbounded channel. Cancellation is cooperative: workers check a shared
//! flag between extraction calls, and a cancelled analysis delivers
//! [`Message::AnalysisCancelled`] instead of records -- no partial record
//! set ever reaches the state.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use dumpscan_core::anr::parse_anr_file;
use dumpscan_ingest::{analyze_bug_report, extract_zip, list_anr_files};

use crate::message::Message;

/// Shared cancellation flag checked between extraction calls
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request abandonment of the in-flight analysis
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Run crash extraction for one bug report on a blocking worker.
///
/// Delivers exactly one message: `CrashesReady`, `AnalysisFailed`, or
/// `AnalysisCancelled`.
pub fn spawn_crash_analysis(
    path: PathBuf,
    tx: UnboundedSender<Message>,
    cancel: CancelFlag,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        if cancel.is_cancelled() {
            let _ = tx.send(Message::AnalysisCancelled);
            return;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let message = match analyze_bug_report(&path) {
            Ok(crashes) if cancel.is_cancelled() => {
                // Cancelled mid-flight: drop the records on the floor
                info!("Crash analysis of {file_name} cancelled, discarding {} records", crashes.len());
                Message::AnalysisCancelled
            }
            Ok(crashes) => {
                info!("Extracted {} crashes from {file_name}", crashes.len());
                Message::CrashesReady { file_name, crashes }
            }
            Err(e) => {
                warn!("Failed to process {file_name}: {e}");
                Message::AnalysisFailed(format!("Failed to process {file_name}: {e}"))
            }
        };

        let _ = tx.send(message);
    })
}

/// Run ANR archive ingestion on a blocking worker.
///
/// The archive is extracted under `work_dir`, then trace files are parsed
/// one at a time with a cancellation check between files.
pub fn spawn_anr_analysis(
    zip_path: PathBuf,
    work_dir: PathBuf,
    tx: UnboundedSender<Message>,
    cancel: CancelFlag,
) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let archive_name = zip_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let message = ingest_with_cancellation(&zip_path, &work_dir, &cancel)
            .map(|reports| match reports {
                Some(reports) => {
                    info!("Ingested {} ANR reports from {archive_name}", reports.len());
                    Message::AnrReportsReady {
                        archive_name: archive_name.clone(),
                        reports,
                    }
                }
                None => {
                    info!("ANR ingestion of {archive_name} cancelled");
                    Message::AnalysisCancelled
                }
            })
            .unwrap_or_else(|e| {
                warn!("Failed to process {archive_name}: {e}");
                Message::AnalysisFailed(format!("Failed to process {archive_name}: {e}"))
            });

        let _ = tx.send(message);
    })
}

/// `Ok(None)` means the analysis was cancelled between extraction calls
fn ingest_with_cancellation(
    zip_path: &Path,
    work_dir: &Path,
    cancel: &CancelFlag,
) -> dumpscan_core::Result<Option<Vec<dumpscan_core::AnrRecord>>> {
    if cancel.is_cancelled() {
        return Ok(None);
    }

    let source = std::fs::File::open(zip_path)?;
    let root = extract_zip(source, work_dir)?;

    let files = list_anr_files(&root);
    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        if cancel.is_cancelled() {
            return Ok(None);
        }
        reports.push(parse_anr_file(file)?);
    }

    Ok(Some(reports))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::sync::mpsc;

    fn write_sample_report(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("bugreport.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "FATAL EXCEPTION: main").unwrap();
        writeln!(file, "Process: com.example.app, PID: 42").unwrap();
        for i in 0..20 {
            writeln!(file, "    at com.example.Foo.bar(Foo.java:{i})").unwrap();
        }
        path
    }

    fn write_anr_zip(dir: &tempfile::TempDir) -> PathBuf {
        use zip::write::SimpleFileOptions;
        use zip::ZipWriter;

        let path = dir.path().join("report.zip");
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        writer.start_file("FS/data/anr/anr_01.txt", options).unwrap();
        writer
            .write_all(b"Subject: Input dispatching timed out\nPid: 7")
            .unwrap();
        writer.finish().unwrap();
        path
    }

    #[tokio::test]
    async fn test_crash_analysis_delivers_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_report(&dir);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_crash_analysis(path, tx, CancelFlag::new())
            .await
            .unwrap();

        match rx.recv().await.unwrap() {
            Message::CrashesReady { file_name, crashes } => {
                assert_eq!(file_name, "bugreport.txt");
                assert_eq!(crashes.len(), 1);
                assert_eq!(crashes[0].process_name, "com.example.app");
            }
            other => panic!("expected CrashesReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_crash_analysis_missing_file_fails_recoverably() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_crash_analysis(dir.path().join("missing.txt"), tx, CancelFlag::new())
            .await
            .unwrap();

        match rx.recv().await.unwrap() {
            Message::AnalysisFailed(description) => {
                assert!(description.contains("Failed to process"));
            }
            other => panic!("expected AnalysisFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_cancelled_analysis_contributes_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_sample_report(&dir);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let cancel = CancelFlag::new();
        cancel.cancel();
        spawn_crash_analysis(path, tx, cancel).await.unwrap();

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::AnalysisCancelled
        ));
    }

    #[tokio::test]
    async fn test_anr_analysis_delivers_reports() {
        let zip_dir = tempfile::tempdir().unwrap();
        let work_dir = tempfile::tempdir().unwrap();
        let zip_path = write_anr_zip(&zip_dir);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_anr_analysis(
            zip_path,
            work_dir.path().to_path_buf(),
            tx,
            CancelFlag::new(),
        )
        .await
        .unwrap();

        match rx.recv().await.unwrap() {
            Message::AnrReportsReady { archive_name, reports } => {
                assert_eq!(archive_name, "report.zip");
                assert_eq!(reports.len(), 1);
                assert_eq!(reports[0].subject, "Input dispatching timed out");
            }
            other => panic!("expected AnrReportsReady, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_anr_analysis_cancelled_before_start() {
        let zip_dir = tempfile::tempdir().unwrap();
        let work_dir = tempfile::tempdir().unwrap();
        let zip_path = write_anr_zip(&zip_dir);
        let (tx, mut rx) = mpsc::unbounded_channel();

        let cancel = CancelFlag::new();
        cancel.cancel();
        spawn_anr_analysis(zip_path, work_dir.path().to_path_buf(), tx, cancel)
            .await
            .unwrap();

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::AnalysisCancelled
        ));
    }
}
