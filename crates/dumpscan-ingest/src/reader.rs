//! Bug-report file reading
//!
//! Two load paths over the same extraction routine: small files are read
//! fully into memory, large files are streamed line-by-line so the whole
//! report never sits in memory at once. Both paths produce identical
//! records for identical content.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use dumpscan_core::{
    extract_crashes, extract_crashes_from_lines, BugReportFile, CrashRecord, Error, Result,
};

/// Reports at or above this size are streamed instead of fully loaded
pub const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024;

/// Load a bug report fully into memory and extract its crashes
pub fn load_bug_report(path: &Path) -> Result<BugReportFile> {
    let metadata = std::fs::metadata(path)
        .map_err(|_| Error::report_not_found(path))?;
    let content = std::fs::read_to_string(path)
        .map_err(|_| Error::unreadable_report(path))?;

    let crashes = extract_crashes(&content);
    debug!(
        "Loaded {} ({} bytes, {} crashes)",
        path.display(),
        metadata.len(),
        crashes.len()
    );

    Ok(BugReportFile {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        file_size: metadata.len(),
        content,
        crashes,
    })
}

/// Extract crashes from a sequential line reader.
///
/// The reader is consumed forward-only; the input is never materialized
/// in full. A read failure mid-stream surfaces as an I/O error and the
/// call contributes no records.
pub fn crashes_from_reader<R: BufRead>(reader: R) -> Result<Vec<CrashRecord>> {
    let mut read_error: Option<io::Error> = None;

    let crashes = extract_crashes_from_lines(reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            read_error = Some(e);
            None
        }
    }));

    match read_error {
        Some(e) => Err(e.into()),
        None => Ok(crashes),
    }
}

/// Extract crashes from a bug report on disk, choosing the load path by
/// the file's declared size.
pub fn analyze_bug_report(path: &Path) -> Result<Vec<CrashRecord>> {
    let size = std::fs::metadata(path)
        .map_err(|_| Error::report_not_found(path))?
        .len();

    if size >= LARGE_FILE_THRESHOLD {
        info!("Streaming large bug report ({size} bytes): {}", path.display());
        let file = File::open(path).map_err(|_| Error::unreadable_report(path))?;
        crashes_from_reader(BufReader::new(file))
    } else {
        Ok(load_bug_report(path)?.crashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_report() -> String {
        let mut lines = vec![
            "--------- beginning of crash".to_string(),
            "FATAL EXCEPTION: main".to_string(),
            "Process: com.example.app, PID: 1234".to_string(),
        ];
        for i in 0..20 {
            lines.push(format!("    at com.example.Foo.bar(Foo.java:{i})"));
        }
        lines.join("\n")
    }

    fn write_report(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("bugreport.txt");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_bug_report_populates_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        let content = sample_report();
        let path = write_report(&dir, &content);

        let report = load_bug_report(&path).unwrap();
        assert_eq!(report.file_name, "bugreport.txt");
        assert_eq!(report.file_size, content.len() as u64);
        assert_eq!(report.content, content);
        assert_eq!(report.crashes.len(), 1);
        assert_eq!(report.crashes[0].process_name, "com.example.app");
    }

    #[test]
    fn test_missing_report_is_not_found_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_bug_report(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(Error::ReportNotFound { .. })));
    }

    #[test]
    fn test_reader_and_full_load_agree() {
        let dir = tempfile::tempdir().unwrap();
        let content = sample_report();
        let path = write_report(&dir, &content);

        let full = load_bug_report(&path).unwrap().crashes;
        let streamed = crashes_from_reader(BufReader::new(File::open(&path).unwrap())).unwrap();

        assert_eq!(full, streamed);
    }

    #[test]
    fn test_analyze_small_report_uses_full_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_report(&dir, &sample_report());

        let crashes = analyze_bug_report(&path).unwrap();
        assert_eq!(crashes.len(), 1);
        assert_eq!(crashes[0].exception_type, "FATAL EXCEPTION: main");
    }

    #[test]
    fn test_reader_with_no_trigger_is_empty() {
        let crashes = crashes_from_reader("plain line\nanother\n".as_bytes()).unwrap();
        assert!(crashes.is_empty());
    }
}
