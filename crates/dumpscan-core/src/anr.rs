//! ANR trace file extraction
//!
//! ANR traces carry labeled metadata lines (`Subject:`, `Exception...`,
//! `TimeStamp...`, `ProcessName...`, `Pid...`, `Summary...`). A single
//! pass collects them with last-write-wins semantics; a missing label
//! leaves its field empty, and a missing `Summary` falls back to the
//! first [`SUMMARY_FALLBACK_LINES`] lines of the file.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::ident::anr_id;
use crate::model::AnrRecord;

/// Lines used as the summary when no `Summary` label is present
pub const SUMMARY_FALLBACK_LINES: usize = 10;

/// Read one ANR trace file and extract its record.
///
/// I/O failure is the only error path; extraction itself is total.
pub fn parse_anr_file(path: &Path) -> Result<AnrRecord> {
    let content = fs::read_to_string(path)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_stem = path
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let lines: Vec<&str> = content.lines().collect();
    Ok(parse_anr_lines(&file_name, &file_stem, &lines))
}

/// Pure extraction over a trace file's lines
pub fn parse_anr_lines(file_name: &str, file_stem: &str, lines: &[&str]) -> AnrRecord {
    let full_trace = lines.join("\n");

    let mut subject = String::new();
    let mut exception = String::new();
    let mut timestamp = String::new();
    let mut process_name = String::new();
    let mut pid = String::new();
    let mut summary = String::new();

    // Later lines with the same label overwrite earlier captures
    for line in lines {
        if let Some(rest) = line.strip_prefix("Subject:") {
            subject = rest.trim().to_string();
        } else if line.starts_with("Exception") {
            exception = value_after_colon(line);
        } else if line.starts_with("TimeStamp") {
            timestamp = value_after_colon(line);
        } else if line.starts_with("ProcessName") {
            process_name = value_after_colon(line);
        } else if line.starts_with("Pid") {
            pid = value_after_colon(line);
        } else if line.starts_with("Summary") {
            summary = value_after_colon(line);
        }
    }

    if summary.is_empty() {
        summary = lines
            .iter()
            .take(SUMMARY_FALLBACK_LINES)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
    }

    AnrRecord {
        id: anr_id(file_stem, &full_trace),
        file_name: file_name.to_string(),
        subject,
        exception,
        timestamp,
        process_name,
        pid,
        summary,
        full_trace,
    }
}

/// Text after the first `:`, trimmed; empty when no `:` is present
fn value_after_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_TRACE: &str = "\
Subject: Input dispatching timed out
Exception: ANRException
TimeStamp: 2024-03-01 12:00:00
ProcessName: com.example.app
Pid: 4321
----- pid 4321 at 2024-03-01 12:00:00 -----
\"main\" prio=5 tid=1 Blocked
  at com.example.Foo.bar(Foo.java:10)";

    fn lines(text: &str) -> Vec<&str> {
        text.lines().collect()
    }

    #[test]
    fn test_labeled_fields_extracted() {
        let record = parse_anr_lines("anr1.txt", "anr1", &lines(SAMPLE_TRACE));

        assert_eq!(record.subject, "Input dispatching timed out");
        assert_eq!(record.exception, "ANRException");
        assert_eq!(record.timestamp, "2024-03-01 12:00:00");
        assert_eq!(record.process_name, "com.example.app");
        assert_eq!(record.pid, "4321");
        assert_eq!(record.file_name, "anr1.txt");
    }

    #[test]
    fn test_full_trace_preserved_verbatim() {
        let record = parse_anr_lines("anr1.txt", "anr1", &lines(SAMPLE_TRACE));
        assert_eq!(record.full_trace, SAMPLE_TRACE);
    }

    #[test]
    fn test_absent_labels_leave_fields_empty() {
        let record = parse_anr_lines("anr2.txt", "anr2", &lines("just a line\nanother line"));
        assert_eq!(record.subject, "");
        assert_eq!(record.exception, "");
        assert_eq!(record.timestamp, "");
        assert_eq!(record.process_name, "");
        assert_eq!(record.pid, "");
    }

    #[test]
    fn test_summary_label_used_verbatim() {
        let text = "Subject: stuck\nSummary: main thread blocked on binder call";
        let record = parse_anr_lines("anr.txt", "anr", &lines(text));
        assert_eq!(record.summary, "main thread blocked on binder call");
    }

    #[test]
    fn test_summary_fallback_first_ten_lines() {
        let text: Vec<String> = (0..14).map(|i| format!("trace line {i}")).collect();
        let refs: Vec<&str> = text.iter().map(String::as_str).collect();
        let record = parse_anr_lines("anr.txt", "anr", &refs);

        let expected: Vec<&str> = refs[..SUMMARY_FALLBACK_LINES].to_vec();
        assert_eq!(record.summary, expected.join("\n"));
    }

    #[test]
    fn test_summary_fallback_short_file() {
        let record = parse_anr_lines("anr.txt", "anr", &lines("only\nthree\nlines"));
        assert_eq!(record.summary, "only\nthree\nlines");
    }

    #[test]
    fn test_last_write_wins_on_repeated_labels() {
        let text = "Pid: 1\nsomething\nPid: 2";
        let record = parse_anr_lines("anr.txt", "anr", &lines(text));
        assert_eq!(record.pid, "2");
    }

    #[test]
    fn test_id_combines_stem_and_content_hash() {
        let record = parse_anr_lines("anr1.txt", "anr1", &lines(SAMPLE_TRACE));
        assert!(record.id.starts_with("anr1_"));

        let other = parse_anr_lines("anr1.txt", "anr1", &lines("different content"));
        assert_ne!(record.id, other.id);
    }

    #[test]
    fn test_parse_anr_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("anr_2024.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(SAMPLE_TRACE.as_bytes()).unwrap();

        let record = parse_anr_file(&path).unwrap();
        assert_eq!(record.file_name, "anr_2024.txt");
        assert!(record.id.starts_with("anr_2024_"));
        assert_eq!(record.subject, "Input dispatching timed out");
    }

    #[test]
    fn test_parse_anr_file_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_anr_file(&dir.path().join("nope.txt"));
        assert!(result.is_err());
    }
}
