//! Fixed-window crash block extraction from bug-report text
//!
//! Scans lines for `FATAL EXCEPTION` trigger lines and carves a
//! fixed-size window of [`WINDOW_LINES`] lines (trigger + up to 14
//! following) out of the input per trigger. The window is deliberately
//! not delimited by detecting the end of a stack trace: long traces are
//! truncated and short ones may swallow unrelated text, but record
//! boundaries stay predictable. The scan cursor always skips past the
//! whole window, so a second trigger inside a consumed window is never
//! reported separately.
//!
//! One routine serves both input modes: the in-memory path materializes
//! the text's lines, the streamed path feeds a reader's lines through the
//! same iterator-based scan without holding the full input.

use crate::ident::{crash_id, IdStrategy};
use crate::matchers::{exception_info, process_info};
use crate::model::{CrashRecord, Severity};

/// Lines per extraction window: the trigger line plus up to 14 more
pub const WINDOW_LINES: usize = 15;

/// Trigger substring, matched case-insensitively
const TRIGGER: &str = "fatal exception";

/// Check whether a line starts a crash block
fn is_trigger(line: &str) -> bool {
    line.to_lowercase().contains(TRIGGER)
}

/// Extract crash records from full in-memory bug-report text.
///
/// Records are ordered by ascending trigger-line index. Input with no
/// trigger yields an empty Vec.
pub fn extract_crashes(content: &str) -> Vec<CrashRecord> {
    extract_crashes_from_lines(content.lines().map(str::to_string))
}

/// Extract crash records from any forward-only sequence of lines.
///
/// This is the single extraction routine behind both input modes; for
/// equal content it produces output identical to [`extract_crashes`]
/// regardless of how the lines are sourced.
pub fn extract_crashes_from_lines<I>(lines: I) -> Vec<CrashRecord>
where
    I: IntoIterator<Item = String>,
{
    let mut crashes = Vec::new();
    let mut lines = lines.into_iter();

    while let Some(line) = lines.next() {
        if !is_trigger(&line) {
            continue;
        }

        // Carve the window: trigger line + up to 14 more. Pulling the
        // extra lines off the iterator is also what advances the cursor
        // past the consumed window.
        let mut window = Vec::with_capacity(WINDOW_LINES);
        window.push(line);
        while window.len() < WINDOW_LINES {
            match lines.next() {
                Some(next) => window.push(next),
                None => break,
            }
        }

        crashes.push(build_record(&window));
    }

    crashes
}

/// Build one record from an extraction window.
///
/// Every field derives from the window alone: exception type/message
/// from the trigger line, process info from the joined block text.
fn build_record(window: &[String]) -> CrashRecord {
    let raw_block = window.join("\n");
    let (exception_type, exception_message) = exception_info(&window[0]);
    let (process_name, process_id) = process_info(&raw_block);

    CrashRecord {
        id: crash_id(IdStrategy::Stable, &raw_block),
        exception_type,
        exception_message,
        stack_trace: window[1..].join("\n"),
        severity: Severity::High,
        process_name,
        process_id,
        raw_block,
        ..Default::default()
    }
}
