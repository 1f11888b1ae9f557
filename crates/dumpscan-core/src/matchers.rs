//! Stateless pattern matchers for crash block text
//!
//! All matchers are total: a failed match resolves to a documented
//! default ("Unknown" / empty string), never an error. The process
//! matcher is an ordered rule table evaluated in priority order so rules
//! can be added or reordered explicitly and tested in isolation.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::Severity;

static FATAL_EXCEPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)FATAL EXCEPTION:\s*(.+)").expect("valid fatal exception regex")
});

static GENERIC_EXCEPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z.]+Exception):\s*(.+)").expect("valid generic exception regex")
});

/// Which field a process rule's capture populates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProcessCapture {
    Name,
    Pid,
}

/// One rule in the process matcher chain
struct ProcessRule {
    pattern: LazyLock<Regex>,
    capture: ProcessCapture,
}

/// Process rules in priority order; the first match wins
static PROCESS_RULES: [ProcessRule; 3] = [
    // "Process: com.example.app," from bugreport headers
    ProcessRule {
        pattern: LazyLock::new(|| Regex::new(r"Process:\s*([^,\n]+)").expect("valid process regex")),
        capture: ProcessCapture::Name,
    },
    // "proc=ProcessRecord{1a2b3c 1234:com.example.app/u0a123}" from am logs
    ProcessRule {
        pattern: LazyLock::new(|| {
            Regex::new(r"proc=ProcessRecord\{[A-Za-z0-9]+ \d+:([^/\s\}]+)")
                .expect("valid ProcessRecord regex")
        }),
        capture: ProcessCapture::Name,
    },
    // Bare "PID: 1234" lines
    ProcessRule {
        pattern: LazyLock::new(|| Regex::new(r"PID:\s*(\d+)").expect("valid pid regex")),
        capture: ProcessCapture::Pid,
    },
];

/// Extract (exception type, exception message) from a crash trigger line.
///
/// A `FATAL EXCEPTION: <thread>` line yields the full prefix plus the
/// trimmed thread name and an empty message; a generic
/// `<Type>Exception: <message>` line yields the type/message pair;
/// anything else yields `("UnknownException", "")`.
pub fn exception_info(line: &str) -> (String, String) {
    if line.to_lowercase().contains("fatal exception") {
        return match FATAL_EXCEPTION_RE
            .captures(line)
            .and_then(|c| c.get(1))
        {
            Some(thread) => (format!("FATAL EXCEPTION: {}", thread.as_str().trim()), String::new()),
            // Literal substring present but no thread name captured
            None => ("FATAL EXCEPTION".to_string(), "Unknown fatal error".to_string()),
        };
    }

    match GENERIC_EXCEPTION_RE.captures(line) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str()).unwrap_or("UnknownException").to_string(),
            caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string(),
        ),
        None => ("UnknownException".to_string(), String::new()),
    }
}

/// Extract (process name, process id) from crash block text.
///
/// Rules run against the joined block text, not line-by-line. Each rule
/// fills one of the two fields; the other stays "Unknown". No match at
/// all yields `("Unknown", "Unknown")`.
pub fn process_info(block: &str) -> (String, String) {
    for rule in &PROCESS_RULES {
        if let Some(caps) = rule.pattern.captures(block) {
            if let Some(value) = caps.get(1) {
                return match rule.capture {
                    ProcessCapture::Name => (value.as_str().to_string(), "Unknown".to_string()),
                    ProcessCapture::Pid => ("Unknown".to_string(), value.as_str().to_string()),
                };
            }
        }
    }
    ("Unknown".to_string(), "Unknown".to_string())
}

// ─────────────────────────────────────────────────────────────────
// Enrichment Lookups
// ─────────────────────────────────────────────────────────────────

/// Grade an exception type. The block extraction pipeline pins
/// [`Severity::High`]; this lookup exists for enrichment callers.
pub fn severity_for(exception_type: &str) -> Severity {
    if exception_type.contains("FATAL EXCEPTION") {
        Severity::High
    } else {
        Severity::Medium
    }
}

/// Best-effort root cause description for an exception type
pub fn root_cause_for(exception_type: &str) -> &'static str {
    if exception_type.contains("NullPointerException") {
        "Null pointer dereference"
    } else if exception_type.contains("OutOfMemoryError") {
        "Memory exhaustion"
    } else if exception_type.contains("IllegalStateException") {
        "Invalid object state"
    } else {
        "Unknown root cause"
    }
}

/// Best-effort remediation hint for an exception type
pub fn suggested_fix_for(exception_type: &str) -> &'static str {
    if exception_type.contains("NullPointerException") {
        "Add null checks before accessing object properties"
    } else if exception_type.contains("OutOfMemoryError") {
        "Optimize memory usage and implement proper cleanup"
    } else if exception_type.contains("IllegalStateException") {
        "Ensure object is properly initialized"
    } else {
        "Review stack trace for specific issue"
    }
}
