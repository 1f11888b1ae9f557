//! Record identifier generation
//!
//! Ids are lookup keys within one parsed file's record set, not global
//! identifiers. The stable strategy hashes the block content with the
//! standard library's 64-bit `DefaultHasher`, so identical blocks get
//! identical ids within a run; ids are not comparable across Rust
//! releases. The hash is rendered through `i64` and any sign character
//! becomes the literal `abs`, keeping the id free of `-`.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::Utc;
use rand::Rng;

/// How a crash id is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Content hash of the raw block. Deterministic within a run; the
    /// strategy the extraction pipeline uses.
    #[default]
    Stable,

    /// Current time plus a random small integer. For callers that want
    /// ids unrelated to content.
    Random,
}

/// Generate a crash record id from the block's raw text
pub fn crash_id(strategy: IdStrategy, block: &str) -> String {
    match strategy {
        IdStrategy::Stable => format!("crash_{}", signed_hash(block)),
        IdStrategy::Random => {
            let millis = Utc::now().timestamp_millis();
            let salt: u16 = rand::thread_rng().gen_range(0..1000);
            format!("crash_{millis}_{salt}")
        }
    }
}

/// Generate an ANR record id: file stem plus a content discriminator
pub fn anr_id(file_stem: &str, content: &str) -> String {
    format!("{file_stem}_{}", signed_hash(content))
}

/// 64-bit content hash rendered as signed decimal with `-` spelled `abs`
fn signed_hash(content: &str) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    (hasher.finish() as i64).to_string().replace('-', "abs")
}
