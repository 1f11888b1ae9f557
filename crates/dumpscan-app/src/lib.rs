//! # dumpscan-app - Analysis State and Orchestration
//!
//! Ties the pure extractors to a surrounding interactive surface.
//! Extraction runs on a blocking worker so the caller's event loop stays
//! responsive; results come back as [`Message`]s over a channel and a
//! pure [`update`] folds them into [`AnalysisState`]. The state container
//! is unidirectional: the core never mutates shared state, and each
//! analysis replaces the record set wholesale.

pub mod analysis;
pub mod message;
pub mod state;

pub use analysis::{spawn_anr_analysis, spawn_crash_analysis, CancelFlag};
pub use message::Message;
pub use state::{update, AnalysisPhase, AnalysisState};
