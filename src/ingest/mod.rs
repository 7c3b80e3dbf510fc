//! Parsing boundary: turns external input into punches.
//!
//! Malformed items are counted and skipped; one bad line never aborts a batch.

pub mod api;
pub mod turnstile;

use crate::models::punch::Punch;

/// Punches extracted from one input plus the number of rejected items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBatch {
    pub punches: Vec<Punch>,
    pub skipped: usize,
}

impl ParsedBatch {
    pub fn is_empty(&self) -> bool {
        self.punches.is_empty()
    }
}
