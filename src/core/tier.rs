//! Tier Classifier: how complete are the submitted materials?
//!
//! Rules, first match wins:
//! - A: text > 5000 chars OR ≥ 2 files
//! - B: text > 500 chars OR exactly 1 file
//! - C: everything else (docket only, short excerpt)

use crate::types::{ClassificationInput, InputTier};
use crate::{TIER_A_MIN_CHARS, TIER_A_MIN_FILES, TIER_B_MIN_CHARS};

#[derive(Debug, Default, Clone, Copy)]
pub struct TierClassifier;

impl TierClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify from text and attachment count. Both bounds are exclusive.
    pub fn classify(&self, text: &str, file_count: usize) -> InputTier {
        let len = text.chars().count();

        if len > TIER_A_MIN_CHARS || file_count >= TIER_A_MIN_FILES {
            InputTier::A
        } else if len > TIER_B_MIN_CHARS || file_count == 1 {
            InputTier::B
        } else {
            InputTier::C
        }
    }

    /// Classify a full submission; the docket never affects the tier
    pub fn classify_input(&self, input: &ClassificationInput) -> InputTier {
        self.classify(&input.text, input.files.len())
    }
}
