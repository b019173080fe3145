//! Parameters controlling protein group resolution
//!
//! ```ignore
//! score_threshold = 25.0
//! score_filtering = true
//! peptides_per_protein = 2
//! ```
//!
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};
mod parse;

pub use parse::SettingsError;

/// Parameters consumed by the group resolution engine
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Settings {
    /// Identifications whose top score is below this value are rejected
    pub score_threshold: f64,
    /// Keep only the best scoring identification of each modified peptide
    pub score_filtering: bool,
    /// Minimum number of uniquely resolved peptides a protein needs
    pub peptides_per_protein: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            score_threshold: 20.0,
            score_filtering: true,
            peptides_per_protein: 2,
        }
    }
}

impl Settings {
    /// Parse settings from `key = value` text. Keys that do not appear keep
    /// their default value.
    pub fn parse(input: &str) -> Result<Settings, SettingsError<'_>> {
        parse::parse(input)
    }

    /// This follows the Builder pattern
    pub fn score_threshold(mut self, score: f64) -> Self {
        self.score_threshold = score;
        self
    }

    /// This follows the Builder pattern
    pub fn score_filtering(mut self, enabled: bool) -> Self {
        self.score_filtering = enabled;
        self
    }

    /// This follows the Builder pattern
    pub fn peptides_per_protein(mut self, n: usize) -> Self {
        self.peptides_per_protein = n;
        self
    }
}
