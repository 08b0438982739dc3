//! Coarse grading bands for 0-100 scores.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

/// Grading band used when presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 70 and above.
    Good,
    /// 50 to 69.
    Fair,
    /// Below 50.
    Poor,
}

impl ScoreBand {
    pub fn from_score(score: Percentage) -> Self {
        let value = score.value();
        if value >= 70 {
            ScoreBand::Good
        } else if value >= 50 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::Poor => "Needs work",
        }
    }
}
