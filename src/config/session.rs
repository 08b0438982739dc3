//! Chat session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for any simulated typing delay.
pub const MAX_DELAY_MS: u64 = 30_000;

/// Chat session configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    /// Typing delay before the first-turn refinement appears
    #[serde(default = "default_refinement_delay")]
    pub refinement_delay_ms: u64,

    /// Typing delay before a follow-up answer appears
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,

    /// Typing delay before the answer to a confirmed refinement appears
    #[serde(default = "default_confirmed_reply_delay")]
    pub confirmed_reply_delay_ms: u64,

    /// Refuse to send until the user confirms the message holds no confidential data
    #[serde(default = "default_require_ack")]
    pub require_confidentiality_ack: bool,
}

impl SessionConfig {
    pub fn refinement_delay(&self) -> Duration {
        Duration::from_millis(self.refinement_delay_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn confirmed_reply_delay(&self) -> Duration {
        Duration::from_millis(self.confirmed_reply_delay_ms)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, actual) in [
            ("refinement_delay_ms", self.refinement_delay_ms),
            ("reply_delay_ms", self.reply_delay_ms),
            ("confirmed_reply_delay_ms", self.confirmed_reply_delay_ms),
        ] {
            if actual == 0 || actual > MAX_DELAY_MS {
                return Err(ValidationError::InvalidDelay {
                    field,
                    max: MAX_DELAY_MS,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refinement_delay_ms: default_refinement_delay(),
            reply_delay_ms: default_reply_delay(),
            confirmed_reply_delay_ms: default_confirmed_reply_delay(),
            require_confidentiality_ack: default_require_ack(),
        }
    }
}

fn default_refinement_delay() -> u64 {
    1500
}

fn default_reply_delay() -> u64 {
    1500
}

fn default_confirmed_reply_delay() -> u64 {
    1000
}

fn default_require_ack() -> bool {
    true
}
