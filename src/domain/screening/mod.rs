//! Signal extraction over raw user text.
//!
//! Flags personal identifiers that should not be shared with an assistant and
//! legal references whose citations the user must verify independently.

mod signals;
mod warning;

pub use signals::{detect_signals, SensitiveDataKind, CITATION_TERMS};
pub use warning::{Severity, Warning, WarningKind};
