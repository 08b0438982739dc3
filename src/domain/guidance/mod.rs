//! Educational tips shown next to a question.

mod tips;

pub use tips::{educational_tip, EducationalTip, TipKind};
