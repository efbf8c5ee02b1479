//! Domain layer - Business logic and domain models

pub mod consistency;
pub mod naming;
pub mod sections;
pub mod spacing;
pub mod weekly;

pub use consistency::{ConsistencyChecker, ConsistencyReport, VaultFile};
pub use sections::{Section, SectionExtractor, SectionRules};
pub use weekly::{DailyNote, LinkRewriter, NoteRef, WeekBucket, WeeklyDocument, WeeklyMerger};
