//! Application layer - Use cases and orchestration

pub mod check_consistency;
pub mod clean_weeks;
pub mod fix_spaces;
pub mod manage_config;
pub mod weekly_log;

pub use check_consistency::CheckConsistencyService;
pub use clean_weeks::{CleanReport, CleanWeeksService};
pub use fix_spaces::{FixSpacesReport, FixSpacesService};
pub use manage_config::ConfigService;
pub use weekly_log::{WeekFailure, WeeklyLogService, WeeklyReport};
