//! weeklog - weekly aggregation for a markdown journal vault
//!
//! Daily notes live under `<vault>/<year>/YYYY-MM-DD.md`. weeklog merges
//! each Monday-Sunday span into `<vault>/<year>/weeks/<year>weeklyWW.md`
//! and keeps notes tidy with a blank-line normalizer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::WeeklogError;
