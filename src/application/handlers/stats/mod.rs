//! Stats handlers.

mod curriculum_stats;
mod user_stats;

pub use curriculum_stats::{CurriculumStatsHandler, CurriculumStatsQuery, CurriculumStatsView};
pub use user_stats::{UserStatsHandler, UserStatsQuery, UserStatsView};
