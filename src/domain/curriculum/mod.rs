//! Curriculum module - projections of the externally-owned curriculum
//! aggregate plus its tag/category records.

mod curriculum;
mod tag;
mod values;

pub use curriculum::{Curriculum, Visibility};
pub use tag::{CurriculumCategory, CurriculumTag};
pub use values::{CategoryName, TagColor, MAX_CATEGORY_NAME_LENGTH};
