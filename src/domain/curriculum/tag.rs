//! Curriculum tag and category records.

use serde::{Deserialize, Serialize};

use super::values::{CategoryName, TagColor};
use crate::domain::foundation::{CategoryId, CurriculumId, TagId, Timestamp, ValidationError};

/// Tag attached to a curriculum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumTag {
    id: TagId,
    curriculum_id: CurriculumId,
    label: String,
    color: TagColor,
    created_at: Timestamp,
}

impl CurriculumTag {
    /// Creates a tag with a non-empty trimmed label.
    pub fn new(
        id: TagId,
        curriculum_id: CurriculumId,
        label: impl Into<String>,
        color: TagColor,
    ) -> Result<Self, ValidationError> {
        let label = label.into().trim().to_string();
        if label.is_empty() {
            return Err(ValidationError::empty_field("label"));
        }
        Ok(Self {
            id,
            curriculum_id,
            label,
            color,
            created_at: Timestamp::now(),
        })
    }

    /// Returns the tag ID.
    pub fn id(&self) -> &TagId {
        &self.id
    }

    /// Returns the owning curriculum ID.
    pub fn curriculum_id(&self) -> &CurriculumId {
        &self.curriculum_id
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the display color.
    pub fn color(&self) -> &TagColor {
        &self.color
    }
}

/// Category a curriculum is filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumCategory {
    id: CategoryId,
    name: CategoryName,
    created_at: Timestamp,
}

impl CurriculumCategory {
    /// Creates a category.
    pub fn new(id: CategoryId, name: CategoryName) -> Self {
        Self {
            id,
            name,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the category ID.
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Returns the category name.
    pub fn name(&self) -> &CategoryName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_trims_label() {
        let tag = CurriculumTag::new(
            TagId::new("tag-1").unwrap(),
            CurriculumId::new("curr-1").unwrap(),
            "  rust  ",
            TagColor::new("#ff8800").unwrap(),
        )
        .unwrap();
        assert_eq!(tag.label(), "rust");
    }

    #[test]
    fn tag_rejects_blank_label() {
        let result = CurriculumTag::new(
            TagId::new("tag-1").unwrap(),
            CurriculumId::new("curr-1").unwrap(),
            "   ",
            TagColor::new("#ff8800").unwrap(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn category_exposes_name() {
        let category = CurriculumCategory::new(
            CategoryId::new("cat-1").unwrap(),
            CategoryName::new("Programming").unwrap(),
        );
        assert_eq!(category.name().as_str(), "Programming");
    }
}
