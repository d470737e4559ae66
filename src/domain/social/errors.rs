//! Social interaction error types.

use crate::domain::foundation::{CurriculumId, DomainError, ErrorCode, UserId, ValidationError};

/// Errors surfaced by the social interaction services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialError {
    /// Target entity absent for the given id or composite key.
    NotFound(String),
    /// Uniqueness violated on a composite key.
    AlreadyExists(String),
    /// Authenticated but not authorized for the mutation.
    AccessDenied,
    /// Curriculum is private or absent for the requester.
    CurriculumNotAccessible(CurriculumId),
    /// Content value failed format or length validation.
    InvalidContent(ValidationError),
    /// Follow target equals the follower.
    SelfReference(UserId),
    /// Infrastructure failure from a port.
    Infrastructure(String),
}

impl SocialError {
    pub fn not_found(what: impl Into<String>) -> Self {
        SocialError::NotFound(what.into())
    }
    pub fn already_exists(what: impl Into<String>) -> Self {
        SocialError::AlreadyExists(what.into())
    }
    pub fn access_denied() -> Self {
        SocialError::AccessDenied
    }
    pub fn not_accessible(curriculum_id: CurriculumId) -> Self {
        SocialError::CurriculumNotAccessible(curriculum_id)
    }
    pub fn invalid_content(err: ValidationError) -> Self {
        SocialError::InvalidContent(err)
    }
    pub fn self_reference(user_id: UserId) -> Self {
        SocialError::SelfReference(user_id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        SocialError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SocialError::NotFound(_) => ErrorCode::NotFound,
            SocialError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            SocialError::AccessDenied => ErrorCode::AccessDenied,
            SocialError::CurriculumNotAccessible(_) => ErrorCode::CurriculumNotAccessible,
            SocialError::InvalidContent(_) => ErrorCode::InvalidContent,
            SocialError::SelfReference(_) => ErrorCode::SelfReference,
            SocialError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SocialError::NotFound(what) => format!("{} not found", what),
            SocialError::AlreadyExists(what) => format!("{} already exists", what),
            SocialError::AccessDenied => "Permission denied".to_string(),
            SocialError::CurriculumNotAccessible(id) => {
                format!("Curriculum not accessible: {}", id)
            }
            SocialError::InvalidContent(err) => format!("Invalid content: {}", err),
            SocialError::SelfReference(user_id) => {
                format!("User {} cannot follow themselves", user_id)
            }
            SocialError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for SocialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SocialError {}

impl From<DomainError> for SocialError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::NotFound | ErrorCode::CurriculumNotFound => {
                SocialError::NotFound(err.message)
            }
            // Storage-level uniqueness conflicts are authoritative, even
            // when the creation pre-check passed (race path).
            ErrorCode::AlreadyExists => SocialError::AlreadyExists(err.message),
            ErrorCode::AccessDenied => SocialError::AccessDenied,
            ErrorCode::SelfReference => SocialError::Infrastructure(err.message),
            _ => SocialError::Infrastructure(err.message),
        }
    }
}

impl From<ValidationError> for SocialError {
    fn from(err: ValidationError) -> Self {
        SocialError::InvalidContent(err)
    }
}
