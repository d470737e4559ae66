//! Social module - interaction entities and the authorization core.

mod bookmark;
mod comment;
mod content;
mod errors;
mod follow;
mod like;
mod service;

pub use bookmark::Bookmark;
pub use comment::Comment;
pub use content::{CommentContent, MAX_CONTENT_LENGTH};
pub use errors::SocialError;
pub use follow::Follow;
pub use like::Like;
pub use service::SocialDomainService;
