//! User module - identity attributes used by the social core.

mod user;
mod values;

pub use user::User;
pub use values::{
    DisplayName, Email, Password, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
