pub mod auth;
pub mod pet;

pub use auth::{LoginForm, Session};
pub use pet::{dedup_by_id, filter_by_name, Category, Pet, PetStatus, Tag};
