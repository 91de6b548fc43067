//! Users module - accounts for the authentication layer.

mod users_model;
mod users_traits;

pub use users_model::{normalize_email, NewUser, User};
pub use users_traits::UserRepositoryTrait;
