//! Business logic layer

mod user;

pub use user::{UserService, LOGIN_FAILED};
