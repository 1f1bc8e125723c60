//! Entity Repository: translates domain operations into SeaORM calls.
//!
//! Every function is generic over [`sea_orm::ConnectionTrait`] so that it runs
//! inside the request's transaction. Nothing here commits; the caller's
//! [`crate::session::RequestSession`] owns the transaction boundary.

pub mod posts;
pub mod users;

pub use users::{UniqueField, UserRecord};

#[cfg(test)]
mod tests;
