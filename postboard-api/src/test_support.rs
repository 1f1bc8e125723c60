//! Shared fixtures for handler and repository tests.

use crate::migrator::Migrator;
use crate::service::DbConnection;
use postboard_commons::data_structures::{PostCreate, UserCreate};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

/// Fresh, migrated in-memory SQLite database. A single pooled connection keeps
/// every query on the same in-memory schema.
pub async fn memory_db() -> DbConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    DbConnection::new(db)
}

pub fn user(id: &str) -> UserCreate {
    UserCreate {
        id: id.to_owned(),
        email: format!("{id}@example.com"),
        phone_number: None,
        user_sex: Some("M".to_owned()),
        user_name: format!("User {id}"),
    }
}

pub fn post(title: &str, user_no: i32) -> PostCreate {
    PostCreate {
        title: title.to_owned(),
        content: format!("content of {title}"),
        user_no,
    }
}
