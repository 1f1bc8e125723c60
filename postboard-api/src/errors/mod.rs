use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::{error, warn};
use postboard_commons::data_structures::ErrorDetail;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

pub const USER_NOT_FOUND: &str = "User not found";
pub const OWNER_NOT_FOUND: &str = "Owner User not found";
pub const POST_NOT_FOUND: &str = "Post not found";
pub const ID_TAKEN: &str = "ID already registered";
pub const EMAIL_TAKEN: &str = "Email already registered";

const INTERNAL: &str = "Internal Server Error";

#[derive(Error, Debug)]
pub enum ServiceError {
    /// Request body, path or query could not be parsed into the expected shape.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    /// The store rejected a write that the pre-checks could not attribute.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("database error")]
    Database {
        #[source]
        source: DbErr,
    },
}

impl From<DbErr> for ServiceError {
    fn from(source: DbErr) -> Self {
        match source.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                warn!("unique constraint rejected write after pre-check: {}", msg);
                if names_column(&msg, "email") {
                    ServiceError::Conflict(EMAIL_TAKEN)
                } else if names_column(&msg, "id") {
                    ServiceError::Conflict(ID_TAKEN)
                } else {
                    ServiceError::ConstraintViolation(msg)
                }
            }
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                warn!("foreign key rejected write after pre-check: {}", msg);
                ServiceError::NotFound(OWNER_NOT_FOUND)
            }
            _ => ServiceError::Database { source },
        }
    }
}

/// Matches the way sqlite (`users.email`), mysql (`'users.email'`) and
/// postgres (`users_email_key`) name the violated column.
fn names_column(msg: &str, column: &str) -> bool {
    msg.contains(&format!("users.{column}")) || msg.contains(&format!("users_{column}"))
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServiceError::ConstraintViolation(_) | ServiceError::Database { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let detail = match self {
            ServiceError::Validation(msg) => ErrorDetail::new(msg.as_str()),
            ServiceError::NotFound(msg) | ServiceError::Conflict(msg) => ErrorDetail::new(*msg),
            ServiceError::ConstraintViolation(msg) => {
                error!("unattributed constraint violation: {}", msg);
                ErrorDetail::new(INTERNAL)
            }
            ServiceError::Database { source } => {
                error!("database error: {:?}", source);
                ErrorDetail::new(INTERNAL)
            }
        };
        HttpResponse::build(self.status_code()).json(detail)
    }
}
