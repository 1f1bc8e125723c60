//! Pre-mutation checks. The store's constraints stay authoritative; these
//! only produce the precise error before a write is attempted.

use crate::errors::{ServiceError, EMAIL_TAKEN, ID_TAKEN, OWNER_NOT_FOUND};
use crate::repository::{users, UniqueField};
use sea_orm::ConnectionTrait;

pub async fn ensure_user_exists<C: ConnectionTrait>(
    conn: &C,
    user_no: i32,
) -> Result<(), ServiceError> {
    if users::exists(conn, user_no).await? {
        Ok(())
    } else {
        Err(ServiceError::NotFound(OWNER_NOT_FOUND))
    }
}

pub async fn ensure_id_available<C: ConnectionTrait>(
    conn: &C,
    candidate_id: &str,
    excluding_user_no: Option<i32>,
) -> Result<(), ServiceError> {
    ensure_available(conn, UniqueField::Id, candidate_id, excluding_user_no, ID_TAKEN).await
}

pub async fn ensure_email_available<C: ConnectionTrait>(
    conn: &C,
    candidate_email: &str,
    excluding_user_no: Option<i32>,
) -> Result<(), ServiceError> {
    ensure_available(
        conn,
        UniqueField::Email,
        candidate_email,
        excluding_user_no,
        EMAIL_TAKEN,
    )
    .await
}

async fn ensure_available<C: ConnectionTrait>(
    conn: &C,
    field: UniqueField,
    candidate: &str,
    excluding_user_no: Option<i32>,
    message: &'static str,
) -> Result<(), ServiceError> {
    match users::find_by_unique_field(conn, field, candidate).await? {
        Some(holder) if Some(holder.user_no) != excluding_user_no => {
            Err(ServiceError::Conflict(message))
        }
        _ => Ok(()),
    }
}
