use super::validation;
use super::ServiceResult;
use crate::errors::{ServiceError, USER_NOT_FOUND};
use crate::repository::users;
use crate::session::RequestSession;
use actix_web::{
    web::{self, Json, Path, Query},
    HttpResponse,
};
use log::{debug, log, Level};
use postboard_commons::data_structures::{ErrorDetail, ListQuery, User, UserCreate};

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    let users_scope = web::scope("/users")
        .service(users_create)
        .service(users_list)
        .service(users_read)
        .service(users_update)
        .service(users_delete);
    cfg.service(users_scope);
}

#[utoipa::path(
    post,
    path = "/users/",
    request_body = UserCreate,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "ID or email already registered", body = ErrorDetail),
        (status = 422, description = "Malformed body", body = ErrorDetail)
    ),
    tag = "users"
)]
#[actix_web::post("/")]
pub async fn users_create(creation_data: Json<UserCreate>, session: RequestSession) -> ServiceResult {
    let creation = creation_data.into_inner();
    let conn = session.conn()?;
    validation::ensure_id_available(conn, &creation.id, None).await?;
    validation::ensure_email_available(conn, &creation.email, None).await?;

    let record = users::insert(conn, creation).await?;
    session.commit().await?;
    log!(
        Level::Info,
        "created user {} with user_no {}",
        record.user.id,
        record.user.user_no
    );
    Ok(HttpResponse::Ok().json(User::from(record)))
}

#[utoipa::path(
    get,
    path = "/users/",
    params(ListQuery),
    responses(
        (status = 200, description = "Users ordered by user_no", body = [User]),
        (status = 422, description = "Malformed query", body = ErrorDetail)
    ),
    tag = "users"
)]
#[actix_web::get("/")]
pub async fn users_list(query: Query<ListQuery>, session: RequestSession) -> ServiceResult {
    let ListQuery { skip, limit } = query.into_inner();
    let records = users::list(session.conn()?, skip, limit).await?;
    session.commit().await?;
    debug!("listed {} users (skip {}, limit {})", records.len(), skip, limit);
    Ok(HttpResponse::Ok().json(records.into_iter().map(User::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/users/{user_no}",
    params(("user_no" = i32, Path, description = "User key")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found", body = ErrorDetail)
    ),
    tag = "users"
)]
#[actix_web::get("/{user_no}")]
pub async fn users_read(user_no: Path<i32>, session: RequestSession) -> ServiceResult {
    let record = users::find_by_id(session.conn()?, user_no.into_inner())
        .await?
        .ok_or(ServiceError::NotFound(USER_NOT_FOUND))?;
    session.commit().await?;
    Ok(HttpResponse::Ok().json(User::from(record)))
}

#[utoipa::path(
    put,
    path = "/users/{user_no}",
    params(("user_no" = i32, Path, description = "User key")),
    request_body = UserCreate,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "ID or email already registered", body = ErrorDetail),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 422, description = "Malformed body", body = ErrorDetail)
    ),
    tag = "users"
)]
#[actix_web::put("/{user_no}")]
pub async fn users_update(
    user_no: Path<i32>,
    update_data: Json<UserCreate>,
    session: RequestSession,
) -> ServiceResult {
    let user_no = user_no.into_inner();
    let update = update_data.into_inner();
    let conn = session.conn()?;
    let Some(user) = users::find_row(conn, user_no).await? else {
        return Err(ServiceError::NotFound(USER_NOT_FOUND));
    };
    validation::ensure_id_available(conn, &update.id, Some(user_no)).await?;
    validation::ensure_email_available(conn, &update.email, Some(user_no)).await?;

    let record = users::update_model(conn, user, update).await?;
    session.commit().await?;
    log!(Level::Info, "updated user_no {}", user_no);
    Ok(HttpResponse::Ok().json(User::from(record)))
}

#[utoipa::path(
    delete,
    path = "/users/{user_no}",
    params(("user_no" = i32, Path, description = "User key")),
    responses(
        (status = 200, description = "The deleted user with its former posts", body = User),
        (status = 404, description = "User not found", body = ErrorDetail)
    ),
    tag = "users"
)]
#[actix_web::delete("/{user_no}")]
pub async fn users_delete(user_no: Path<i32>, session: RequestSession) -> ServiceResult {
    let user_no = user_no.into_inner();
    let record = users::delete(session.conn()?, user_no)
        .await?
        .ok_or(ServiceError::NotFound(USER_NOT_FOUND))?;
    session.commit().await?;
    log!(
        Level::Info,
        "deleted user_no {} and {} owned posts",
        user_no,
        record.posts.len()
    );
    Ok(HttpResponse::Ok().json(User::from(record)))
}
