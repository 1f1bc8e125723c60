use super::validation;
use super::ServiceResult;
use crate::errors::{ServiceError, POST_NOT_FOUND};
use crate::repository::posts;
use crate::session::RequestSession;
use actix_web::{
    web::{self, Json, Path, Query},
    HttpResponse,
};
use log::{debug, info};
use postboard_commons::data_structures::{ErrorDetail, ListQuery, Post, PostCreate, PostUpdate};

pub fn configure_service(cfg: &mut web::ServiceConfig) {
    let posts_scope = web::scope("/posts")
        .service(posts_create)
        .service(posts_list)
        .service(posts_read)
        .service(posts_update)
        .service(posts_delete);
    cfg.service(posts_scope);
}

#[utoipa::path(
    post,
    path = "/posts/",
    request_body = PostCreate,
    responses(
        (status = 200, description = "Created post", body = Post),
        (status = 404, description = "Owner User not found", body = ErrorDetail),
        (status = 422, description = "Malformed body", body = ErrorDetail)
    ),
    tag = "posts"
)]
#[actix_web::post("/")]
pub async fn posts_create(post_data: Json<PostCreate>, session: RequestSession) -> ServiceResult {
    let post_data = post_data.into_inner();
    let conn = session.conn()?;
    validation::ensure_user_exists(conn, post_data.user_no).await?;

    let post = posts::insert(conn, post_data).await?;
    session.commit().await?;
    info!("created post {} for user_no {}", post.post_no, post.user_no);
    Ok(HttpResponse::Ok().json(Post::from(post)))
}

#[utoipa::path(
    get,
    path = "/posts/",
    params(ListQuery),
    responses(
        (status = 200, description = "Posts ordered by post_no", body = [Post]),
        (status = 422, description = "Malformed query", body = ErrorDetail)
    ),
    tag = "posts"
)]
#[actix_web::get("/")]
pub async fn posts_list(query: Query<ListQuery>, session: RequestSession) -> ServiceResult {
    let ListQuery { skip, limit } = query.into_inner();
    let posts = posts::list(session.conn()?, skip, limit).await?;
    session.commit().await?;
    debug!("listed {} posts (skip {}, limit {})", posts.len(), skip, limit);
    Ok(HttpResponse::Ok().json(posts.into_iter().map(Post::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/posts/{post_no}",
    params(("post_no" = i32, Path, description = "Post key")),
    responses(
        (status = 200, description = "Post", body = Post),
        (status = 404, description = "Post not found", body = ErrorDetail)
    ),
    tag = "posts"
)]
#[actix_web::get("/{post_no}")]
pub async fn posts_read(post_no: Path<i32>, session: RequestSession) -> ServiceResult {
    let post = posts::find_by_id(session.conn()?, post_no.into_inner())
        .await?
        .ok_or(ServiceError::NotFound(POST_NOT_FOUND))?;
    session.commit().await?;
    Ok(HttpResponse::Ok().json(Post::from(post)))
}

#[utoipa::path(
    put,
    path = "/posts/{post_no}",
    params(("post_no" = i32, Path, description = "Post key")),
    request_body = PostUpdate,
    responses(
        (status = 200, description = "Updated post", body = Post),
        (status = 404, description = "Post not found", body = ErrorDetail),
        (status = 422, description = "Malformed body", body = ErrorDetail)
    ),
    tag = "posts"
)]
#[actix_web::put("/{post_no}")]
pub async fn posts_update(
    post_no: Path<i32>,
    post_data: Json<PostUpdate>,
    session: RequestSession,
) -> ServiceResult {
    let post = posts::update(session.conn()?, post_no.into_inner(), post_data.into_inner())
        .await?
        .ok_or(ServiceError::NotFound(POST_NOT_FOUND))?;
    session.commit().await?;
    info!("updated post {}", post.post_no);
    Ok(HttpResponse::Ok().json(Post::from(post)))
}

#[utoipa::path(
    delete,
    path = "/posts/{post_no}",
    params(("post_no" = i32, Path, description = "Post key")),
    responses(
        (status = 200, description = "The deleted post", body = Post),
        (status = 404, description = "Post not found", body = ErrorDetail)
    ),
    tag = "posts"
)]
#[actix_web::delete("/{post_no}")]
pub async fn posts_delete(post_no: Path<i32>, session: RequestSession) -> ServiceResult {
    let post = posts::delete(session.conn()?, post_no.into_inner())
        .await?
        .ok_or(ServiceError::NotFound(POST_NOT_FOUND))?;
    session.commit().await?;
    info!("deleted post {}", post.post_no);
    Ok(HttpResponse::Ok().json(Post::from(post)))
}
