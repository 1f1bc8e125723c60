use postboard_commons::data_structures::{ErrorDetail, Post, PostCreate, PostUpdate, User, UserCreate};
use utoipa::OpenApi;

/// Served at `/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "postboard API",
        description = "CRUD over users and the posts they own."
    ),
    paths(
        crate::service::users::users_create,
        crate::service::users::users_list,
        crate::service::users::users_read,
        crate::service::users::users_update,
        crate::service::users::users_delete,
        crate::service::posts::posts_create,
        crate::service::posts::posts_list,
        crate::service::posts::posts_read,
        crate::service::posts::posts_update,
        crate::service::posts::posts_delete,
    ),
    components(schemas(User, UserCreate, Post, PostCreate, PostUpdate, ErrorDetail)),
    tags(
        (name = "users", description = "User accounts"),
        (name = "posts", description = "Posts owned by users")
    )
)]
pub struct ApiDoc;
