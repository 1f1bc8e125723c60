mod doc;
mod objects;
pub mod posts;
pub mod users;
pub mod validation;

use super::errors::ServiceError;
use actix_web::{self, web, HttpResponse, Responder};
pub use doc::ApiDoc;
pub use objects::DbConnection;
pub use objects::{json_config, path_config, query_config};
use postboard_commons::data_structures::Welcome;
use utoipa::OpenApi;

pub type ServiceResult = Result<HttpResponse, ServiceError>;

#[actix_web::get("/")]
pub async fn hello_world() -> impl Responder {
    web::Json(Welcome {
        message: "Welcome to the postboard API!".to_owned(),
    })
}

#[actix_web::get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests;
