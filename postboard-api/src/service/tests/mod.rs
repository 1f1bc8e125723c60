//! In-process HTTP tests against a fresh in-memory database per test.


use crate::service::DbConnection;
use crate::test_support::memory_db;
use actix_http::Request;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web, App,
};
use serde_json::{json, Value};

pub(super) async fn init_app(
    db: DbConnection,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(db))
            .configure(crate::configure_services),
    )
    .await
}

pub(super) async fn fresh_app(
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    init_app(memory_db().await).await
}

/// Sends the request and returns the status with the decoded JSON body.
pub(super) async fn send<S>(app: &S, req: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req.to_request()).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

pub(super) async fn create_user<S>(app: &S, id: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        TestRequest::post().uri("/users/").set_json(json!({
            "id": id,
            "email": format!("{id}@example.com"),
            "user_name": format!("User {id}"),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

pub(super) async fn create_post<S>(app: &S, title: &str, user_no: i64) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        TestRequest::post().uri("/posts/").set_json(json!({
            "title": title,
            "content": format!("body of {title}"),
            "user_no": user_no,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body
}

pub(super) fn detail(body: &Value) -> &str {
    body["detail"].as_str().unwrap_or_default()
}

#[actix_web::test]
async fn root_greets() {
    let app = fresh_app().await;
    let (status, body) = send(&app, TestRequest::get().uri("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().starts_with("Welcome"));
}

#[actix_web::test]
async fn openapi_lists_both_resources() {
    let app = fresh_app().await;
    let (status, body) = send(&app, TestRequest::get().uri("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    let paths = body["paths"].as_object().unwrap();
    for path in ["/users/", "/users/{user_no}", "/posts/", "/posts/{post_no}"] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
