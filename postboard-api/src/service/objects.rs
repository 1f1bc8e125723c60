use crate::entity::posts;
use crate::errors::ServiceError;
use crate::repository::UserRecord;
use actix_web::{error, web, HttpRequest};
use postboard_commons::data_structures::{Post, User};

#[derive(Clone)]
pub struct DbConnection {
    pub(crate) db_connection: sea_orm::DatabaseConnection,
}
impl DbConnection {
    pub fn new(db_connection: sea_orm::prelude::DatabaseConnection) -> Self {
        Self { db_connection }
    }
}

impl From<posts::Model> for Post {
    fn from(model: posts::Model) -> Self {
        Post {
            title: model.title,
            content: model.content,
            post_no: model.post_no,
            reg_date: model.reg_date,
            user_no: model.user_no,
        }
    }
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        let UserRecord { user, posts } = record;
        User {
            id: user.id,
            email: user.email,
            phone_number: user.phone_number,
            user_sex: user.user_sex,
            user_name: user.user_name,
            user_no: user.user_no,
            reg_date: user.reg_date,
            posts: posts.into_iter().map(Post::from).collect(),
        }
    }
}

// Extractor failures are structural validation errors and share one body shape.

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: error::JsonPayloadError, _: &HttpRequest| {
        ServiceError::Validation(err.to_string()).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _: &HttpRequest| {
        ServiceError::Validation(err.to_string()).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _: &HttpRequest| {
        ServiceError::Validation(err.to_string()).into()
    })
}
