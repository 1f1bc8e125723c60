use super::errors::ServiceError;
use super::service::DbConnection;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use log::{debug, error};
use sea_orm::{DatabaseTransaction, DbErr, TransactionTrait};
use std::future::Future;
use std::pin::Pin;

/// One transaction bound to one request.
///
/// Extracting a `RequestSession` begins the transaction. [`RequestSession::commit`]
/// ends it; every other exit path drops the session and rolls back.
pub struct RequestSession {
    txn: Option<DatabaseTransaction>,
}

impl RequestSession {
    pub async fn begin(db: &DbConnection) -> Result<Self, DbErr> {
        let txn = db.db_connection.begin().await?;
        Ok(Self { txn: Some(txn) })
    }

    pub fn conn(&self) -> Result<&DatabaseTransaction, ServiceError> {
        self.txn.as_ref().ok_or_else(|| ServiceError::Database {
            source: DbErr::Custom("session already released".to_owned()),
        })
    }

    pub async fn commit(mut self) -> Result<(), ServiceError> {
        match self.txn.take() {
            Some(txn) => Ok(txn.commit().await?),
            None => Ok(()),
        }
    }
}

impl Drop for RequestSession {
    fn drop(&mut self) {
        if self.txn.is_some() {
            // DatabaseTransaction rolls itself back on drop
            debug!("request session released without commit, rolling back");
        }
    }
}

impl FromRequest for RequestSession {
    type Error = ServiceError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let db = req.app_data::<web::Data<DbConnection>>().cloned();
        Box::pin(async move {
            let Some(db) = db else {
                error!("no database connection registered with the app");
                return Err(ServiceError::Database {
                    source: DbErr::Custom("database connection missing".to_owned()),
                });
            };
            Ok(RequestSession::begin(&db).await?)
        })
    }
}
