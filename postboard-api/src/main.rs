mod args;
mod entity;
mod errors;
mod migrator;
mod repository;
mod service;
mod session;
#[cfg(test)]
mod test_support;
use actix_cors::Cors;
use args::RunArgs;
use clap::Parser;

use actix_web::{self, dev::Server, middleware::Logger, web, App, HttpServer};
use log::{log, Level};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Statement,
};
use sea_orm_migration::MigratorTrait;
use service::DbConnection;

fn configure_services(cfg: &mut web::ServiceConfig) {
    cfg.app_data(service::json_config())
        .app_data(service::path_config())
        .app_data(service::query_config());
    cfg.service(service::hello_world);
    cfg.service(service::openapi_json);
    service::users::configure_service(cfg);
    service::posts::configure_service(cfg);
}

async fn setup_database(args: &RunArgs) -> Result<DatabaseConnection, DbErr> {
    let mut c_opt = ConnectOptions::new(args.db.as_str());
    c_opt.sqlx_logging(false);

    let db = Database::connect(c_opt).await?;

    let db = match (db.get_database_backend(), &args.db_name) {
        (DbBackend::MySql, Some(db_name)) => {
            db.execute(Statement::from_string(
                db.get_database_backend(),
                format!("CREATE DATABASE IF NOT EXISTS `{}`;", db_name),
            ))
            .await?;
            let url = format!("{}/{}", args.db.trim_end_matches('/'), db_name);
            Database::connect(&url).await?
        }
        _ => db,
    };
    if args.fresh {
        log!(Level::Warn, "dropping all tables before migrating");
        migrator::Migrator::fresh(&db).await?;
    }
    migrator::Migrator::up(&db, None).await?;

    Ok(db)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = RunArgs::parse();

    log!(
        Level::Info,
        "Running postboard server on {}:{} with database url: {}",
        &args.address,
        &args.port,
        &args.db,
    );
    create_and_run_server(&args).await?.await?;
    Ok(())
}

async fn create_and_run_server(args: &RunArgs) -> std::io::Result<Server> {
    let db = setup_database(args).await.map_err(|e| {
        log!(Level::Error, "database setup error: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let db = DbConnection::new(db);
    Ok(HttpServer::new(move || {
        let cors = Cors::permissive();
        App::new()
            .configure(configure_services)
            .app_data(web::Data::new(db.clone()))
            .wrap(Logger::default())
            .wrap(cors)
    })
    .bind((args.address.clone(), args.port))?
    .run())
}
