use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use tracing::info;

mod config;
mod errors;
mod telemetry;

#[path = "data/accounts.rs"]
mod accounts;
#[path = "data/applications.rs"]
mod applications;
#[path = "data/posts.rs"]
mod posts;
#[path = "data/store.rs"]
mod store;

#[path = "utils/directory.rs"]
mod directory;
#[path = "utils/encrypt.rs"]
mod enc;
#[path = "utils/enums.rs"]
mod enums;
#[path = "utils/routes/mod.rs"]
mod routes;
#[path = "utils/session.rs"]
mod session;
#[path = "utils/validate.rs"]
mod validate;
#[path = "utils/workflow.rs"]
mod workflow;


#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = config::AppConfig::from_env().map_err(std::io::Error::other)?;
    telemetry::init(&config.log_filter);

    let record_store = store::RecordStore::new(&config.database_path);
    record_store.init_schema().map_err(std::io::Error::other)?;

    let sessions = session::SessionStore::new();
    let account_directory = directory::AccountDirectory::new(
        record_store.clone(),
        sessions.clone(),
        config.hash_secret.clone(),
    );

    info!(
        host = %config.host,
        port = config.port,
        database = %config.database_path,
        "starting job board backend"
    );

    let bind_to = (config.host.clone(), config.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(record_store.clone()))
            .app_data(web::Data::new(account_directory.clone()))
            .configure(routes::configure)
    })
    .bind(bind_to)?
    .run()
    .await
}
