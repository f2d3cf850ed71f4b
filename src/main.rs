use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::io;

use infra::config::AppConfigImpl;
use log::info;
use log4rs::{
    append::{console::ConsoleAppender, file::FileAppender},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use migration::{Migrator, MigratorTrait};

// 日志同时输出到控制台和文件
fn init_logging(log_file: &str) -> io::Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {m}{n}",
        )))
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(file_appender)))
        .appender(Appender::builder().build("stdout", Box::new(ConsoleAppender::builder().build())))
        .build(
            Root::builder()
                .appender("file")
                .appender("stdout")
                .build(log_level.parse().unwrap_or(log::LevelFilter::Info)),
        )
        .map_err(|e| io::Error::other(e.to_string()))?;

    log4rs::init_config(config).map_err(io::Error::other)?;
    Ok(())
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let cfg = AppConfigImpl::load().map_err(io::Error::other)?;
    init_logging(cfg.log_file())?;

    let db = server::AppState::init_db(&cfg.database())
        .await
        .map_err(io::Error::other)?;
    if cfg.auto_migrate() {
        Migrator::up(&db, None).await.map_err(io::Error::other)?;
        info!("Database schema is up to date");
    }

    let server_cfg = cfg.server();
    let cors_origins = cfg.cors_allowed_origins().to_vec();
    let app_state = web::Data::new(server::AppState::new(db));

    info!("Listening on {}:{}", server_cfg.host, server_cfg.port);
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(server::error::json_config())
            .wrap(Logger::default())
            .wrap(server::middleware::cors::cors(&cors_origins))
            .configure(server::like_api::configure_service)
    })
    .bind((server_cfg.host.as_str(), server_cfg.port))?
    .run()
    .await
}
