use env_logger::Env;
use log::info;
use sea_orm_migration::prelude::*;

#[async_std::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("like domain migrations: {} registered", migration::Migrator::migrations().len());
    cli::run_cli(migration::Migrator).await;
}
