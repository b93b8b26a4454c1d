mod api;
mod blockchain;
mod config;
mod demo;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::info;
use std::env;

use api::AppState;
use config::{Config, Mode};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = Config::from_env();
    let mode = Mode::from_arg(env::args().nth(1).as_deref());

    if mode == Mode::Demo {
        return demo::run(config.search_limits()).map_err(std::io::Error::other);
    }

    info!(
        "⛓️ Starting ledger API at http://{}:{}",
        config.host, config.port
    );

    let state = web::Data::new(AppState::new(config.search_limits()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
