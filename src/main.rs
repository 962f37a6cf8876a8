use std::process::ExitCode;

use actix_web::{App, HttpServer, middleware, web};
use config::{Config, Environment, File};
use trivia_api::db::{establish_connection_pool, run_pending_migrations};
use trivia_api::models::config::ServerConfig;
use trivia_api::repository::DieselRepository;
use trivia_api::routes;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    Config::builder()
        .set_default("database_url", "trivia.db")?
        .set_default("address", "127.0.0.1")?
        .set_default("port", 5000)?
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match load_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection pool: {e}");
            return ExitCode::FAILURE;
        }
    };

    let migrated = pool
        .get()
        .map_err(|e| e.to_string())
        .and_then(|mut conn| run_pending_migrations(&mut conn).map_err(|e| e.to_string()));
    if let Err(e) = migrated {
        log::error!("Failed to run database migrations: {e}");
        return ExitCode::FAILURE;
    }

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting trivia service on {}:{}",
        bind_address.0,
        bind_address.1
    );

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(routes::cors())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind(bind_address);

    let result = match server {
        Ok(server) => server.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {e}");
            ExitCode::FAILURE
        }
    }
}
