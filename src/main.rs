mod config;
mod constants;
mod errors;
mod handlers;
mod middleware;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

#[cfg(test)]
mod test_helpers;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use mongodb::bson::doc;
use mongodb::Client;

use crate::config::{StorageBackend, CONFIG};
use crate::constants::MSG_SERVER_RUNNING;
use crate::repositories::Repositories;
use crate::services::{seed_defaults, DrinkService, TriviaService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let repositories = match CONFIG.storage_backend {
        StorageBackend::MongoDb => {
            info!("Connecting to MongoDB...");
            let client = Client::with_uri_str(&CONFIG.mongodb_uri)
                .await
                .expect("Failed to connect to MongoDB");

            let db = client.database(&CONFIG.database_name);

            // Test MongoDB connection
            db.run_command(doc! { "ping": 1 })
                .await
                .expect("Failed to ping MongoDB");
            info!("Connected to MongoDB database {}", CONFIG.database_name);

            Repositories::mongodb(&db)
                .await
                .expect("Failed to create MongoDB indexes")
        }
        StorageBackend::Memory => Repositories::in_memory(),
    };

    seed_defaults(&repositories)
        .await
        .expect("Failed to seed default data");

    // Initialize services
    let trivia_service = web::Data::new(TriviaService::new(&repositories));
    let drink_service = web::Data::new(DrinkService::new(&repositories));

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("{} at http://{}", MSG_SERVER_RUNNING, server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(trivia_service.clone())
            .app_data(drink_service.clone())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await
}
