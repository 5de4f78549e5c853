use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use ollama_relay::config::Config;
use ollama_relay::routes;
use ollama_relay::services::ollama_service::OllamaService;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let ollama_service = web::Data::new(
        OllamaService::new(config.ollama_api_url.clone(), config.request_timeout)
            .map_err(io::Error::other)?,
    );

    info!(
        "Relaying to {} (timeout {:?}), listening on {}:{}",
        ollama_service.url(),
        config.request_timeout,
        config.host,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(ollama_relay::cors())
            .wrap(Logger::default())
            .service(routes::ollama::ollama_routes(
                ollama_service.clone(),
                config.max_body_bytes,
            ))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
