use crate::errors::RelayError;
use crate::handlers::ollama_handler;
use crate::services::ollama_service::OllamaService;
use actix_web::{error::JsonPayloadError, web, Scope};
use log::warn;

pub fn ollama_routes(ollama_service: web::Data<OllamaService>, max_body_bytes: usize) -> Scope {
    web::scope("/api")
        .app_data(ollama_service)
        .app_data(json_config(max_body_bytes))
        .route("/ollama", web::post().to(ollama_handler::generate_handler))
}

// Bodies are parsed as JSON whatever the Content-Type says.
fn json_config(max_body_bytes: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_body_bytes)
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| {
            warn!("Rejected request body: {}", err);
            match err {
                JsonPayloadError::OverflowKnownLength { .. }
                | JsonPayloadError::Overflow { .. } => {
                    RelayError::PayloadTooLarge(err.to_string()).into()
                }
                _ => RelayError::InvalidBody(err.to_string()).into(),
            }
        })
}
