use crate::errors::RelayError;
use crate::models::generation::GenerationRequest;
use crate::services::ollama_service::OllamaService;
use actix_web::{http::StatusCode, web, HttpResponse};
use log::warn;

pub async fn generate_handler(
    request: web::Json<GenerationRequest>,
    ollama_service: web::Data<OllamaService>,
) -> Result<HttpResponse, RelayError> {
    let payload = request.into_inner().into_payload().map_err(|e| {
        warn!("Rejected generation request: {}", e);
        e
    })?;

    let reply = ollama_service.generate(&payload).await?;
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);

    Ok(HttpResponse::build(status)
        .content_type("application/json")
        .body(reply.body))
}
