use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// Unauthenticated greeting, also serving as the deployment health check.
#[get("/")]
pub async fn print_default() -> impl Responder {
    HttpResponse::Ok().json(json!({"message": "This is the certifications API server"}))
}
