use actix_web::{HttpResponse, Responder, post, web};
use log::error;
use serde::Deserialize;
use serde_json::json;

use crate::db::DbPool;
use crate::models::auth::AuthenticatedUser;
use crate::repository::admin::DieselDatabaseAdmin;
use crate::routes::service_error_response;
use crate::services::{self, ServiceError};

#[derive(Debug, Deserialize)]
pub struct RecreateParams {
    #[serde(default)]
    pub confirmation: bool,
}

/// Drops and recreates the schema with sample records. Destructive, so the
/// request must carry `?confirmation=true`.
#[post("/database/recreate")]
pub async fn create_database(
    _user: AuthenticatedUser,
    params: web::Query<RecreateParams>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselDatabaseAdmin::new(&pool);
    match services::admin::recreate_database(&repo, params.confirmation) {
        Ok(()) => HttpResponse::Ok().json(json!({"message": "database recreated"})),
        Err(e) => {
            if !matches!(e, ServiceError::ConfirmationRequired) {
                error!("Failed to recreate database: {e}");
            }
            service_error_response(&e)
        }
    }
}
