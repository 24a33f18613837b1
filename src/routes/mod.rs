use actix_web::{HttpResponse, web};
use log::error;
use serde::Deserialize;
use serde_json::json;
use tera::{Context, Tera};
use validator::Validate;

use crate::db::DbPool;
use crate::domain::certification::Certification;
use crate::dto::certification::{CertificationOut, CertificationsResponse};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, PageInfo, PageLinks};
use crate::repository::CertificationListQuery;
use crate::repository::certification::DieselCertificationRepository;
use crate::services::{self, ServiceError};

pub mod admin;
pub mod certifications;
pub mod main;

/// Pagination query parameters shared by every listing endpoint.
///
/// Range violations are rejected here with 400 before any query runs; the
/// query and pagination code below this layer can assume valid values.
#[derive(Debug, Deserialize, Validate)]
pub struct PageParams {
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: usize,
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, max = 300))]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

/// Renders the HTML table fragment embedded in listing responses.
pub(crate) fn render_certifications_table(
    tera: &Tera,
    certs: &[CertificationOut],
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("certs", certs);
    tera.render("certifications/table.html", &context)
}

/// Maps a service failure onto the HTTP response the client sees.
pub(crate) fn service_error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::ConfirmationRequired => HttpResponse::BadRequest().json(json!({
            "message": "error: confirmation is missing",
            "detail": {"error": "check the API for how to confirm"},
        })),
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({"message": "Certification not found"}))
        }
        ServiceError::Unauthorized => HttpResponse::Unauthorized().finish(),
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({"message": message}))
        }
        ServiceError::Repository(_) => HttpResponse::InternalServerError().finish(),
    }
}

/// Assembles the shared listing payload: record page, rendered table,
/// navigation links and the endpoint's status message.
pub(crate) fn listing_response(
    tera: &Tera,
    path: &str,
    params: &PageParams,
    total: usize,
    certifications: Vec<Certification>,
    message: &str,
) -> HttpResponse {
    let certs: Vec<CertificationOut> = certifications.into_iter().map(Into::into).collect();

    let table = match render_certifications_table(tera, &certs) {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to render certifications table: {e}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let info = PageInfo::new(params.page, params.per_page, total);
    let links = PageLinks::new(path, info);

    HttpResponse::Ok().json(CertificationsResponse::assemble(certs, table, links, message))
}

/// Runs one filtered listing end to end. Every `GET /certifications*`
/// variant funnels through here so the pagination and link handling exist
/// exactly once.
pub(crate) fn handle_listing(
    pool: &DbPool,
    tera: &Tera,
    path: &str,
    params: &PageParams,
    query: CertificationListQuery,
    message: &str,
) -> HttpResponse {
    let repo = DieselCertificationRepository::new(pool);
    let query = query.paginate(params.page, params.per_page);

    match services::certifications::list_certifications(&repo, query) {
        Ok((total, certifications)) => {
            listing_response(tera, path, params, total, certifications, message)
        }
        Err(e) => {
            error!("Failed to list certifications: {e}");
            service_error_response(&e)
        }
    }
}

/// Validates pagination parameters, answering the 400 payload on failure.
pub(crate) fn validate_page_params(params: &web::Query<PageParams>) -> Result<(), HttpResponse> {
    params.validate().map_err(|e| {
        HttpResponse::BadRequest().json(json!({"message": e.to_string()}))
    })
}
