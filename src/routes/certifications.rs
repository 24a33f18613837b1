use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use chrono::{NaiveDate, Utc};
use log::error;
use serde_json::json;
use tera::Tera;
use validator::Validate;

use crate::db::DbPool;
use crate::domain::certification::NewCertification;
use crate::dto::certification::CertificationOut;
use crate::forms::certification::NewCertificationForm;
use crate::models::auth::AuthenticatedUser;
use crate::repository::certification::DieselCertificationRepository;
use crate::repository::{CertificationListQuery, Validity};
use crate::routes::{
    PageParams, handle_listing, listing_response, service_error_response, validate_page_params,
};
use crate::services;
use crate::services::certifications::SearchOutcome;

pub const MSG_RETRIEVED: &str = "Certification data retrieved successfully";
pub const MSG_RETRIEVED_INVALID: &str = "inValid certification data retrieved successfully";
pub const MSG_RETRIEVED_VALID: &str = "Valid certification data retrieved successfully";
pub const MSG_RETRIEVED_BY_KEYWORD: &str = "Certification data retrieved successfully by keyword";
pub const MSG_RETRIEVED_BY_SEARCH: &str = "Certification data retrieved successfully by search";
pub const MSG_NO_SEARCH_TERMS: &str = "no valid search terms";

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Maps a validity path segment to its expiry-date bucket.
fn parse_status(segment: &str) -> Option<Validity> {
    match segment {
        "nodate" => Some(Validity::NoExpiry),
        "invalid" => Some(Validity::Expired),
        "valid" => Some(Validity::Valid),
        _ => None,
    }
}

#[get("/certifications")]
pub async fn get_all_certs(
    _user: AuthenticatedUser,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let query = CertificationListQuery::new(today());
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED)
}

#[get("/certifications/nodate")]
pub async fn get_nodate_certs(
    _user: AuthenticatedUser,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let query = CertificationListQuery::new(today()).validity(Validity::NoExpiry);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED)
}

#[get("/certifications/invalid")]
pub async fn get_invalid_certs(
    _user: AuthenticatedUser,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let query = CertificationListQuery::new(today()).validity(Validity::Expired);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED_INVALID)
}

#[get("/certifications/valid")]
pub async fn get_valid_certs(
    _user: AuthenticatedUser,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let query = CertificationListQuery::new(today()).validity(Validity::Valid);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED_VALID)
}

#[get("/certifications/id/{id}")]
pub async fn get_cert_by_id(
    _user: AuthenticatedUser,
    path: web::Path<i32>,
    pool: web::Data<DbPool>,
) -> impl Responder {
    let repo = DieselCertificationRepository::new(&pool);
    match services::certifications::get_certification_by_id(&repo, path.into_inner()) {
        Ok(Some(cert)) => HttpResponse::Ok().json(CertificationOut::from(cert)),
        Ok(None) => HttpResponse::NotFound().json(json!({"message": "Certification not found"})),
        Err(e) => {
            error!("Failed to fetch certification: {e}");
            service_error_response(&e)
        }
    }
}

#[get("/certifications/name/{employeename}")]
pub async fn get_certs_by_name(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let employeename = path.into_inner();
    let query = CertificationListQuery::new(today()).employee_name(employeename);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED)
}

#[get("/certifications/name/{employeename}/status/{status}")]
pub async fn get_certs_by_name_status(
    _user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let (employeename, status) = path.into_inner();
    let Some(validity) = parse_status(&status) else {
        return HttpResponse::BadRequest().json(json!({
            "message": format!("unknown validity filter: {status}"),
        }));
    };
    let message = match validity {
        Validity::Expired => MSG_RETRIEVED_INVALID,
        Validity::Valid => MSG_RETRIEVED_VALID,
        Validity::NoExpiry => MSG_RETRIEVED,
    };
    let query = CertificationListQuery::new(today())
        .employee_name(employeename)
        .validity(validity);
    handle_listing(&pool, &tera, req.path(), &params, query, message)
}

#[get("/certifications/name/{employeename}/keyword/{tkeyword}")]
pub async fn get_certs_by_name_keyword(
    _user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let (employeename, tkeyword) = path.into_inner();
    let query = CertificationListQuery::new(today())
        .employee_name(employeename)
        .keyword(tkeyword);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED_BY_KEYWORD)
}

#[get("/certifications/name/{employeename}/search/{phrase}")]
pub async fn get_certs_by_name_search(
    _user: AuthenticatedUser,
    path: web::Path<(String, String)>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let (employeename, phrase) = path.into_inner();
    let query = CertificationListQuery::new(today()).employee_name(employeename);
    search_listing(&pool, &tera, req.path(), &params, &phrase, query)
}

#[get("/certifications/keyword/{tkeyword}")]
pub async fn get_certs_by_keyword(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let tkeyword = path.into_inner();
    let query = CertificationListQuery::new(today()).keyword(tkeyword);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED_BY_KEYWORD)
}

#[get("/certifications/certtype/{tcerttype}")]
pub async fn get_certs_by_certtype(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let tcerttype = path.into_inner();
    let query = CertificationListQuery::new(today()).certificate_type(tcerttype);
    handle_listing(&pool, &tera, req.path(), &params, query, MSG_RETRIEVED)
}

#[get("/certifications/search/{phrase}")]
pub async fn search_certs(
    _user: AuthenticatedUser,
    path: web::Path<String>,
    params: web::Query<PageParams>,
    pool: web::Data<DbPool>,
    tera: web::Data<Tera>,
    req: HttpRequest,
) -> impl Responder {
    if let Err(response) = validate_page_params(&params) {
        return response;
    }
    let phrase = path.into_inner();
    let query = CertificationListQuery::new(today());
    search_listing(&pool, &tera, req.path(), &params, &phrase, query)
}

/// Shared free-text path: tokenize, short-circuit on a stopword-only
/// phrase, otherwise list with the surviving terms.
fn search_listing(
    pool: &DbPool,
    tera: &Tera,
    path: &str,
    params: &PageParams,
    phrase: &str,
    query: CertificationListQuery,
) -> HttpResponse {
    let repo = DieselCertificationRepository::new(pool);
    let query = query.paginate(params.page, params.per_page);
    match services::certifications::search_certifications(&repo, phrase, query) {
        Ok(SearchOutcome::NoTerms) => {
            listing_response(tera, path, params, 0, vec![], MSG_NO_SEARCH_TERMS)
        }
        Ok(SearchOutcome::Found {
            total,
            certifications,
        }) => listing_response(tera, path, params, total, certifications, MSG_RETRIEVED_BY_SEARCH),
        Err(e) => {
            error!("Failed to search certifications: {e}");
            service_error_response(&e)
        }
    }
}

#[post("/certifications")]
pub async fn create_record(
    _user: AuthenticatedUser,
    pool: web::Data<DbPool>,
    web::Json(form): web::Json<NewCertificationForm>,
) -> impl Responder {
    if let Err(e) = form.validate() {
        return HttpResponse::BadRequest().json(json!({"message": e.to_string()}));
    }

    let new_certification: NewCertification = form.into();
    let repo = DieselCertificationRepository::new(&pool);
    match services::certifications::create_certification(&repo, &new_certification) {
        Ok(cert) => HttpResponse::Created().json(CertificationOut::from(cert)),
        Err(e) => {
            error!("Failed to create certification: {e}");
            service_error_response(&e)
        }
    }
}
