use crate::domain::certification::{Certification, NewCertification};
use crate::repository::{CertificationListQuery, CertificationReader, CertificationWriter};
use crate::search;
use crate::services::{ServiceError, ServiceResult};

/// Outcome of a free-text search request.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every word of the phrase was a stopword; the store was not queried.
    NoTerms,
    /// Total match count plus the requested page of records.
    Found {
        total: usize,
        certifications: Vec<Certification>,
    },
}

/// Returns the total match count and the requested page for the given
/// filter intent.
pub fn list_certifications<R>(
    repo: &R,
    query: CertificationListQuery,
) -> ServiceResult<(usize, Vec<Certification>)>
where
    R: CertificationReader + ?Sized,
{
    repo.list(query).map_err(ServiceError::from)
}

/// Tokenizes the phrase and runs a free-text search. Short-circuits with
/// [`SearchOutcome::NoTerms`] before any store access when nothing but
/// stopwords survive.
pub fn search_certifications<R>(
    repo: &R,
    phrase: &str,
    query: CertificationListQuery,
) -> ServiceResult<SearchOutcome>
where
    R: CertificationReader + ?Sized,
{
    let terms = search::tokenize(phrase);
    if terms.is_empty() {
        return Ok(SearchOutcome::NoTerms);
    }

    let (total, certifications) = repo.list(query.terms(terms))?;
    Ok(SearchOutcome::Found {
        total,
        certifications,
    })
}

/// Fetches a single certification by its identifier.
pub fn get_certification_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<Certification>>
where
    R: CertificationReader + ?Sized,
{
    repo.get_by_id(id).map_err(ServiceError::from)
}

/// Persists a new certification; the store assigns the identifier.
pub fn create_certification<R>(
    repo: &R,
    new_certification: &NewCertification,
) -> ServiceResult<Certification>
where
    R: CertificationWriter + ?Sized,
{
    repo.create(new_certification).map_err(ServiceError::from)
}
