use chrono::NaiveDate;

use crate::domain::certification::{Certification, NewCertification};
use crate::repository::errors::RepositoryResult;

pub mod admin;
pub mod certification;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page.saturating_sub(1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

/// Expiry-date bucket relative to the query date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// No expiry date on record.
    NoExpiry,
    /// Expiry date strictly before the query date.
    Expired,
    /// Expiry date strictly after the query date.
    Valid,
}

/// Filter intent for one certifications listing.
///
/// Each field is one atomic predicate; set fields are combined with logical
/// AND. Results are always ordered by id ascending. The comparison date for
/// validity buckets is injected by the caller so it stays testable.
///
/// A record whose expiry date equals the query date lands in neither the
/// expired nor the valid bucket; both comparisons are strict.
#[derive(Debug, Clone)]
pub struct CertificationListQuery {
    pub validity: Option<Validity>,
    pub employee_name: Option<String>,
    pub keyword: Option<String>,
    pub certificate_type: Option<String>,
    pub terms: Vec<String>,
    pub today: NaiveDate,
    pub pagination: Option<Pagination>,
}

impl CertificationListQuery {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            validity: None,
            employee_name: None,
            keyword: None,
            certificate_type: None,
            terms: Vec::new(),
            today,
            pagination: None,
        }
    }

    pub fn validity(mut self, validity: Validity) -> Self {
        self.validity = Some(validity);
        self
    }

    /// Case-insensitive exact match on the employee name.
    pub fn employee_name(mut self, name: impl Into<String>) -> Self {
        self.employee_name = Some(name.into());
        self
    }

    /// Case-insensitive substring match on description or type.
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Case-sensitive exact match on the certificate type.
    pub fn certificate_type(mut self, certificate_type: impl Into<String>) -> Self {
        self.certificate_type = Some(certificate_type.into());
        self
    }

    /// Free-text terms; every term must match somewhere in the record.
    pub fn terms(mut self, terms: Vec<String>) -> Self {
        self.terms = terms;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }

    /// Evaluates the composed predicate against a single record.
    ///
    /// This is the reference semantics for the SQL translation in
    /// [`certification::DieselCertificationRepository`]; both fold case
    /// ASCII-only, matching SQLite's `LIKE`/`lower()` collation.
    pub fn matches(&self, cert: &Certification) -> bool {
        if let Some(validity) = self.validity {
            let matched = match validity {
                Validity::NoExpiry => cert.expires_on.is_none(),
                Validity::Expired => cert.expires_on.is_some_and(|date| date < self.today),
                Validity::Valid => cert.expires_on.is_some_and(|date| date > self.today),
            };
            if !matched {
                return false;
            }
        }

        if let Some(name) = &self.employee_name {
            if !cert.employee_name.eq_ignore_ascii_case(name) {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_ascii_lowercase();
            let in_description = cert.description.to_ascii_lowercase().contains(&keyword);
            let in_type = cert.certificate_type.to_ascii_lowercase().contains(&keyword);
            if !in_description && !in_type {
                return false;
            }
        }

        if let Some(certificate_type) = &self.certificate_type {
            if cert.certificate_type != *certificate_type {
                return false;
            }
        }

        self.terms.iter().all(|term| {
            let term = term.to_ascii_lowercase();
            cert.employee_name.to_ascii_lowercase().contains(&term)
                || cert.certificate_type.to_ascii_lowercase().contains(&term)
                || cert.description.to_ascii_lowercase().contains(&term)
        })
    }
}

pub trait CertificationReader {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Certification>>;
    /// Returns the total match count together with the ordered, windowed
    /// slice for the same predicate.
    fn list(&self, query: CertificationListQuery) -> RepositoryResult<(usize, Vec<Certification>)>;
}

pub trait CertificationWriter {
    fn create(&self, new_certification: &NewCertification) -> RepositoryResult<Certification>;
}

pub trait DatabaseAdmin {
    /// Drops and recreates the schema, then seeds the sample records.
    fn recreate(&self) -> RepositoryResult<()>;
}
