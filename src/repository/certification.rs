use diesel::define_sql_function;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::{
    db::DbPool,
    domain::certification::{Certification, NewCertification},
    repository::{
        CertificationListQuery, CertificationReader, CertificationWriter, Validity,
        errors::RepositoryResult,
    },
};

define_sql_function! {
    /// SQLite `lower()`, used for case-insensitive equality.
    fn lower(x: Text) -> Text;
}

/// Diesel implementation of [`CertificationReader`] and
/// [`CertificationWriter`].
pub struct DieselCertificationRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselCertificationRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl CertificationReader for DieselCertificationRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Certification>> {
        use crate::models::certification::Certification as DbCertification;
        use crate::schema::certifications;

        let mut conn = self.pool.get()?;
        let cert = certifications::table
            .find(id)
            .first::<DbCertification>(&mut conn)
            .optional()?;

        Ok(cert.map(Into::into))
    }

    fn list(&self, query: CertificationListQuery) -> RepositoryResult<(usize, Vec<Certification>)> {
        use crate::models::certification::Certification as DbCertification;
        use crate::schema::certifications;

        let mut conn = self.pool.get()?;

        // Translates the filter intent into a boxed select statement. Built
        // once for the count and once for the windowed fetch so both
        // statements carry the identical predicate. `LIKE` is
        // ASCII-case-insensitive in SQLite, which gives the keyword and
        // free-text filters their case folding; type equality stays
        // case-sensitive through plain `=`.
        let query_builder = || {
            let mut q = certifications::table.into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(validity) = query.validity {
                q = match validity {
                    Validity::NoExpiry => q.filter(certifications::expirydate.is_null()),
                    Validity::Expired => q.filter(certifications::expirydate.lt(Some(query.today))),
                    Validity::Valid => q.filter(certifications::expirydate.gt(Some(query.today))),
                };
            }

            if let Some(name) = &query.employee_name {
                q = q.filter(lower(certifications::employeename).eq(name.to_ascii_lowercase()));
            }

            if let Some(keyword) = &query.keyword {
                let pattern = format!("%{keyword}%");
                q = q.filter(
                    certifications::certificatedescription
                        .like(pattern.clone())
                        .or(certifications::certificatetype.like(pattern)),
                );
            }

            if let Some(certificate_type) = &query.certificate_type {
                q = q.filter(certifications::certificatetype.eq(certificate_type.clone()));
            }

            for term in &query.terms {
                let pattern = format!("%{term}%");
                q = q.filter(
                    certifications::employeename
                        .like(pattern.clone())
                        .or(certifications::certificatetype.like(pattern.clone()))
                        .or(certifications::certificatedescription.like(pattern)),
                );
            }

            q
        };

        // Count and fetch share one connection. A writer committing between
        // the two statements can still skew count against slice.
        let total = query_builder().count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = query_builder();
        if let Some(pagination) = &query.pagination {
            items_query = items_query
                .limit(pagination.limit())
                .offset(pagination.offset());
        }

        let items = items_query
            .order(certifications::id.asc())
            .load::<DbCertification>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Certification>>();

        Ok((total, items))
    }
}

impl CertificationWriter for DieselCertificationRepository<'_> {
    fn create(&self, new_certification: &NewCertification) -> RepositoryResult<Certification> {
        use crate::models::certification::{
            Certification as DbCertification, NewCertification as DbNewCertification,
        };
        use crate::schema::certifications;

        let mut conn = self.pool.get()?;
        let insertable: DbNewCertification = new_certification.into();
        let created = diesel::insert_into(certifications::table)
            .values(&insertable)
            .get_result::<DbCertification>(&mut conn)?;

        Ok(created.into())
    }
}
