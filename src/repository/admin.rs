use chrono::NaiveDate;
use diesel::prelude::*;
use diesel_migrations::MigrationHarness;

use crate::db::{DbPool, MIGRATIONS};
use crate::domain::certification::NewCertification;
use crate::repository::{
    DatabaseAdmin,
    errors::{RepositoryError, RepositoryResult},
};

/// Diesel implementation of [`DatabaseAdmin`].
pub struct DieselDatabaseAdmin<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselDatabaseAdmin<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

/// Records inserted after every schema recreation.
pub fn sample_certifications() -> Vec<NewCertification> {
    vec![
        NewCertification::new(
            "Patrick Dlamini".to_string(),
            "Microsoft".to_string(),
            "Azure fundamentals: AZ-900".to_string(),
            "https://learn.microsoft.com/en-us/credentials/certifications/azure-fundamentals/?practice-assessment-type=certification"
                .to_string(),
            NaiveDate::from_ymd_opt(2024, 5, 30),
        ),
        NewCertification::new(
            "Naledi Mokoena".to_string(),
            "AWS".to_string(),
            "AWS Certified Cloud Practitioner".to_string(),
            "https://aws.amazon.com/certification/certified-cloud-practitioner/".to_string(),
            NaiveDate::from_ymd_opt(2030, 11, 15),
        ),
        NewCertification::new(
            "Thabo Nkosi".to_string(),
            "Scrum.org".to_string(),
            "Professional Scrum Master I".to_string(),
            "https://www.scrum.org/assessments/professional-scrum-master-i-certification".to_string(),
            None,
        ),
        NewCertification::new(
            "Sipho Khumalo".to_string(),
            "Microsoft".to_string(),
            "Azure administrator: AZ-104".to_string(),
            "https://learn.microsoft.com/en-us/credentials/certifications/azure-administrator/".to_string(),
            NaiveDate::from_ymd_opt(2025, 1, 31),
        ),
    ]
}

fn migration_error(err: Box<dyn std::error::Error + Send + Sync>) -> RepositoryError {
    RepositoryError::DatabaseError(format!("Migration error: {err}"))
}

impl DatabaseAdmin for DieselDatabaseAdmin<'_> {
    fn recreate(&self) -> RepositoryResult<()> {
        use crate::models::certification::NewCertification as DbNewCertification;
        use crate::schema::certifications;

        let mut conn = self.pool.get()?;

        conn.revert_all_migrations(MIGRATIONS)
            .map_err(migration_error)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(migration_error)?;

        let samples = sample_certifications();
        let insertables: Vec<DbNewCertification> = samples.iter().map(Into::into).collect();
        diesel::insert_into(certifications::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(())
    }
}
