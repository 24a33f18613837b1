//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::certification::{Certification, NewCertification};
use crate::repository::{
    CertificationListQuery, CertificationReader, CertificationWriter, DatabaseAdmin,
    errors::RepositoryResult,
};

mock! {
    pub Repository {}

    impl CertificationReader for Repository {
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Certification>>;
        fn list(
            &self,
            query: CertificationListQuery,
        ) -> RepositoryResult<(usize, Vec<Certification>)>;
    }

    impl CertificationWriter for Repository {
        fn create(&self, new_certification: &NewCertification) -> RepositoryResult<Certification>;
    }

    impl DatabaseAdmin for Repository {
        fn recreate(&self) -> RepositoryResult<()>;
    }
}
