use crate::repository::DatabaseAdmin;
use crate::services::{ServiceError, ServiceResult};

/// Drops and recreates the schema with sample data. The destructive step
/// only runs when the caller confirmed it explicitly.
pub fn recreate_database<R>(repo: &R, confirmed: bool) -> ServiceResult<()>
where
    R: DatabaseAdmin + ?Sized,
{
    if !confirmed {
        return Err(ServiceError::ConfirmationRequired);
    }
    repo.recreate().map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryResult;

    struct RecordingAdmin {
        called: std::cell::Cell<bool>,
    }

    impl DatabaseAdmin for RecordingAdmin {
        fn recreate(&self) -> RepositoryResult<()> {
            self.called.set(true);
            Ok(())
        }
    }

    #[test]
    fn refuses_without_confirmation() {
        let admin = RecordingAdmin {
            called: std::cell::Cell::new(false),
        };
        let err = recreate_database(&admin, false).unwrap_err();
        assert!(matches!(err, ServiceError::ConfirmationRequired));
        assert!(!admin.called.get());
    }

    #[test]
    fn recreates_when_confirmed() {
        let admin = RecordingAdmin {
            called: std::cell::Cell::new(false),
        };
        recreate_database(&admin, true).unwrap();
        assert!(admin.called.get());
    }
}
