use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One certification record as stored. The identifier is assigned by the
/// store and immutable afterwards.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Certification {
    pub id: i32,
    pub employee_name: String,
    pub certificate_type: String,
    pub description: String,
    pub link: String,
    /// `None` means the certification does not expire.
    pub expires_on: Option<NaiveDate>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct NewCertification {
    pub employee_name: String,
    pub certificate_type: String,
    pub description: String,
    pub link: String,
    pub expires_on: Option<NaiveDate>,
}

impl NewCertification {
    #[must_use]
    pub fn new(
        employee_name: String,
        certificate_type: String,
        description: String,
        link: String,
        expires_on: Option<NaiveDate>,
    ) -> Self {
        Self {
            employee_name: employee_name.trim().to_string(),
            certificate_type: certificate_type.trim().to_string(),
            description: description.trim().to_string(),
            link: link.trim().to_string(),
            expires_on,
        }
    }
}
