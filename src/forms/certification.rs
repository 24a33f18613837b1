use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::certification::NewCertification;

/// JSON body accepted when creating a certification. Every field is
/// required except the expiry date; a missing date means the certification
/// never expires.
#[derive(Debug, Deserialize, Validate)]
pub struct NewCertificationForm {
    #[validate(length(min = 1))]
    pub employeename: String,
    #[validate(length(min = 1))]
    pub certificatetype: String,
    #[validate(length(min = 1))]
    pub certificatedescription: String,
    #[validate(length(min = 1))]
    pub certificatelink: String,
    pub expirydate: Option<NaiveDate>,
}

impl From<NewCertificationForm> for NewCertification {
    fn from(form: NewCertificationForm) -> Self {
        NewCertification::new(
            form.employeename,
            form.certificatetype,
            form.certificatedescription,
            form.certificatelink,
            form.expirydate,
        )
    }
}
