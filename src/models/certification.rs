use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::certification::{
    Certification as DomainCertification, NewCertification as DomainNewCertification,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::certifications)]
/// Diesel model for [`crate::domain::certification::Certification`].
pub struct Certification {
    pub id: i32,
    pub employeename: String,
    pub certificatetype: String,
    pub certificatedescription: String,
    pub certificatelink: String,
    pub expirydate: Option<NaiveDate>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::certifications)]
/// Insertable form of [`Certification`].
pub struct NewCertification<'a> {
    pub employeename: &'a str,
    pub certificatetype: &'a str,
    pub certificatedescription: &'a str,
    pub certificatelink: &'a str,
    pub expirydate: Option<NaiveDate>,
}

impl From<Certification> for DomainCertification {
    fn from(cert: Certification) -> Self {
        Self {
            id: cert.id,
            employee_name: cert.employeename,
            certificate_type: cert.certificatetype,
            description: cert.certificatedescription,
            link: cert.certificatelink,
            expires_on: cert.expirydate,
        }
    }
}

impl<'a> From<&'a DomainNewCertification> for NewCertification<'a> {
    fn from(cert: &'a DomainNewCertification) -> Self {
        Self {
            employeename: cert.employee_name.as_str(),
            certificatetype: cert.certificate_type.as_str(),
            certificatedescription: cert.description.as_str(),
            certificatelink: cert.link.as_str(),
            expirydate: cert.expires_on,
        }
    }
}
