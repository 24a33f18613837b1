//! Wire-shaped payloads for the certifications endpoints.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::certification::Certification;
use crate::pagination::PageLinks;

/// One certification as serialized on the wire. Field names follow the
/// table's column names, which clients already depend on.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CertificationOut {
    pub id: i32,
    pub employeename: String,
    pub certificatetype: String,
    pub certificatedescription: String,
    pub certificatelink: String,
    pub expirydate: Option<NaiveDate>,
}

impl From<Certification> for CertificationOut {
    fn from(cert: Certification) -> Self {
        Self {
            id: cert.id,
            employeename: cert.employee_name,
            certificatetype: cert.certificate_type,
            certificatedescription: cert.description,
            certificatelink: cert.link,
            expirydate: cert.expires_on,
        }
    }
}

/// Response body shared by every listing endpoint: the record page, the
/// rendered HTML table, the pagination object and a status message.
#[derive(Debug, Serialize)]
pub struct CertificationsResponse {
    pub certs: Vec<CertificationOut>,
    pub table: String,
    pub pagination: PageLinks,
    pub message: String,
}

impl CertificationsResponse {
    pub fn assemble(
        certs: Vec<CertificationOut>,
        table: String,
        pagination: PageLinks,
        message: &str,
    ) -> Self {
        Self {
            certs,
            table,
            pagination,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_follow_the_table_schema() {
        let cert = Certification {
            id: 5,
            employee_name: "Patrick Dlamini".to_string(),
            certificate_type: "Microsoft".to_string(),
            description: "Azure fundamentals: AZ-900".to_string(),
            link: "https://learn.microsoft.com/az-900".to_string(),
            expires_on: None,
        };
        let out: CertificationOut = cert.into();
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["employeename"], "Patrick Dlamini");
        assert_eq!(value["certificatetype"], "Microsoft");
        assert_eq!(value["certificatedescription"], "Azure fundamentals: AZ-900");
        assert_eq!(value["certificatelink"], "https://learn.microsoft.com/az-900");
        assert!(value["expirydate"].is_null());
    }
}
