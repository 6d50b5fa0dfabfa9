use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::merge::{overwrite, overwrite_opt, overwrite_trimmed, Patch};
use crate::validation::{non_blank_if_present, require_non_blank, validate_date_range, validate_url};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub talent_id: Uuid,
    pub name: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Certificate {
    pub fn validate_dates(&self) -> Result<(), AppError> {
        validate_date_range("issued_on", self.issued_on, "expires_on", self.expires_on)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCertificateRequest {
    pub name: String,
    pub issuer: String,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
}

impl CreateCertificateRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank("name", &self.name)?;
        require_non_blank("issuer", &self.issuer)?;
        if let Some(url) = &self.credential_url {
            validate_url("credential_url", url)?;
        }
        validate_date_range("issued_on", self.issued_on, "expires_on", self.expires_on)
    }

    pub fn into_certificate(self, talent_id: Uuid) -> Certificate {
        let now = Utc::now();
        Certificate {
            id: Uuid::new_v4(),
            talent_id,
            name: self.name.trim().to_string(),
            issuer: self.issuer.trim().to_string(),
            issued_on: self.issued_on,
            expires_on: self.expires_on,
            credential_url: self.credential_url,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub issued_on: Option<NaiveDate>,
    pub expires_on: Option<NaiveDate>,
    pub credential_url: Option<String>,
}

impl CertificatePatch {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present("name", self.name.as_deref())?;
        non_blank_if_present("issuer", self.issuer.as_deref())?;
        if let Some(url) = &self.credential_url {
            validate_url("credential_url", url)?;
        }
        Ok(())
    }
}

impl Patch for CertificatePatch {
    type Target = Certificate;

    fn merge_into(self, c: &mut Certificate) {
        overwrite_trimmed(&mut c.name, self.name);
        overwrite_trimmed(&mut c.issuer, self.issuer);
        overwrite(&mut c.issued_on, self.issued_on);
        overwrite_opt(&mut c.expires_on, self.expires_on);
        overwrite_opt(&mut c.credential_url, self.credential_url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::apply_patch;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_certificate() -> Certificate {
        CreateCertificateRequest {
            name: "AWS Solutions Architect".to_string(),
            issuer: "Amazon".to_string(),
            issued_on: date("2022-05-01"),
            expires_on: Some(date("2025-05-01")),
            credential_url: None,
        }
        .into_certificate(Uuid::new_v4())
    }

    #[test]
    fn test_renewal_patch_moves_expiry_only() {
        let original = make_certificate();
        let patch = CertificatePatch {
            expires_on: Some(date("2028-05-01")),
            ..Default::default()
        };
        let merged = apply_patch(original.clone(), patch);
        assert_eq!(merged.expires_on, Some(date("2028-05-01")));
        assert_eq!(merged.name, original.name);
        assert_eq!(merged.issued_on, original.issued_on);
    }

    #[test]
    fn test_patch_trims_name_and_issuer() {
        let patch = CertificatePatch {
            name: Some(" CKA ".to_string()),
            issuer: Some("CNCF  ".to_string()),
            ..Default::default()
        };
        let merged = apply_patch(make_certificate(), patch);
        assert_eq!(merged.name, "CKA");
        assert_eq!(merged.issuer, "CNCF");
    }

    #[test]
    fn test_create_rejects_expiry_before_issue() {
        let req = CreateCertificateRequest {
            name: "CKA".to_string(),
            issuer: "CNCF".to_string(),
            issued_on: date("2023-01-01"),
            expires_on: Some(date("2022-01-01")),
            credential_url: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_patch_rejects_non_http_credential_url() {
        let patch = CertificatePatch {
            credential_url: Some("ftp://certs.example.com/1".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }
}
