use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::merge::{overwrite, overwrite_opt, overwrite_trimmed, Patch};
use crate::validation::{
    non_blank_if_present, require_non_blank, validate_email, validate_price, validate_url,
};

/// A talent profile. Doubles as the read model the search filters run over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Talent {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    /// Current location.
    pub location: String,
    pub skills: Vec<String>,
    /// Hourly rate.
    pub price: f64,
    pub preferred_locations: Vec<String>,
    pub linkedin_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Talent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTalentRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub preferred_locations: Vec<String>,
    pub linkedin_url: Option<String>,
}

impl CreateTalentRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank("first_name", &self.first_name)?;
        require_non_blank("last_name", &self.last_name)?;
        require_non_blank("location", &self.location)?;
        validate_email(&self.email)?;
        validate_price(self.price)?;
        if let Some(url) = &self.linkedin_url {
            validate_url("linkedin_url", url)?;
        }
        Ok(())
    }

    pub fn into_talent(self) -> Talent {
        let now = Utc::now();
        Talent {
            id: Uuid::new_v4(),
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone,
            headline: self.headline,
            bio: self.bio,
            location: self.location.trim().to_string(),
            skills: self.skills,
            price: self.price,
            preferred_locations: self.preferred_locations,
            linkedin_url: self.linkedin_url,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Sparse update for a [`Talent`]. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub price: Option<f64>,
    pub preferred_locations: Option<Vec<String>>,
    pub linkedin_url: Option<String>,
}

impl TalentPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present("first_name", self.first_name.as_deref())?;
        non_blank_if_present("last_name", self.last_name.as_deref())?;
        non_blank_if_present("location", self.location.as_deref())?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        if let Some(url) = &self.linkedin_url {
            validate_url("linkedin_url", url)?;
        }
        Ok(())
    }
}

impl Patch for TalentPatch {
    type Target = Talent;

    fn merge_into(self, t: &mut Talent) {
        overwrite_trimmed(&mut t.first_name, self.first_name);
        overwrite_trimmed(&mut t.last_name, self.last_name);
        overwrite_trimmed(&mut t.email, self.email);
        overwrite_opt(&mut t.phone, self.phone);
        overwrite_opt(&mut t.headline, self.headline);
        overwrite_opt(&mut t.bio, self.bio);
        overwrite_trimmed(&mut t.location, self.location);
        overwrite(&mut t.skills, self.skills);
        overwrite(&mut t.price, self.price);
        overwrite(&mut t.preferred_locations, self.preferred_locations);
        overwrite_opt(&mut t.linkedin_url, self.linkedin_url);
    }
}
