use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::merge::{overwrite, overwrite_opt, overwrite_trimmed, Patch};
use crate::validation::{non_blank_if_present, require_non_blank, validate_date_range};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct WorkExperience {
    pub id: Uuid,
    pub talent_id: Uuid,
    pub company: String,
    pub title: String,
    pub start_date: NaiveDate,
    /// `None` for a current position.
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WorkExperience {
    pub fn validate_dates(&self) -> Result<(), AppError> {
        validate_date_range("start_date", self.start_date, "end_date", self.end_date)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkExperienceRequest {
    pub company: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl CreateWorkExperienceRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank("company", &self.company)?;
        require_non_blank("title", &self.title)?;
        validate_date_range("start_date", self.start_date, "end_date", self.end_date)
    }

    pub fn into_experience(self, talent_id: Uuid) -> WorkExperience {
        let now = Utc::now();
        WorkExperience {
            id: Uuid::new_v4(),
            talent_id,
            company: self.company.trim().to_string(),
            title: self.title.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkExperiencePatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl WorkExperiencePatch {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present("company", self.company.as_deref())?;
        non_blank_if_present("title", self.title.as_deref())
    }
}

impl Patch for WorkExperiencePatch {
    type Target = WorkExperience;

    fn merge_into(self, e: &mut WorkExperience) {
        overwrite_trimmed(&mut e.company, self.company);
        overwrite_trimmed(&mut e.title, self.title);
        overwrite(&mut e.start_date, self.start_date);
        overwrite_opt(&mut e.end_date, self.end_date);
        overwrite_opt(&mut e.description, self.description);
    }
}
