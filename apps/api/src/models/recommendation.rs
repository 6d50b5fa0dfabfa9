use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::merge::{overwrite, overwrite_opt, overwrite_trimmed, Patch};
use crate::validation::{non_blank_if_present, require_non_blank};

/// A written endorsement of a talent by a colleague or client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Recommendation {
    pub id: Uuid,
    pub talent_id: Uuid,
    pub author_name: String,
    pub author_title: Option<String>,
    pub relationship: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecommendationRequest {
    pub author_name: String,
    pub author_title: Option<String>,
    pub relationship: Option<String>,
    pub content: String,
}

impl CreateRecommendationRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        require_non_blank("author_name", &self.author_name)?;
        require_non_blank("content", &self.content)
    }

    pub fn into_recommendation(self, talent_id: Uuid) -> Recommendation {
        let now = Utc::now();
        Recommendation {
            id: Uuid::new_v4(),
            talent_id,
            author_name: self.author_name.trim().to_string(),
            author_title: self.author_title,
            relationship: self.relationship,
            content: self.content,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationPatch {
    pub author_name: Option<String>,
    pub author_title: Option<String>,
    pub relationship: Option<String>,
    pub content: Option<String>,
}

impl RecommendationPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        non_blank_if_present("author_name", self.author_name.as_deref())?;
        non_blank_if_present("content", self.content.as_deref())
    }
}

impl Patch for RecommendationPatch {
    type Target = Recommendation;

    fn merge_into(self, r: &mut Recommendation) {
        overwrite_trimmed(&mut r.author_name, self.author_name);
        overwrite_opt(&mut r.author_title, self.author_title);
        overwrite_opt(&mut r.relationship, self.relationship);
        overwrite(&mut r.content, self.content);
    }
}
