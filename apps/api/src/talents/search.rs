//! Query-string form of [`FilterCriteria`] for `GET /api/v1/talents/search`.
//!
//! Lists are comma-separated (`skills=Java,Go`). A price range is only formed
//! when both `min_price` and `max_price` are given.

use serde::Deserialize;

use crate::talents::filter::FilterCriteria;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalentSearchQuery {
    pub name: Option<String>,
    pub skills: Option<String>,
    pub locations: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl From<TalentSearchQuery> for FilterCriteria {
    fn from(q: TalentSearchQuery) -> Self {
        FilterCriteria {
            name: q.name,
            skills: q.skills.as_deref().map(split_list),
            preferred_locations: q.locations.as_deref().map(split_list),
            price_range: match (q.min_price, q.max_price) {
                (Some(min), Some(max)) => Some(vec![min, max]),
                _ => None,
            },
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_lists_are_split_and_trimmed() {
        let criteria: FilterCriteria = TalentSearchQuery {
            skills: Some("Java, Go,,".to_string()),
            locations: Some("NY".to_string()),
            ..Default::default()
        }
        .into();
        assert_eq!(
            criteria.skills,
            Some(vec!["Java".to_string(), "Go".to_string()])
        );
        assert_eq!(criteria.preferred_locations, Some(vec!["NY".to_string()]));
    }

    #[test]
    fn test_price_range_needs_both_bounds() {
        let one_sided: FilterCriteria = TalentSearchQuery {
            min_price: Some(50.0),
            ..Default::default()
        }
        .into();
        assert!(one_sided.price_range.is_none());

        let both: FilterCriteria = TalentSearchQuery {
            min_price: Some(50.0),
            max_price: Some(100.0),
            ..Default::default()
        }
        .into();
        assert_eq!(both.price_range, Some(vec![50.0, 100.0]));
    }

    #[test]
    fn test_empty_query_is_unconstrained() {
        let criteria: FilterCriteria = TalentSearchQuery {
            skills: Some(" , ".to_string()),
            ..Default::default()
        }
        .into();
        assert!(criteria.is_unconstrained());
    }
}
