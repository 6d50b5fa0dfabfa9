//! Filter predicate composer.
//!
//! Turns a [`FilterCriteria`] into one boolean predicate over [`Talent`].
//! Each criterion contributes a clause; an absent, blank or empty criterion
//! contributes an always-true clause, so unset criteria never filter anything
//! out. Clauses are ANDed. Multi-value criteria (skills, locations) OR their
//! own alternatives. All string comparisons are case-insensitive.

use serde::{Deserialize, Serialize};

use crate::models::talent::Talent;

pub type Predicate = Box<dyn Fn(&Talent) -> bool + Send + Sync>;

/// Optional narrowing parameters for a talent search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub skills: Option<Vec<String>>,
    pub preferred_locations: Option<Vec<String>>,
    /// `[min, max]`, inclusive. Ignored unless it has exactly two values.
    pub price_range: Option<Vec<f64>>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        name_query(self.name.as_deref()).is_none()
            && lowered_values(self.skills.as_deref()).is_none()
            && lowered_values(self.preferred_locations.as_deref()).is_none()
            && price_bounds(self.price_range.as_deref()).is_none()
    }
}

/// Composes the per-criterion clauses into a single predicate.
pub fn build_predicate(criteria: &FilterCriteria) -> Predicate {
    let clauses = [
        name_clause(criteria.name.as_deref()),
        skills_clause(criteria.skills.as_deref()),
        location_clause(criteria.preferred_locations.as_deref()),
        price_clause(criteria.price_range.as_deref()),
    ];
    Box::new(move |talent: &Talent| clauses.iter().all(|clause| clause(talent)))
}

fn always() -> Predicate {
    Box::new(|_: &Talent| true)
}

fn name_clause(name: Option<&str>) -> Predicate {
    let Some(query) = name_query(name) else {
        return always();
    };
    Box::new(move |t: &Talent| {
        let first = t.first_name.to_lowercase();
        let last = t.last_name.to_lowercase();
        first.contains(&query)
            || last.contains(&query)
            || format!("{first} {last}").contains(&query)
    })
}

fn skills_clause(skills: Option<&[String]>) -> Predicate {
    let Some(wanted) = lowered_values(skills) else {
        return always();
    };
    Box::new(move |t: &Talent| {
        t.skills
            .iter()
            .any(|skill| wanted.contains(&skill.trim().to_lowercase()))
    })
}

/// Matches the talent's current location against any listed location.
fn location_clause(locations: Option<&[String]>) -> Predicate {
    let Some(wanted) = lowered_values(locations) else {
        return always();
    };
    Box::new(move |t: &Talent| wanted.contains(&t.location.trim().to_lowercase()))
}

/// An inverted range (min > max) is not rejected and matches nothing.
fn price_clause(range: Option<&[f64]>) -> Predicate {
    let Some((min, max)) = price_bounds(range) else {
        return always();
    };
    Box::new(move |t: &Talent| min <= t.price && t.price <= max)
}

fn name_query(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase)
}

/// Lowercased, trimmed, blank-free values; `None` when nothing remains.
fn lowered_values(values: Option<&[String]>) -> Option<Vec<String>> {
    let lowered: Vec<String> = values?
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect();
    (!lowered.is_empty()).then_some(lowered)
}

fn price_bounds(range: Option<&[f64]>) -> Option<(f64, f64)> {
    match range? {
        [min, max] => Some((*min, *max)),
        _ => None,
    }
}
