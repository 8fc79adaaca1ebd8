//! Ranking job roles by skill overlap

use crate::processing::catalog::{JobRole, RoleCatalog, Skill};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub role_name: String,
    /// 0-100, rounded to two decimals
    pub match_percent: f64,
    pub matched_skills: BTreeSet<Skill>,
    pub missing_skills: BTreeSet<Skill>,
}

pub struct RoleMatcher<'a> {
    catalog: &'a RoleCatalog,
}

impl<'a> RoleMatcher<'a> {
    pub fn new(catalog: &'a RoleCatalog) -> Self {
        Self { catalog }
    }

    /// Score every role and sort by match percent, best first.
    ///
    /// Equal scores keep catalog order.
    pub fn rank(&self, extracted_skills: &BTreeSet<Skill>) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .catalog
            .roles()
            .iter()
            .filter_map(|role| score_role(role, extracted_skills))
            .collect();

        // sort_by is stable
        results.sort_by(|a, b| b.match_percent.total_cmp(&a.match_percent));
        results
    }

    pub fn top_match(&self, extracted_skills: &BTreeSet<Skill>) -> Option<MatchResult> {
        self.rank(extracted_skills).into_iter().next()
    }
}

/// Score a single role, `None` when it requires no skills
pub fn score_role(role: &JobRole, extracted_skills: &BTreeSet<Skill>) -> Option<MatchResult> {
    if role.required_skills.is_empty() {
        return None;
    }

    let matched_skills: BTreeSet<Skill> = role
        .required_skills
        .intersection(extracted_skills)
        .cloned()
        .collect();
    let missing_skills: BTreeSet<Skill> = role
        .required_skills
        .difference(extracted_skills)
        .cloned()
        .collect();

    let ratio = matched_skills.len() as f64 / role.required_skills.len() as f64;

    Some(MatchResult {
        role_name: role.name.clone(),
        match_percent: round2(ratio * 100.0),
        matched_skills,
        missing_skills,
    })
}

/// Two decimals, exact halves go to the even neighbour (3.125 -> 3.12)
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
