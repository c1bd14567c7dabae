//! Seeker dashboard figures derived from a ranking: average fit, strong
//! matches, and which of the seeker's skills the catalog asks for most.

use std::collections::HashMap;

use serde::Serialize;

use crate::matching::scorer::{compute_matches, ScoreFloor};
use crate::models::posting::JobPosting;
use crate::models::profile::SeekerProfile;

/// Scores at or above this count as strong matches.
pub const STRONG_MATCH_SCORE: u8 = 80;
const MAX_DEMAND_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPosting {
    pub posting_id: String,
    pub title: String,
    pub company: String,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekerAnalytics {
    pub total_postings: usize,
    /// Mean `match_score`, one decimal. 0 when there are no postings.
    pub avg_match_score: f64,
    pub strong_matches: usize,
    pub skills_in_demand: Vec<SkillDemand>,
    /// Best first.
    pub match_distribution: Vec<ScoredPosting>,
}

pub fn summarize(
    profile: &SeekerProfile,
    postings: &[JobPosting],
    floor: ScoreFloor,
) -> SeekerAnalytics {
    let ranked = compute_matches(profile, postings, floor);

    let total: u32 = ranked.iter().map(|r| u32::from(r.match_score)).sum();
    let avg_match_score = if ranked.is_empty() {
        0.0
    } else {
        (f64::from(total) / ranked.len() as f64 * 10.0).round() / 10.0
    };

    let strong_matches = ranked
        .iter()
        .filter(|r| r.match_score >= STRONG_MATCH_SCORE)
        .count();

    let match_distribution = ranked
        .into_iter()
        .map(|r| ScoredPosting {
            posting_id: r.posting.id,
            title: r.posting.title,
            company: r.posting.company,
            score: r.match_score,
        })
        .collect();

    SeekerAnalytics {
        total_postings: postings.len(),
        avg_match_score,
        strong_matches,
        skills_in_demand: skills_in_demand(profile, postings),
        match_distribution,
    }
}

/// Number of postings mentioning each held skill (required or nice-to-have).
/// Most-demanded first; ties keep the profile's skill order. Unwanted skills
/// are left out.
fn skills_in_demand(profile: &SeekerProfile, postings: &[JobPosting]) -> Vec<SkillDemand> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for posting in postings {
        let mentioned: Vec<String> = posting
            .required_skills
            .iter()
            .chain(&posting.nice_to_have_skills)
            .map(|s| s.to_lowercase())
            .collect();
        for skill in &profile.skills {
            let key = skill.to_lowercase();
            if mentioned.contains(&key) {
                *counts.entry(key).or_default() += 1;
            }
        }
    }

    let mut demand: Vec<SkillDemand> = profile
        .skills
        .iter()
        .filter_map(|skill| {
            counts.get(&skill.to_lowercase()).map(|&job_count| SkillDemand {
                skill: skill.clone(),
                job_count,
            })
        })
        .collect();
    demand.sort_by(|a, b| b.job_count.cmp(&a.job_count));
    demand.truncate(MAX_DEMAND_ENTRIES);
    demand
}
