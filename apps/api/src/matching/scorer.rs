//! Match scoring: ranks job postings against a seeker profile.
//!
//! Default: `SkillOverlapScorer` (pure, deterministic, no I/O).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so a service-backed scorer can be
//! swapped in without touching handlers.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::models::profile::{SeekerProfile, WorkPreference};

const REQUIRED_WEIGHT: f64 = 60.0;
const NICE_WEIGHT: f64 = 20.0;
const ROLE_BONUS: f64 = 15.0;
const REMOTE_BONUS: f64 = 5.0;
const MAX_SCORE: u8 = 99;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Lowest score a posting can be shown with. Scores below it are lifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreFloor(u8);

impl ScoreFloor {
    pub const DEFAULT: ScoreFloor = ScoreFloor(40);

    /// Returns `None` when `value` is above the score ceiling.
    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_SCORE).then_some(ScoreFloor(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for ScoreFloor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A posting annotated with how well it fits the seeker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub posting: JobPosting,
    /// Sort key, in `[floor, 99]`.
    pub match_score: u8,
    /// What the UI shows. Equals `match_score` unless freshness jitter ran.
    pub display_score: u8,
    pub matched_required: Vec<String>,
    pub matched_nice: Vec<String>,
    /// Human-readable breakdown of the terms that contributed to the score.
    pub match_reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn rank(
        &self,
        profile: &SeekerProfile,
        postings: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AppError>;

    fn floor(&self) -> ScoreFloor;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

/// Weighted skill overlap plus role and remote bonuses.
pub struct SkillOverlapScorer {
    pub floor: ScoreFloor,
}

#[async_trait]
impl MatchScorer for SkillOverlapScorer {
    async fn rank(
        &self,
        profile: &SeekerProfile,
        postings: &[JobPosting],
    ) -> Result<Vec<MatchResult>, AppError> {
        Ok(compute_matches(profile, postings, self.floor))
    }

    fn floor(&self) -> ScoreFloor {
        self.floor
    }

    fn backend(&self) -> &'static str {
        "skill-overlap"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

/// Scores every posting and returns them best-first.
///
/// Per posting:
/// 1. required overlap ratio × 60
/// 2. nice-to-have overlap ratio × 20 (0 when the list is empty)
/// 3. +15 when a desired role's first word appears in the title
/// 4. +5 when the seeker wants remote and the posting is remote
/// 5. round, then clamp into `[floor, 99]`
///
/// Ties keep input order.
pub fn compute_matches(
    profile: &SeekerProfile,
    postings: &[JobPosting],
    floor: ScoreFloor,
) -> Vec<MatchResult> {
    let skills = skill_set(&profile.skills);

    let mut results: Vec<MatchResult> = postings
        .iter()
        .map(|posting| score_against(&skills, profile, posting, floor))
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    debug!(
        postings = postings.len(),
        top = results.first().map(|r| r.match_score),
        "computed matches"
    );
    results
}

/// Scores one posting. Exposed for callers that rank from the other side
/// (candidates for a posting).
pub fn score_posting(
    profile: &SeekerProfile,
    posting: &JobPosting,
    floor: ScoreFloor,
) -> MatchResult {
    score_against(&skill_set(&profile.skills), profile, posting, floor)
}

/// Drops results under `min_score`, keeping order.
pub fn filter_min_score(results: Vec<MatchResult>, min_score: u8) -> Vec<MatchResult> {
    results
        .into_iter()
        .filter(|r| r.match_score >= min_score)
        .collect()
}

fn skill_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn score_against(
    skills: &HashSet<String>,
    profile: &SeekerProfile,
    posting: &JobPosting,
    floor: ScoreFloor,
) -> MatchResult {
    let matched_required = matched(skills, &posting.required_skills);
    let matched_nice = matched(skills, &posting.nice_to_have_skills);

    let mut raw = ratio(matched_required.len(), posting.required_skills.len()) * REQUIRED_WEIGHT
        + ratio(matched_nice.len(), posting.nice_to_have_skills.len()) * NICE_WEIGHT;
    let mut match_reasons = Vec::new();

    if !matched_required.is_empty() {
        match_reasons.push(format!(
            "Matches {}/{} required skills",
            matched_required.len(),
            posting.required_skills.len()
        ));
    }
    if !matched_nice.is_empty() {
        match_reasons.push(format!(
            "Matches {}/{} nice-to-have skills",
            matched_nice.len(),
            posting.nice_to_have_skills.len()
        ));
    }
    if let Some(role) = matching_role(&profile.desired_roles, &posting.title) {
        raw += ROLE_BONUS;
        match_reasons.push(format!("Role matches your desired position: {role}"));
    }
    if profile.prefers(WorkPreference::Remote) && posting.is_remote {
        raw += REMOTE_BONUS;
        match_reasons.push("Supports remote work".to_string());
    }

    let match_score = raw.round().clamp(floor.value() as f64, MAX_SCORE as f64) as u8;

    MatchResult {
        posting: posting.clone(),
        match_score,
        display_score: match_score,
        matched_required,
        matched_nice,
        match_reasons,
    }
}

fn matched(skills: &HashSet<String>, wanted: &[String]) -> Vec<String> {
    wanted
        .iter()
        .filter(|s| skills.contains(&s.to_lowercase()))
        .cloned()
        .collect()
}

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}

/// First-word substring heuristic: "Software Engineer" matches any title
/// containing "software". Returns the first desired role that matched.
fn matching_role<'a>(desired_roles: &'a [String], title: &str) -> Option<&'a str> {
    let title = title.to_lowercase();
    desired_roles
        .iter()
        .find(|role| {
            role.split_whitespace()
                .next()
                .is_some_and(|word| title.contains(&word.to_lowercase()))
        })
        .map(String::as_str)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn react_job() -> JobPosting {
        JobPosting::new(
            "Senior React Developer",
            ["React", "TypeScript", "JavaScript"],
            ["Next.js", "Redux", "Node.js"],
            true,
        )
        .unwrap()
        .with_id("1")
    }

    fn profile(skills: &[&str], roles: &[&str], prefs: &[WorkPreference]) -> SeekerProfile {
        SeekerProfile::new(
            skills.iter().copied(),
            roles.iter().copied(),
            prefs.iter().copied(),
        )
    }

    #[test]
    fn test_worked_example_scores_65() {
        let p = profile(
            &["React", "TypeScript", "JavaScript"],
            &["Full Stack Developer"],
            &[WorkPreference::Remote],
        );
        let results = compute_matches(&p, &[react_job()], ScoreFloor::DEFAULT);
        assert_eq!(results[0].match_score, 65);
        assert_eq!(results[0].matched_required.len(), 3);
        assert!(results[0].matched_nice.is_empty());
    }

    #[test]
    fn test_full_match_clamps_at_99() {
        let p = profile(
            &["react", "typescript", "javascript", "next.js", "redux", "node.js"],
            &["Senior Engineer"],
            &[WorkPreference::Remote],
        );
        let results = compute_matches(&p, &[react_job()], ScoreFloor::DEFAULT);
        assert_eq!(results[0].match_score, 99);
    }

    #[test]
    fn test_empty_skills_scores_at_floor() {
        let p = profile(&[], &["Designer"], &[WorkPreference::OnSite]);
        let results = compute_matches(&p, &[react_job()], ScoreFloor::DEFAULT);
        assert_eq!(results[0].match_score, 40);

        let low = ScoreFloor::new(25).unwrap();
        let results = compute_matches(&p, &[react_job()], low);
        assert_eq!(results[0].match_score, 25);
    }

    #[test]
    fn test_zero_floor_reports_bonus_only_score() {
        let p = profile(&[], &["React Developer"], &[WorkPreference::Remote]);
        let results = compute_matches(&p, &[react_job()], ScoreFloor::new(0).unwrap());
        assert_eq!(results[0].match_score, 20);
    }

    #[test]
    fn test_empty_postings_returns_empty() {
        let p = profile(&["Rust"], &[], &[]);
        assert!(compute_matches(&p, &[], ScoreFloor::DEFAULT).is_empty());
    }

    #[test]
    fn test_empty_nice_list_contributes_nothing() {
        let job = JobPosting::new("Data Analyst", ["SQL", "Python"], Vec::<String>::new(), false)
            .unwrap();
        let p = profile(&["SQL", "Python"], &[], &[]);
        let results = compute_matches(&p, &[job], ScoreFloor::new(0).unwrap());
        assert_eq!(results[0].match_score, 60);
    }

    #[test]
    fn test_empty_required_list_does_not_divide_by_zero() {
        let job = JobPosting::unchecked("Intern", Vec::<String>::new(), ["Git"], false);
        let p = profile(&["git"], &[], &[]);
        let results = compute_matches(&p, &[job], ScoreFloor::new(0).unwrap());
        assert_eq!(results[0].match_score, 20);
    }

    #[test]
    fn test_case_insensitive_skill_match() {
        let job = JobPosting::new("Backend Engineer", ["PostgreSQL"], Vec::<String>::new(), false)
            .unwrap();
        let p = profile(&["postgresql"], &[], &[]);
        let results = compute_matches(&p, &[job], ScoreFloor::DEFAULT);
        assert_eq!(results[0].match_score, 60);
        assert_eq!(results[0].matched_required, vec!["PostgreSQL"]);
    }

    #[test]
    fn test_remote_bonus_requires_both_sides() {
        let onsite_job =
            JobPosting::new("Platform Engineer", ["Go"], Vec::<String>::new(), false).unwrap();
        let p = profile(&["Go"], &[], &[WorkPreference::Remote]);
        let results = compute_matches(&p, &[onsite_job], ScoreFloor::DEFAULT);
        assert_eq!(results[0].match_score, 60);
    }

    #[test]
    fn test_role_bonus_uses_first_word() {
        let roles = |r: &[&str]| r.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(
            matching_role(&roles(&["ML Engineer"]), "ML Engineer"),
            Some("ML Engineer")
        );
        assert_eq!(
            matching_role(
                &roles(&["Designer", "Software Engineer"]),
                "Software Engineering Manager"
            ),
            Some("Software Engineer")
        );
        assert!(matching_role(&roles(&["Full Stack Developer"]), "Senior React Developer").is_none());
        assert!(matching_role(&[], "Anything").is_none());
    }

    #[test]
    fn test_duplicate_required_entries_each_count() {
        let job = JobPosting::new("X", ["React", "react", "Go"], Vec::<String>::new(), false)
            .unwrap();
        let p = profile(&["React"], &[], &[]);
        let results = compute_matches(&p, &[job], ScoreFloor::new(0).unwrap());
        // 2 of 3 entries matched
        assert_eq!(results[0].match_score, 40);
        assert_eq!(results[0].matched_required, vec!["React", "react"]);
    }

    #[test]
    fn test_match_reasons_follow_scored_terms() {
        let p = profile(
            &["React", "TypeScript", "JavaScript", "Redux"],
            &["Senior Engineer"],
            &[WorkPreference::Remote],
        );
        let results = compute_matches(&p, &[react_job()], ScoreFloor::DEFAULT);
        assert_eq!(
            results[0].match_reasons,
            vec![
                "Matches 3/3 required skills",
                "Matches 1/3 nice-to-have skills",
                "Role matches your desired position: Senior Engineer",
                "Supports remote work",
            ]
        );
    }

    #[test]
    fn test_no_reasons_when_nothing_matches() {
        let p = profile(&["Cooking"], &["Chef"], &[WorkPreference::OnSite]);
        let results = compute_matches(&p, &[react_job()], ScoreFloor::DEFAULT);
        assert_eq!(results[0].match_score, 40);
        assert!(results[0].match_reasons.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = JobPosting::new("Alpha", ["Cobol"], Vec::<String>::new(), false)
            .unwrap()
            .with_id("a");
        let b = JobPosting::new("Beta", ["Rust"], Vec::<String>::new(), false)
            .unwrap()
            .with_id("b");
        let c = JobPosting::new("Gamma", ["Fortran"], Vec::<String>::new(), false)
            .unwrap()
            .with_id("c");
        let p = profile(&["Rust"], &[], &[]);

        let results = compute_matches(&p, &[a, b, c], ScoreFloor::DEFAULT);
        let ids: Vec<&str> = results.iter().map(|r| r.posting.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scores_always_within_bounds() {
        let jobs = vec![
            react_job(),
            JobPosting::new("ML Engineer", ["Python"], ["AWS"], true).unwrap(),
            JobPosting::unchecked("Odd", Vec::<String>::new(), Vec::<String>::new(), true),
        ];
        let profiles = vec![
            profile(&[], &[], &[]),
            profile(&["python", "aws", "react"], &["ML", "Senior"], &[WorkPreference::Remote]),
        ];
        for p in &profiles {
            for r in compute_matches(p, &jobs, ScoreFloor::DEFAULT) {
                assert!((40..=99).contains(&r.match_score), "got {}", r.match_score);
            }
        }
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let jobs = vec![react_job()];
        let before = jobs.clone();
        let p = profile(&["React"], &[], &[]);
        let _ = compute_matches(&p, &jobs, ScoreFloor::DEFAULT);
        assert_eq!(jobs, before);
    }

    #[test]
    fn test_filter_min_score() {
        let p = profile(&["React", "TypeScript", "JavaScript"], &[], &[]);
        let other = JobPosting::new("Chef", ["Cooking"], Vec::<String>::new(), false).unwrap();
        let results = compute_matches(&p, &[react_job(), other], ScoreFloor::DEFAULT);
        let kept = filter_min_score(results, 50);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].posting.title, "Senior React Developer");
    }

    #[test]
    fn test_floor_rejects_values_above_ceiling() {
        assert!(ScoreFloor::new(100).is_none());
        assert_eq!(ScoreFloor::new(99).map(ScoreFloor::value), Some(99));
    }

    #[tokio::test]
    async fn test_skill_overlap_scorer_delegates() {
        let scorer = SkillOverlapScorer {
            floor: ScoreFloor::DEFAULT,
        };
        let p = profile(&["React", "TypeScript", "JavaScript"], &[], &[]);
        let results = scorer.rank(&p, &[react_job()]).await.unwrap();
        assert_eq!(results[0].match_score, 60);
        assert_eq!(scorer.backend(), "skill-overlap");
    }
}
