use serde::Serialize;

use crate::matching::scorer::{score_posting, ScoreFloor};
use crate::models::candidate::Candidate;
use crate::models::posting::JobPosting;

/// A candidate annotated with their fit for one posting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateMatch {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub match_score: u8,
    pub matched_required: Vec<String>,
}

/// Ranks candidates for a posting, best first. Ties keep input order.
pub fn rank_candidates(
    posting: &JobPosting,
    candidates: &[Candidate],
    floor: ScoreFloor,
) -> Vec<CandidateMatch> {
    let mut ranked: Vec<CandidateMatch> = candidates
        .iter()
        .map(|candidate| {
            let result = score_posting(&candidate.as_profile(), posting, floor);
            CandidateMatch {
                candidate: candidate.clone(),
                match_score: result.match_score,
                matched_required: result.matched_required,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;
    use crate::models::profile::WorkPreference;

    fn candidate(id: &str, role: &str, skills: &[&str]) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: id.to_uppercase(),
            role: role.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: String::new(),
            status: "Active".to_string(),
            work_preferences: vec![],
        }
    }

    #[test]
    fn test_best_candidate_first() {
        let posting = JobPosting::new(
            "DevOps Lead",
            ["AWS", "Kubernetes", "Terraform"],
            ["Docker"],
            true,
        )
        .unwrap();
        let ranked = rank_candidates(
            &posting,
            &[
                candidate("designer", "Product Designer", &["Figma"]),
                candidate("ops", "DevOps Engineer", &["AWS", "Kubernetes", "Terraform", "Docker"]),
            ],
            ScoreFloor::DEFAULT,
        );
        assert_eq!(ranked[0].candidate.id, "ops");
        // 60 + 20 + 15 role bonus
        assert_eq!(ranked[0].match_score, 95);
        assert_eq!(ranked[1].match_score, 40);
    }

    #[test]
    fn test_remote_candidate_gets_remote_bonus() {
        let posting = JobPosting::new("Backend Engineer", ["Go"], Vec::<String>::new(), true).unwrap();
        let mut remote = candidate("r", "Platform Engineer", &["Go"]);
        remote.work_preferences = vec![WorkPreference::Remote];
        let ranked = rank_candidates(&posting, &[remote], ScoreFloor::DEFAULT);
        assert_eq!(ranked[0].match_score, 65);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let posting = JobPosting::new("Chef", ["Cooking"], Vec::<String>::new(), false).unwrap();
        let ranked = rank_candidates(
            &posting,
            &[candidate("a", "Analyst", &[]), candidate("b", "Builder", &[])],
            ScoreFloor::DEFAULT,
        );
        let ids: Vec<&str> = ranked.iter().map(|m| m.candidate.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_fixture_candidates_bounded() {
        for posting in fixtures::postings() {
            for m in rank_candidates(&posting, &fixtures::candidates(), ScoreFloor::DEFAULT) {
                assert!((40..=99).contains(&m.match_score));
            }
        }
    }
}
