use std::collections::HashSet;

use serde::Serialize;

use crate::models::profile::SeekerProfile;

const MAX_SUGGESTIONS: usize = 8;

/// Complementary skills, keyed on a lower-cased held skill.
const SKILL_GRAPH: &[(&str, &[&str])] = &[
    ("react", &["TypeScript", "Next.js", "Redux", "Tailwind CSS", "GraphQL"]),
    ("python", &["FastAPI", "Django", "Pandas", "NumPy", "Docker"]),
    ("typescript", &["React", "Node.js", "Next.js", "GraphQL", "Jest"]),
    ("aws", &["Docker", "Kubernetes", "Terraform", "CI/CD", "Linux"]),
    ("figma", &["Prototyping", "Design Systems", "UX Research", "Accessibility"]),
    ("machine learning", &["Python", "PyTorch", "TensorFlow", "MLOps", "Deep Learning"]),
    ("node.js", &["TypeScript", "Express", "PostgreSQL", "Docker", "GraphQL"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileStrength {
    Strong,
    Good,
    #[serde(rename = "Needs Work")]
    NeedsWork,
}

/// Counts filled-in sections: skills, desired roles, summary, headline, location.
/// 4+ is Strong, 2+ is Good.
pub fn profile_strength(profile: &SeekerProfile) -> ProfileStrength {
    let filled = [
        !profile.skills.is_empty(),
        !profile.desired_roles.is_empty(),
        profile.summary.is_some(),
        profile.headline.is_some(),
        profile.location.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count();

    match filled {
        4.. => ProfileStrength::Strong,
        2..=3 => ProfileStrength::Good,
        _ => ProfileStrength::NeedsWork,
    }
}

/// "Frontend Developer | React & TypeScript Expert"
pub fn suggest_headline(profile: &SeekerProfile) -> String {
    let role = profile
        .desired_roles
        .first()
        .map(String::as_str)
        .unwrap_or("Professional");

    let top_skills: Vec<&str> = profile.skills.iter().take(2).map(String::as_str).collect();
    if top_skills.is_empty() {
        role.to_string()
    } else {
        format!("{role} | {} Expert", top_skills.join(" & "))
    }
}

/// Skills that commonly go with what the seeker already has, in first-seen
/// order, never repeating a held skill.
pub fn suggest_skills(profile: &SeekerProfile) -> Vec<String> {
    let held: HashSet<String> = profile.skills.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for skill in &profile.skills {
        let key = skill.to_lowercase();
        let Some((_, related)) = SKILL_GRAPH.iter().find(|(k, _)| *k == key) else {
            continue;
        };
        for candidate in related.iter() {
            let lower = candidate.to_lowercase();
            if held.contains(&lower) || !seen.insert(lower) {
                continue;
            }
            out.push(candidate.to_string());
            if out.len() == MAX_SUGGESTIONS {
                return out;
            }
        }
    }
    out
}
