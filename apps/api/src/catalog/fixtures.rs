//! Mock data the dashboards run on when no backend is configured.

use crate::models::candidate::Candidate;
use crate::models::posting::JobPosting;
use crate::models::profile::{SeekerProfile, WorkPreference};

pub const DEMO_SEEKER_ID: &str = "demo";

pub fn postings() -> Vec<JobPosting> {
    let rows: [(&str, &str, &str, &str, &str, [&str; 3], [&str; 3], bool); 5] = [
        (
            "1",
            "Senior React Developer",
            "TechVault",
            "San Francisco, CA",
            "$160k–$200k",
            ["React", "TypeScript", "JavaScript"],
            ["Next.js", "Redux", "Node.js"],
            true,
        ),
        (
            "2",
            "ML Engineer",
            "DataPulse AI",
            "Remote",
            "$180k–$230k",
            ["Python", "Machine Learning", "PyTorch"],
            ["MLOps", "AWS", "Docker"],
            true,
        ),
        (
            "3",
            "Product Designer",
            "Forma Studio",
            "New York, NY",
            "$130k–$165k",
            ["Figma", "UX Research", "UI Design"],
            ["Design Systems", "Prototyping", "Accessibility"],
            false,
        ),
        (
            "4",
            "DevOps Lead",
            "CloudScale",
            "Austin, TX",
            "$155k–$195k",
            ["AWS", "Kubernetes", "Terraform"],
            ["Docker", "CI/CD", "Linux"],
            true,
        ),
        (
            "5",
            "Full Stack Developer",
            "PayLoop",
            "Remote",
            "$140k–$175k",
            ["Node.js", "React", "SQL"],
            ["TypeScript", "Docker", "AWS"],
            true,
        ),
    ];

    rows.into_iter()
        .map(|(id, title, company, location, salary, required, nice, remote)| {
            JobPosting::unchecked(title, required, nice, remote)
                .with_id(id)
                .with_company(company, location, salary)
        })
        .collect()
}

pub fn candidates() -> Vec<Candidate> {
    let rows: [(&str, &str, &str, [&str; 3], &str, &str); 4] = [
        ("1", "Sarah Chen", "Senior React Developer", ["React", "TypeScript", "GraphQL"], "San Francisco", "Active"),
        ("2", "Marcus Johnson", "Full Stack Engineer", ["Node.js", "React", "PostgreSQL"], "Remote", "Active"),
        ("3", "Emily Park", "ML Engineer", ["Python", "TensorFlow", "AWS"], "Seattle", "Open"),
        ("4", "David Kim", "DevOps Engineer", ["Kubernetes", "Docker", "CI/CD"], "Austin", "Active"),
    ];

    rows.into_iter()
        .map(|(id, name, role, skills, location, status)| Candidate {
            id: id.to_string(),
            name: name.to_string(),
            role: role.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            location: location.to_string(),
            status: status.to_string(),
            work_preferences: if location == "Remote" {
                vec![WorkPreference::Remote]
            } else {
                vec![WorkPreference::OnSite]
            },
        })
        .collect()
}

/// The profile the seeker dashboard opens with before the wizard is completed.
pub fn demo_profile() -> SeekerProfile {
    let mut profile = SeekerProfile::new(
        ["React", "TypeScript", "JavaScript", "Node.js"],
        ["Frontend Developer", "Full Stack Developer"],
        [WorkPreference::Remote, WorkPreference::Hybrid],
    );
    profile.name = Some("Alex Rivera".to_string());
    profile.location = Some("San Francisco, CA".to_string());
    profile.experience_level = Some("Mid Level (3-5 yrs)".to_string());
    profile
}
