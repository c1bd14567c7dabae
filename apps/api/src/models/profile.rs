use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize_list, ValidationError};

/// Where a seeker is willing to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkPreference {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    OnSite,
}

impl FromStr for WorkPreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(WorkPreference::Remote),
            "hybrid" => Ok(WorkPreference::Hybrid),
            "on-site" | "onsite" => Ok(WorkPreference::OnSite),
            _ => Err(ValidationError::UnknownWorkPreference(s.to_string())),
        }
    }
}

impl fmt::Display for WorkPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkPreference::Remote => "Remote",
            WorkPreference::Hybrid => "Hybrid",
            WorkPreference::OnSite => "On-site",
        };
        f.write_str(label)
    }
}

/// Untyped profile as it arrives from the wizard or the remote backend.
/// Every field is optional on the wire; `TryFrom` turns it into a `SeekerProfile`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekerProfileInput {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub skills: Vec<String>,
    pub desired_roles: Vec<String>,
    pub work_preferences: Vec<String>,
    pub experience_level: Option<String>,
    pub summary: Option<String>,
}

/// The query side of matching: what a seeker knows, wants, and where they'll work.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekerProfile {
    pub name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    /// Display-cased, deduplicated case-insensitively.
    pub skills: Vec<String>,
    /// Ordered by preference.
    pub desired_roles: Vec<String>,
    pub work_preferences: Vec<WorkPreference>,
    pub experience_level: Option<String>,
    pub summary: Option<String>,
}

impl SeekerProfile {
    /// Builds a profile from its three scoring fields, leaving display fields empty.
    pub fn new(
        skills: impl IntoIterator<Item = impl Into<String>>,
        desired_roles: impl IntoIterator<Item = impl Into<String>>,
        work_preferences: impl IntoIterator<Item = WorkPreference>,
    ) -> Self {
        let mut prefs: Vec<WorkPreference> = Vec::new();
        for p in work_preferences {
            if !prefs.contains(&p) {
                prefs.push(p);
            }
        }
        Self {
            name: None,
            headline: None,
            location: None,
            skills: normalize_list(skills.into_iter().map(Into::into)),
            desired_roles: normalize_list(desired_roles.into_iter().map(Into::into)),
            work_preferences: prefs,
            experience_level: None,
            summary: None,
        }
    }

    pub fn prefers(&self, pref: WorkPreference) -> bool {
        self.work_preferences.contains(&pref)
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        let needle = skill.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == needle)
    }
}

impl TryFrom<SeekerProfileInput> for SeekerProfile {
    type Error = ValidationError;

    fn try_from(input: SeekerProfileInput) -> Result<Self, Self::Error> {
        let work_preferences = input
            .work_preferences
            .iter()
            .map(|p| p.parse::<WorkPreference>())
            .collect::<Result<Vec<_>, _>>()?;

        let mut profile = SeekerProfile::new(input.skills, input.desired_roles, work_preferences);
        profile.name = non_blank(input.name);
        profile.headline = non_blank(input.headline);
        profile.location = non_blank(input.location);
        profile.experience_level = non_blank(input.experience_level);
        profile.summary = non_blank(input.summary);
        Ok(profile)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
