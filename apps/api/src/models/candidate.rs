use serde::{Deserialize, Serialize};

use super::profile::{SeekerProfile, WorkPreference};

/// A seeker as seen from the recruiter and company dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    /// Current or target role title, e.g. "Senior React Developer".
    pub role: String,
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub work_preferences: Vec<WorkPreference>,
}

impl Candidate {
    /// Views the candidate as a seeker so the job-side scorer can be reused.
    pub fn as_profile(&self) -> SeekerProfile {
        let mut profile = SeekerProfile::new(
            self.skills.iter().cloned(),
            [self.role.clone()],
            self.work_preferences.iter().copied(),
        );
        profile.name = Some(self.name.clone());
        profile
    }
}
