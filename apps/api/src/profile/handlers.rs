use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::profile::{SeekerProfile, SeekerProfileInput};
use crate::profile::suggestions::{
    profile_strength, suggest_headline, suggest_skills, ProfileStrength,
};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileView {
    pub profile: SeekerProfile,
    pub strength: ProfileStrength,
    pub suggested_headline: String,
    pub suggested_skills: Vec<String>,
}

impl From<SeekerProfile> for ProfileView {
    fn from(profile: SeekerProfile) -> Self {
        Self {
            strength: profile_strength(&profile),
            suggested_headline: suggest_headline(&profile),
            suggested_skills: suggest_skills(&profile),
            profile,
        }
    }
}

/// GET /api/v1/seekers/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
) -> Result<Json<ProfileView>, AppError> {
    let profile = state.profiles.get(&seeker_id).await?;
    Ok(Json(profile.into()))
}

/// PUT /api/v1/seekers/:id/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(seeker_id): Path<String>,
    AppJson(input): AppJson<SeekerProfileInput>,
) -> Result<Json<ProfileView>, AppError> {
    let profile = SeekerProfile::try_from(input)?;
    state.profiles.put(&seeker_id, profile.clone()).await?;
    info!(
        "Stored profile for seeker {seeker_id} ({} skills)",
        profile.skills.len()
    );
    Ok(Json(profile.into()))
}
