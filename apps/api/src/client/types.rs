#![allow(dead_code)]
//! Wire types for the remote HireFlow backend.

use serde::{Deserialize, Serialize};

use crate::models::posting::{JobPosting, JobPostingInput};
use crate::models::profile::SeekerProfileInput;
use crate::models::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Seeker,
    Recruiter,
    Company,
}

// ── Auth ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Required by the backend for company accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "bearer")]
    pub token_type: String,
    pub user: UserPublic,
}

fn bearer() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPublic {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub name: Option<String>,
    pub company_name: Option<String>,
}

// ── Seeker ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerProfileResponse {
    pub id: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: SeekerProfileInput,
    pub ai_summary: Option<String>,
    #[serde(default)]
    pub profile_strength: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeUploadResponse {
    pub message: String,
    pub parsed_profile: serde_json::Value,
    pub ai_summary: String,
    pub skills_extracted: u32,
    pub experience_extracted: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiSummaryRequest {
    pub name: String,
    pub skills: Vec<String>,
    pub desired_roles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiSummaryResponse {
    pub summary: String,
    pub suggested_headline: String,
    #[serde(default)]
    pub suggested_skills: Vec<String>,
}

// ── Jobs ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDto {
    pub id: String,
    pub company_id: String,
    pub company_name: Option<String>,
    pub title: String,
    pub location: String,
    pub salary_display: Option<String>,
    #[serde(rename = "type")]
    pub job_type: String,
    pub remote: bool,
    pub description: String,
    pub required_skills: Vec<String>,
    pub nice_skills: Vec<String>,
    pub experience_level: Option<String>,
    pub status: String,
    pub applicant_count: u32,
    pub created_at: String,
}

impl TryFrom<JobDto> for JobPosting {
    type Error = ValidationError;

    fn try_from(dto: JobDto) -> Result<Self, Self::Error> {
        JobPosting::try_from(JobPostingInput {
            id: Some(dto.id),
            title: dto.title,
            company: dto.company_name,
            location: Some(dto.location),
            salary: dto.salary_display,
            required_skills: dto.required_skills,
            nice_to_have_skills: dto.nice_skills,
            is_remote: dto.remote,
        })
    }
}

/// A job as ranked by the backend's own matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatchDto {
    #[serde(flatten)]
    pub job: JobDto,
    pub match_score: u8,
    #[serde(default)]
    pub matched_required: Vec<String>,
    #[serde(default)]
    pub matched_nice: Vec<String>,
    #[serde(default)]
    pub match_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobCreate {
    pub title: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<u32>,
    #[serde(rename = "type")]
    pub job_type: String,
    pub remote: bool,
    pub description: String,
    pub required_skills: Vec<String>,
    pub nice_skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
}

/// Query string for `GET /api/jobs`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct JobQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub remote_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDto {
    pub id: String,
    pub job_id: String,
    pub seeker_id: String,
    pub status: String,
    pub cover_letter: Option<String>,
    pub job: Option<JobDto>,
    #[serde(default)]
    pub created_at: String,
}

// ── Recruiter ──────────────────────────────────────────────────────────────

/// Query string for `GET /api/recruiter/candidates`. `skills` is sent comma-separated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CandidateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CandidateQuery {
    pub fn with_skills<S: AsRef<str>>(mut self, skills: &[S]) -> Self {
        let joined = skills
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.skills = (!joined.is_empty()).then_some(joined);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDto {
    pub id: String,
    pub name: String,
    pub headline: Option<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub experience_level: Option<String>,
    #[serde(default)]
    pub desired_roles: Vec<String>,
    #[serde(default)]
    pub match_score: u8,
    #[serde(default)]
    pub status: String,
}

// ── Chat ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub(crate) struct MessageSend<'a> {
    pub recipient_id: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub sender_name: Option<String>,
    pub content: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDto {
    pub id: String,
    pub participants: Vec<String>,
    #[serde(default)]
    pub participant_names: std::collections::HashMap<String, String>,
    pub last_message: Option<String>,
    pub last_message_at: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}
