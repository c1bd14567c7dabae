#![allow(dead_code)]

//! HireFlow backend client: the single point of contact with the remote API.
//!
//! Authentication lives in an explicit `Session`; the token is persisted
//! through whatever `TokenStore` the caller injects.

use std::time::Duration;

use reqwest::{multipart, Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod session;
pub mod types;

use crate::models::profile::SeekerProfileInput;
use session::Session;
use types::*;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Token store error: {0}")]
    TokenStore(#[from] std::io::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

#[derive(Clone)]
pub struct HireFlowClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl HireFlowClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attaches the bearer token, sends, and decodes a JSON body.
    /// Non-2xx responses surface the backend's `detail` message.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let request = match self.session.token()? {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let detail = error_detail(status, &body);
            warn!("HireFlow API returned {}: {}", status.as_u16(), detail);
            return Err(ClientError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(serde_json::from_slice(&body)?)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        debug!("GET {path}");
        self.send(self.http.get(self.url(path))).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        debug!("POST {path}");
        self.send(self.http.post(self.url(path)).json(body)).await
    }

    // ── Auth ───────────────────────────────────────────────────────────────

    pub async fn register(&self, request: &RegisterRequest) -> Result<TokenResponse, ClientError> {
        let response: TokenResponse = self.post("/api/auth/register", request).await?;
        self.session.set_token(&response.access_token)?;
        info!("Registered {} as {:?}", response.user.email, response.user.role);
        Ok(response)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ClientError> {
        let response: TokenResponse = self
            .post("/api/auth/login", &LoginRequest { email, password })
            .await?;
        self.session.set_token(&response.access_token)?;
        info!("Logged in as {}", response.user.email);
        Ok(response)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.session.clear()?;
        Ok(())
    }

    // ── Seeker ─────────────────────────────────────────────────────────────

    pub async fn get_profile(&self) -> Result<SeekerProfileResponse, ClientError> {
        self.get("/api/seeker/profile").await
    }

    pub async fn update_profile(
        &self,
        profile: &SeekerProfileInput,
    ) -> Result<SeekerProfileResponse, ClientError> {
        self.post("/api/seeker/profile", profile).await
    }

    pub async fn upload_resume(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<ResumeUploadResponse, ClientError> {
        let part = multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", part);
        debug!("POST /api/seeker/resume/upload ({file_name})");
        self.send(
            self.http
                .post(self.url("/api/seeker/resume/upload"))
                .multipart(form),
        )
        .await
    }

    pub async fn get_matches(&self, min_score: u8) -> Result<Vec<JobMatchDto>, ClientError> {
        self.send(
            self.http
                .get(self.url("/api/seeker/jobs/matches"))
                .query(&[("min_score", min_score)]),
        )
        .await
    }

    pub async fn generate_ai_summary(
        &self,
        request: &AiSummaryRequest,
    ) -> Result<AiSummaryResponse, ClientError> {
        self.post("/api/seeker/ai/summary", request).await
    }

    // ── Jobs ───────────────────────────────────────────────────────────────

    pub async fn get_jobs(&self, query: &JobQuery) -> Result<Vec<JobDto>, ClientError> {
        self.send(self.http.get(self.url("/api/jobs")).query(query))
            .await
    }

    pub async fn get_job(&self, id: &str) -> Result<JobDto, ClientError> {
        self.get(&format!("/api/jobs/{id}")).await
    }

    pub async fn create_job(&self, job: &JobCreate) -> Result<JobDto, ClientError> {
        self.post("/api/jobs", job).await
    }

    pub async fn apply_to_job(
        &self,
        job_id: &str,
        cover_letter: Option<&str>,
    ) -> Result<ApplicationDto, ClientError> {
        let body = serde_json::json!({
            "job_id": job_id,
            "cover_letter": cover_letter.unwrap_or_default(),
        });
        self.post(&format!("/api/jobs/{job_id}/apply"), &body).await
    }

    pub async fn get_my_applications(&self) -> Result<Vec<ApplicationDto>, ClientError> {
        self.get("/api/jobs/me/applications").await
    }

    // ── Recruiter ──────────────────────────────────────────────────────────

    pub async fn search_candidates(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<CandidateDto>, ClientError> {
        self.send(
            self.http
                .get(self.url("/api/recruiter/candidates"))
                .query(query),
        )
        .await
    }

    pub async fn get_recruiter_pipeline(&self) -> Result<serde_json::Value, ClientError> {
        self.get("/api/recruiter/pipeline").await
    }

    pub async fn get_recruiter_analytics(&self) -> Result<serde_json::Value, ClientError> {
        self.get("/api/recruiter/analytics").await
    }

    // ── Company ────────────────────────────────────────────────────────────

    pub async fn get_company_dashboard(&self) -> Result<serde_json::Value, ClientError> {
        self.get("/api/company/dashboard").await
    }

    pub async fn get_company_analytics(&self) -> Result<serde_json::Value, ClientError> {
        self.get("/api/company/analytics").await
    }

    // ── Chat ───────────────────────────────────────────────────────────────

    pub async fn send_message(
        &self,
        recipient_id: &str,
        content: &str,
    ) -> Result<MessageDto, ClientError> {
        self.post(
            "/api/chat/messages",
            &MessageSend {
                recipient_id,
                content,
            },
        )
        .await
    }

    pub async fn get_conversations(&self) -> Result<Vec<ConversationDto>, ClientError> {
        self.get("/api/chat/conversations").await
    }

    pub async fn get_messages(&self, conversation_id: &str) -> Result<Vec<MessageDto>, ClientError> {
        self.get(&format!("/api/chat/conversations/{conversation_id}/messages"))
            .await
    }
}

/// Prefers the backend's `detail` field, falling back to the status reason.
fn error_detail(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .map(|detail| match detail {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("API error {}", status.as_u16()))
        })
}
