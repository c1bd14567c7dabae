use async_trait::async_trait;
use tracing::{info, warn};

use crate::catalog::PostingCatalog;
use crate::client::types::JobQuery;
use crate::client::HireFlowClient;
use crate::errors::AppError;
use crate::models::posting::JobPosting;

/// Reads postings from the HireFlow backend. Records that fail validation
/// are skipped rather than failing the whole listing.
pub struct RemotePostingCatalog {
    client: HireFlowClient,
    query: JobQuery,
}

impl RemotePostingCatalog {
    pub fn new(client: HireFlowClient) -> Self {
        Self {
            client,
            query: JobQuery::default(),
        }
    }

    pub fn with_query(mut self, query: JobQuery) -> Self {
        self.query = query;
        self
    }
}

#[async_trait]
impl PostingCatalog for RemotePostingCatalog {
    async fn list_postings(&self) -> Result<Vec<JobPosting>, AppError> {
        let jobs = self.client.get_jobs(&self.query).await?;
        let total = jobs.len();

        let postings: Vec<JobPosting> = jobs
            .into_iter()
            .filter_map(|dto| {
                let id = dto.id.clone();
                match JobPosting::try_from(dto) {
                    Ok(posting) => Some(posting),
                    Err(e) => {
                        warn!("Skipping remote posting {id}: {e}");
                        None
                    }
                }
            })
            .collect();

        info!("Loaded {}/{} postings from backend", postings.len(), total);
        Ok(postings)
    }

    async fn get_posting(&self, id: &str) -> Result<JobPosting, AppError> {
        let dto = self.client.get_job(id).await.map_err(|e| match e.status() {
            Some(404) => AppError::NotFound(format!("posting {id}")),
            _ => AppError::from(e),
        })?;
        JobPosting::try_from(dto).map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::Session;
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn backend() -> String {
        let app = Router::new()
            .route(
                "/api/jobs",
                get(|| async {
                    Json(json!([
                        {"id": "j1", "title": "Rust Engineer", "remote": true, "required_skills": ["Rust"]},
                        {"id": "j2", "title": "Broken", "required_skills": []}
                    ]))
                }),
            )
            .route(
                "/api/jobs/:id",
                get(|Path(id): Path<String>| async move {
                    if id == "j1" {
                        Ok(Json(json!({"id": "j1", "title": "Rust Engineer", "required_skills": ["Rust"]})))
                    } else {
                        Err((StatusCode::NOT_FOUND, Json(json!({"detail": "Job not found"}))))
                    }
                }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_invalid_remote_postings_are_skipped() {
        let client = HireFlowClient::new(backend().await, Session::anonymous()).unwrap();
        let catalog = RemotePostingCatalog::new(client);
        let postings = catalog.list_postings().await.unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].id, "j1");
    }

    #[tokio::test]
    async fn test_missing_remote_posting_is_not_found() {
        let client = HireFlowClient::new(backend().await, Session::anonymous()).unwrap();
        let catalog = RemotePostingCatalog::new(client);
        assert!(catalog.get_posting("j1").await.is_ok());
        let err = catalog.get_posting("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
