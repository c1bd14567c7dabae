// Where profiles and postings come from.
// Fixture-backed stores serve the mock dashboards; the remote catalog reads
// the HireFlow backend through `client`.

pub mod fixtures;
pub mod remote;

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::posting::JobPosting;
use crate::models::profile::SeekerProfile;

#[async_trait]
pub trait PostingCatalog: Send + Sync {
    async fn list_postings(&self) -> Result<Vec<JobPosting>, AppError>;

    async fn get_posting(&self, id: &str) -> Result<JobPosting, AppError> {
        self.list_postings()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("posting {id}")))
    }
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, seeker_id: &str) -> Result<SeekerProfile, AppError>;
    async fn put(&self, seeker_id: &str, profile: SeekerProfile) -> Result<(), AppError>;
}

/// Serves a fixed set of postings.
pub struct FixtureCatalog {
    postings: Vec<JobPosting>,
}

impl FixtureCatalog {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }
}

impl Default for FixtureCatalog {
    fn default() -> Self {
        Self::new(fixtures::postings())
    }
}

#[async_trait]
impl PostingCatalog for FixtureCatalog {
    async fn list_postings(&self) -> Result<Vec<JobPosting>, AppError> {
        Ok(self.postings.clone())
    }
}

/// Volatile profile storage; everything is lost on restart.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, SeekerProfile>>,
}

impl InMemoryProfileStore {
    /// Pre-populated with the demo seeker.
    pub fn with_demo() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(fixtures::DEMO_SEEKER_ID.to_string(), fixtures::demo_profile());
        Self {
            profiles: RwLock::new(profiles),
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn get(&self, seeker_id: &str) -> Result<SeekerProfile, AppError> {
        self.profiles
            .read()
            .await
            .get(seeker_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("profile for seeker {seeker_id}")))
    }

    async fn put(&self, seeker_id: &str, profile: SeekerProfile) -> Result<(), AppError> {
        self.profiles
            .write()
            .await
            .insert(seeker_id.to_string(), profile);
        Ok(())
    }
}
