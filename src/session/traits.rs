//! Trait definitions for the orchestrator's collaborators.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real clients, while tests substitute mocks
//! with call counters and failure injection.

use async_trait::async_trait;

use crate::model::PlaylistRecord;
use crate::pod::{PodClient, PodError};
use crate::recommend::{Backend, RecommendClient, RecommendError};

/// The recommendation requester seam.
#[async_trait]
pub trait RecommendApi: Send + Sync {
    /// Send a prompt to the chosen backend, returning its reply as text.
    async fn request(&self, prompt: &str, backend: Backend) -> Result<String, RecommendError>;
}

/// The pod storage gateway seam.
#[async_trait]
pub trait PodStorage: Send + Sync {
    /// Candidate storage roots for the identity, in profile order.
    async fn resolve_storage_roots(&self, web_id: &str) -> Result<Vec<String>, PodError>;

    /// Make sure the recommendations container exists under `root`.
    async fn ensure_container(&self, root: &str) -> Result<(), PodError>;

    /// Persist a record under `root`, returning its location.
    async fn write_record(
        &self,
        root: &str,
        record: &PlaylistRecord,
    ) -> Result<String, PodError>;
}

// Implement traits for the real clients

#[async_trait]
impl RecommendApi for RecommendClient {
    async fn request(&self, prompt: &str, backend: Backend) -> Result<String, RecommendError> {
        self.request(prompt, backend).await
    }
}

#[async_trait]
impl PodStorage for PodClient {
    async fn resolve_storage_roots(&self, web_id: &str) -> Result<Vec<String>, PodError> {
        self.resolve_storage_roots(web_id).await
    }

    async fn ensure_container(&self, root: &str) -> Result<(), PodError> {
        self.ensure_container(root).await
    }

    async fn write_record(
        &self,
        root: &str,
        record: &PlaylistRecord,
    ) -> Result<String, PodError> {
        self.write_record(root, record).await
    }
}
