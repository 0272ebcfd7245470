//! Solid pod HTTP client
//!
//! Talks to the user's pod with an authenticated fetch capability (a
//! bearer token issued at login). The identity is passed explicitly into
//! every call - nothing here reads ambient session state.

use tracing::{debug, warn};

use super::{document, turtle, vocab};
use crate::model::PlaylistRecord;

/// Fixed container name under the storage root
pub const CONTAINER_NAME: &str = "recommendations";

/// A resolved, authenticated identity. Acquired at login, invalidated at
/// logout; read-only to this module.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The user's WebID (profile document URL)
    pub web_id: String,
}

/// Errors from the pod gateway
#[derive(Debug, Clone, thiserror::Error)]
pub enum PodError {
    /// The identity's profile lists no storage root (or couldn't be fetched)
    #[error("No storage found for identity {0}")]
    NoStorageFound(String),

    /// The recommendations container couldn't be created. Non-fatal to the
    /// larger flow - a save may still be attempted and fail on its own.
    #[error("Could not create the recommendations container: {0}")]
    ContainerCreateFailed(String),

    /// A document write was rejected or never reached the pod
    #[error("Write to pod failed: {0}")]
    WriteFailed(String),

    /// A document or listing couldn't be fetched
    #[error("Read from pod failed: {0}")]
    ReadFailed(String),
}

/// Client for the user's Solid pod
pub struct PodClient {
    http_client: reqwest::Client,
    token: Option<String>,
}

impl PodClient {
    /// Create a client carrying the given bearer token; `None` for pods
    /// with public-write test containers.
    pub fn new(token: Option<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            token,
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// The fixed-name container under a storage root.
    pub fn container_url(root: &str) -> String {
        format!("{}/{CONTAINER_NAME}/", root.trim_end_matches('/'))
    }

    /// Ask the identity's profile for its storage roots (`pim:storage`),
    /// in profile order. Empty or unfetchable profiles fail with
    /// [`PodError::NoStorageFound`].
    pub async fn resolve_storage_roots(&self, web_id: &str) -> Result<Vec<String>, PodError> {
        let not_found = || PodError::NoStorageFound(web_id.to_string());

        let response = self
            .authorized(self.http_client.get(web_id))
            .header(reqwest::header::ACCEPT, "text/turtle")
            .send()
            .await
            .map_err(|e| {
                warn!("profile fetch failed: {e}");
                not_found()
            })?;

        if !response.status().is_success() {
            warn!("profile fetch returned HTTP {}", response.status());
            return Err(not_found());
        }

        let body = response.text().await.map_err(|_| not_found())?;
        let triples = turtle::scan(&body);
        let roots: Vec<String> = turtle::object_iris(&triples, vocab::solid::PIM_STORAGE)
            .into_iter()
            .map(str::to_string)
            .collect();

        if roots.is_empty() {
            return Err(not_found());
        }
        debug!(count = roots.len(), "resolved storage roots");
        Ok(roots)
    }

    /// Make sure `<root>/recommendations/` exists, creating it if absent.
    pub async fn ensure_container(&self, root: &str) -> Result<(), PodError> {
        let url = Self::container_url(root);

        let probe = self
            .authorized(self.http_client.head(&url))
            .send()
            .await;
        if let Ok(response) = probe
            && response.status().is_success()
        {
            return Ok(());
        }

        debug!(%url, "container missing, creating");
        let response = self
            .authorized(self.http_client.put(&url))
            .header(reqwest::header::CONTENT_TYPE, "text/turtle")
            .header(
                reqwest::header::LINK,
                format!("<{}>; rel=\"type\"", vocab::solid::LDP_BASIC_CONTAINER),
            )
            .body("")
            .send()
            .await
            .map_err(|e| PodError::ContainerCreateFailed(e.to_string()))?;

        let status = response.status();
        // 409 means another client created it between probe and PUT
        if status.is_success() || status == reqwest::StatusCode::CONFLICT {
            Ok(())
        } else {
            Err(PodError::ContainerCreateFailed(format!("HTTP {status}")))
        }
    }

    /// Serialize `record` and write it to a freshly derived location under
    /// the container. Returns the location only after the pod itself
    /// reported success.
    pub async fn write_record(
        &self,
        root: &str,
        record: &PlaylistRecord,
    ) -> Result<String, PodError> {
        let location = format!(
            "{}{}-playlist.ttl",
            Self::container_url(root),
            record.identifier
        );
        let body = document::record_to_turtle(record, &location);

        let response = self
            .authorized(self.http_client.put(&location))
            .header(reqwest::header::CONTENT_TYPE, "text/turtle")
            .body(body)
            .send()
            .await
            .map_err(|e| PodError::WriteFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PodError::WriteFailed(format!("HTTP {status}")));
        }

        debug!(%location, "record written");
        Ok(location)
    }

    /// Enumerate prior record documents in the container (`ldp:contains`),
    /// resolving relative members against the container URL.
    pub async fn list_records(&self, root: &str) -> Result<Vec<String>, PodError> {
        let url = Self::container_url(root);
        let body = self.fetch_turtle(&url).await?;
        let triples = turtle::scan(&body);

        Ok(turtle::object_iris(&triples, vocab::solid::LDP_CONTAINS)
            .into_iter()
            .map(|member| {
                if member.starts_with("http://") || member.starts_with("https://") {
                    member.to_string()
                } else {
                    format!("{url}{member}")
                }
            })
            .collect())
    }

    /// Read one prior checkpoint back.
    pub async fn read_record(&self, location: &str) -> Result<PlaylistRecord, PodError> {
        let body = self.fetch_turtle(location).await?;
        Ok(document::record_from_document(location, &body))
    }

    async fn fetch_turtle(&self, url: &str) -> Result<String, PodError> {
        let response = self
            .authorized(self.http_client.get(url))
            .header(reqwest::header::ACCEPT, "text/turtle")
            .send()
            .await
            .map_err(|e| PodError::ReadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PodError::ReadFailed(format!("HTTP {status}")));
        }
        response
            .text()
            .await
            .map_err(|e| PodError::ReadFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_url_normalizes_trailing_slash() {
        assert_eq!(
            PodClient::container_url("https://user.pod.example/"),
            "https://user.pod.example/recommendations/"
        );
        assert_eq!(
            PodClient::container_url("https://user.pod.example"),
            "https://user.pod.example/recommendations/"
        );
    }

    #[tokio::test]
    async fn test_unreachable_pod_maps_to_taxonomy() {
        let client = PodClient::new(None);
        let err = client
            .resolve_storage_roots("http://127.0.0.1:1/profile/card#me")
            .await
            .unwrap_err();
        assert!(matches!(err, PodError::NoStorageFound(_)));

        let record = PlaylistRecord::build("", vec![crate::model::Song::new("1", "A", "B")], vec![]);
        let err = client
            .write_record("http://127.0.0.1:1", &record)
            .await
            .unwrap_err();
        assert!(matches!(err, PodError::WriteFailed(_)));
    }
}
