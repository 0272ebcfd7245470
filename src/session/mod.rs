//! Session orchestrator - drives one recommendation cycle end to end.
//!
//! A cycle is a fixed sequence of awaited steps: validate the selection,
//! checkpoint it to the pod (pre-save), request recommendations, parse
//! them, checkpoint again (post-save). Each step's output gates the next;
//! nothing is pipelined. The pre-save gate is strict: no recommendation is
//! ever requested for a selection that could not be checkpointed. The
//! post-save is best-effort: a failure there is reported in the outcome
//! without retracting the already-surfaced recommendations.

pub mod prompt;
pub mod traits;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tracing::{debug, info, warn};

use crate::model::{PlaylistRecord, Song, SongSelection};
use crate::pod::{Identity, PodError};
use crate::recommend::{self, Backend, RecommendError};
use traits::{PodStorage, RecommendApi};

pub use prompt::build_prompt;

/// Terminal failures of a recommendation cycle.
///
/// Each variant corresponds to a distinct failure point, so a caller can
/// tell the user which step went wrong and decide whether to retry the
/// whole cycle. No step retries on its own.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CycleError {
    /// Validation failed before any I/O
    #[error("No songs selected")]
    NoSongsSelected,

    /// Another cycle is in flight; requests are rejected, never queued
    #[error("A recommendation cycle is already in progress")]
    CycleInProgress,

    /// Storage-root resolution or a checkpoint write failed
    #[error("Could not persist the playlist: {0}")]
    Persistence(#[from] PodError),

    /// The LLM backend failed or returned garbage
    #[error("Recommendation request failed: {0}")]
    Recommendation(#[from] RecommendError),

    /// The backend replied, but with nothing usable
    #[error("The backend returned an empty recommendation")]
    EmptyRecommendation,
}

/// How a cycle ended when it wasn't a terminal failure.
#[derive(Debug)]
pub enum CycleOutcome {
    Completed(CycleReport),
    /// The session was invalidated mid-cycle (logout, navigation); the
    /// in-flight result was discarded and nothing further was persisted.
    Discarded,
}

/// The results of a completed cycle.
#[derive(Debug)]
pub struct CycleReport {
    /// Where the pre-recommendation checkpoint landed
    pub pre_location: String,
    /// Where the post-recommendation checkpoint landed, if it succeeded
    pub post_location: Option<String>,
    /// The failure behind a missing `post_location`
    pub post_save_error: Option<PodError>,
    /// Parsed recommendations, in reply order
    pub recommended: Vec<Song>,
    /// The backend's raw reply text
    pub raw_reply: String,
}

/// Drives recommendation cycles, one at a time.
///
/// Generic over its collaborators so tests can substitute mocks; see
/// [`traits`].
pub struct SessionOrchestrator<R, P> {
    recommender: R,
    storage: P,
    in_flight: AtomicBool,
    epoch: AtomicU64,
}

impl<R: RecommendApi, P: PodStorage> SessionOrchestrator<R, P> {
    pub fn new(recommender: R, storage: P) -> Self {
        Self {
            recommender,
            storage,
            in_flight: AtomicBool::new(false),
            epoch: AtomicU64::new(0),
        }
    }

    pub fn recommender(&self) -> &R {
        &self.recommender
    }

    pub fn storage(&self) -> &P {
        &self.storage
    }

    /// Invalidate any in-flight cycle (logout, navigation). Its result is
    /// discarded when it arrives; no further documents are written.
    pub fn invalidate(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Run one full cycle for `identity`.
    ///
    /// Rejects immediately with [`CycleError::CycleInProgress`] when a
    /// cycle is already running, and with [`CycleError::NoSongsSelected`]
    /// when the selection is empty - the only check before any I/O.
    pub async fn run_cycle(
        &self,
        identity: &Identity,
        selection: &SongSelection,
        description: &str,
        backend: Backend,
    ) -> Result<CycleOutcome, CycleError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(CycleError::CycleInProgress);
        }
        let _guard = InFlightGuard(&self.in_flight);

        if selection.is_empty() {
            return Err(CycleError::NoSongsSelected);
        }
        let cycle_epoch = self.epoch.load(Ordering::SeqCst);

        // SavingPre: resolve storage, ensure the container, checkpoint the
        // selection. Failure here aborts the cycle before any LLM call.
        let roots = self.storage.resolve_storage_roots(&identity.web_id).await?;
        // First root wins when the profile lists several
        let root = roots.first().ok_or_else(|| {
            CycleError::Persistence(PodError::NoStorageFound(identity.web_id.clone()))
        })?;
        if self.is_stale(cycle_epoch) {
            return Ok(CycleOutcome::Discarded);
        }

        if let Err(e) = self.storage.ensure_container(root).await {
            // Non-fatal: the write may still succeed (or fail on its own)
            warn!("container check failed, continuing: {e}");
        }
        if self.is_stale(cycle_epoch) {
            return Ok(CycleOutcome::Discarded);
        }

        let pre_record =
            PlaylistRecord::build(description, selection.songs().to_vec(), Vec::new());
        let pre_location = self.storage.write_record(root, &pre_record).await?;
        info!(%pre_location, "pre-recommendation checkpoint saved");
        if self.is_stale(cycle_epoch) {
            return Ok(CycleOutcome::Discarded);
        }

        // Requesting: the pre-save record stays as-is if this fails.
        let prompt = build_prompt(selection.songs(), description);
        let raw_reply = self.recommender.request(&prompt, backend).await?;
        if self.is_stale(cycle_epoch) {
            return Ok(CycleOutcome::Discarded);
        }

        // Parsing
        if raw_reply.trim().is_empty() {
            return Err(CycleError::EmptyRecommendation);
        }
        let recommended = recommend::parse(&raw_reply);
        debug!(count = recommended.len(), "parsed recommendations");

        // SavingPost: a new record at a new location, never an overwrite
        // of the pre-save document. Best-effort.
        let post_record = PlaylistRecord::build(
            description,
            selection.songs().to_vec(),
            recommended.clone(),
        );
        let (post_location, post_save_error) =
            match self.storage.write_record(root, &post_record).await {
                Ok(location) => {
                    info!(%location, "post-recommendation checkpoint saved");
                    (Some(location), None)
                }
                Err(e) => {
                    warn!("post-recommendation checkpoint failed: {e}");
                    (None, Some(e))
                }
            };

        Ok(CycleOutcome::Completed(CycleReport {
            pre_location,
            post_location,
            post_save_error,
            recommended,
            raw_reply,
        }))
    }

    fn is_stale(&self, cycle_epoch: u64) -> bool {
        let stale = self.epoch.load(Ordering::SeqCst) != cycle_epoch;
        if stale {
            debug!("cycle invalidated, discarding result");
        }
        stale
    }
}

/// Releases the single-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
