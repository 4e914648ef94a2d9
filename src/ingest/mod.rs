use std::sync::{Arc, OnceLock};

use tokio::sync::{Mutex, watch};

use crate::{
    errors,
    ingest::{
        record::Dataset,
        source::{CustomerSource, read_dataset},
        state::LoadState,
    },
};

pub mod record;
pub mod source;
pub mod state;

pub type LoadOutcome = errors::Result<Arc<Dataset>>;

// Completion signal shared by every caller attached to one read.
// `None` until the read finishes.
type InflightLoad = watch::Receiver<Option<LoadOutcome>>;

/// Owns the in-memory dataset and makes sure the source is read at most once
/// per successful load, no matter how many callers trigger it concurrently.
#[derive(Debug, Clone)]
pub struct IngestionGate {
    source: Arc<dyn CustomerSource + Send + Sync>,
    // Set exactly once, by the task that finished the read. Lock-free for readers.
    dataset: Arc<OnceLock<Arc<Dataset>>>,
    // Guards the Empty -> Loading -> (Loaded | Empty) transitions.
    inflight: Arc<Mutex<Option<InflightLoad>>>,
    empty: Arc<Dataset>,
}

impl IngestionGate {
    pub fn new(source: Box<dyn CustomerSource + Send + Sync>) -> Self {
        Self {
            source: Arc::from(source),
            dataset: Arc::new(OnceLock::new()),
            inflight: Arc::new(Mutex::new(None)),
            empty: Arc::new(Dataset::empty()),
        }
    }

    /// The currently published dataset, or an empty one if nothing has loaded yet.
    pub fn snapshot(&self) -> Arc<Dataset> {
        match self.dataset.get() {
            Some(dataset) => dataset.clone(),
            None => self.empty.clone(),
        }
    }

    pub async fn load_state(&self) -> LoadState {
        if self.dataset.get().is_some() {
            return LoadState::Loaded;
        }

        let inflight = self.inflight.lock().await;

        if self.dataset.get().is_some() {
            LoadState::Loaded
        } else if inflight.is_some() {
            LoadState::Loading
        } else {
            LoadState::Empty
        }
    }

    pub async fn ensure_loaded(&self) -> LoadOutcome {
        if let Some(dataset) = self.dataset.get() {
            return Ok(dataset.clone());
        }

        let mut receiver = {
            let mut inflight = self.inflight.lock().await;

            // The read may have completed while we waited for the lock.
            if let Some(dataset) = self.dataset.get() {
                return Ok(dataset.clone());
            }

            match inflight.as_ref() {
                Some(receiver) => receiver.clone(),
                None => {
                    let receiver = self.start_load();
                    *inflight = Some(receiver.clone());
                    receiver
                }
            }
        };

        let outcome = match receiver.wait_for(|outcome| outcome.is_some()).await {
            Ok(outcome) => outcome.clone(),
            Err(_) => None,
        };

        outcome.unwrap_or_else(|| {
            Err(errors::Errors::new(errors::ErrorCodes::IngestionError)
                .with_message("load task ended without a result".to_string()))
        })
    }

    // Must be called with the inflight slot locked. The read runs on a detached task,
    // so the state leaves Loading even if every caller is dropped.
    fn start_load(&self) -> InflightLoad {
        let (sender, receiver) = watch::channel(None);

        let source = self.source.clone();
        let dataset = self.dataset.clone();
        let inflight = self.inflight.clone();

        log::info!("Loading customers from {}", source.describe());

        tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || read_dataset(source.as_ref()))
                .await
                .unwrap_or_else(|e| {
                    Err(errors::Errors::new(errors::ErrorCodes::IngestionError)
                        .with_message(format!("load task failed: {}", e)))
                })
                .map(Arc::new);

            {
                let mut inflight = inflight.lock().await;

                match &outcome {
                    Ok(loaded) => {
                        // The slot lock makes this task the only writer.
                        if dataset.set(loaded.clone()).is_err() {
                            log::error!("Dataset was already published, discarding the new read");
                            debug_assert!(false, "dataset published twice");
                        } else {
                            log::info!("Loaded {} customers from CSV", loaded.len());
                        }
                    }
                    Err(error) => {
                        log::error!("Failed to load CSV data: {}", error);
                    }
                }

                *inflight = None;
            }

            let _ = sender.send(Some(outcome));
        });

        receiver
    }
}
