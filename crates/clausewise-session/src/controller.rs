use std::path::{Path, PathBuf};

use clausewise_ai::Gateway;
use clausewise_core::document;
use futures::future::join_all;
use tracing::debug;

use crate::error::SessionError;
use crate::intent::{Intent, UploadTarget};
use crate::store::{SLOT_COUNT, SessionStore, Settings};

/// Owns a [`SessionStore`] and runs the effects it produces against a
/// [`Gateway`].
pub struct Controller {
    store: SessionStore,
    gateway: Gateway,
}

impl Controller {
    pub fn new(gateway: Gateway, settings: Settings) -> Self {
        Self {
            store: SessionStore::new(settings),
            gateway,
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Handle one intent, awaiting any request it triggers.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<(), SessionError> {
        if let Some(effect) = self.store.handle(intent)? {
            let outcome = effect.run(&self.gateway).await;
            self.store.apply(outcome);
        }
        Ok(())
    }

    /// Handle several intents, then run the resulting requests concurrently.
    /// Outcomes are applied as a batch once all of them have finished.
    pub async fn dispatch_all(
        &mut self,
        intents: impl IntoIterator<Item = Intent>,
    ) -> Result<(), SessionError> {
        let mut effects = Vec::new();
        for intent in intents {
            if let Some(effect) = self.store.handle(intent)? {
                effects.push(effect);
            }
        }
        debug!(requests = effects.len(), "running requests concurrently");
        let gateway = &self.gateway;
        let outcomes = join_all(effects.into_iter().map(|e| e.run(gateway))).await;
        for outcome in outcomes {
            self.store.apply(outcome);
        }
        Ok(())
    }

    pub async fn upload_file(
        &mut self,
        target: UploadTarget,
        path: &Path,
    ) -> Result<(), SessionError> {
        let document = document::encode_file(path).await?;
        self.dispatch(Intent::Upload { target, document }).await
    }

    /// Fill the comparison slots in order. Paths past the last slot are
    /// never read.
    pub async fn upload_files(&mut self, paths: &[PathBuf]) -> Result<(), SessionError> {
        let mut documents = Vec::with_capacity(SLOT_COUNT);
        for path in paths.iter().take(SLOT_COUNT) {
            documents.push(document::encode_file(path).await?);
        }
        self.dispatch(Intent::BulkUpload(documents)).await
    }
}
