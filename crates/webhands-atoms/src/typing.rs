//! Typing driver.

use tracing::{debug, trace};
use webhands_protocols::{ElementHandle, KeyError, KeyboardExecutor};

use crate::keys::KeySequenceTranslator;

/// Types translated key batches into an element, one executor call per batch.
pub struct TypeOrchestrator<'a, K: KeyboardExecutor + ?Sized> {
    executor: &'a K,
}

impl<'a, K: KeyboardExecutor + ?Sized> TypeOrchestrator<'a, K> {
    pub fn new(executor: &'a K) -> Self {
        Self { executor }
    }

    /// Translate `sequences` and execute every batch in order.
    ///
    /// Translation errors surface before any key is dispatched. An executor
    /// failure stops at the failing batch; batches already executed are not
    /// undone.
    pub async fn type_keys<S: AsRef<str> + Sync>(
        &self,
        element: &ElementHandle,
        sequences: &[S],
        persist_modifiers: bool,
    ) -> Result<(), KeyError> {
        let batches = KeySequenceTranslator::translate(sequences, persist_modifiers)?;
        debug!("Typing {} key batches into element {}", batches.len(), element);

        for (index, batch) in batches.iter().enumerate() {
            trace!(
                "Executing batch {} ({} keys, persist={})",
                index,
                batch.keys.len(),
                batch.persist
            );
            self.executor
                .execute(element, &batch.keys, batch.persist)
                .await?;
        }

        Ok(())
    }
}
