//! [`KeyboardExecutor`] backed by `Input.dispatchKeyEvent`.

mod state;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;
use webhands_protocols::{ElementHandle, KeyError, KeyboardExecutor, LogicalKey};

use crate::cdp::{KeyEventParams, PageSession};

pub use state::ModifierState;

/// Types into a page, keeping modifier state between calls.
pub struct CdpKeyboard {
    page: Arc<PageSession>,
    state: Mutex<ModifierState>,
    key_delay: Duration,
}

impl CdpKeyboard {
    pub fn new(page: Arc<PageSession>) -> Self {
        Self {
            page,
            state: Mutex::new(ModifierState::new()),
            key_delay: Duration::ZERO,
        }
    }

    /// Pause between consecutive keys.
    pub fn with_key_delay(mut self, delay: Duration) -> Self {
        self.key_delay = delay;
        self
    }

    /// Snapshot of the modifiers currently held.
    pub fn modifiers(&self) -> ModifierState {
        self.state.lock().clone()
    }

    async fn send(&self, event: KeyEventParams) -> Result<(), KeyError> {
        self.page.dispatch_key_event(&event).await?;
        Ok(())
    }
}

/// Plan events on a copy of `state`, dispatch them, and commit the copy only
/// when every event was delivered.
async fn apply<P, D, Fut>(state: &Mutex<ModifierState>, plan: P, dispatch: D) -> Result<(), KeyError>
where
    P: FnOnce(&mut ModifierState) -> Vec<KeyEventParams>,
    D: Fn(KeyEventParams) -> Fut,
    Fut: Future<Output = Result<(), KeyError>>,
{
    let mut next = state.lock().clone();
    for event in plan(&mut next) {
        dispatch(event).await?;
    }
    *state.lock() = next;
    Ok(())
}

/// Release held modifiers one at a time so a failure leaves only the
/// modifiers that are really still down.
async fn release_held<D, Fut>(state: &Mutex<ModifierState>, dispatch: D) -> Result<(), KeyError>
where
    D: Fn(KeyEventParams) -> Fut,
    Fut: Future<Output = Result<(), KeyError>>,
{
    while !state.lock().held().is_empty() {
        apply(state, |s| s.release_last().into_iter().collect(), &dispatch).await?;
    }
    Ok(())
}

#[async_trait]
impl KeyboardExecutor for CdpKeyboard {
    async fn execute(
        &self,
        element: &ElementHandle,
        keys: &[LogicalKey],
        persist: bool,
    ) -> Result<(), KeyError> {
        debug!(
            "Executing {} keys on {} (persist: {})",
            keys.len(),
            element,
            persist
        );
        self.page.focus(element).await?;

        for (i, key) in keys.iter().enumerate() {
            if i > 0 && !self.key_delay.is_zero() {
                tokio::time::sleep(self.key_delay).await;
            }
            apply(&self.state, |s| s.press(key), |event| self.send(event)).await?;
        }

        if !persist {
            release_held(&self.state, |event| self.send(event)).await?;
        }

        Ok(())
    }
}
