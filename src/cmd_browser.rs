//! Subcommands that drive a live browser over CDP.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info, warn};

use webhands_atoms::ElementAtoms;
use webhands_config::{Config, ConfigValidator};
use webhands_dom_cdp::{CdpClient, CdpDomAdapter, CdpKeyboard, PageSession};
use webhands_protocols::ElementHandle;

use crate::cli::decode_escapes;

struct Session {
    client: CdpClient,
    page: Arc<PageSession>,
    element: ElementHandle,
}

impl Session {
    async fn open(config: &Config, url: &str, selector: &str) -> anyhow::Result<Self> {
        ConfigValidator::validate(config).ensure_valid()?;

        let timeout = Duration::from_millis(config.browser.command_timeout_ms);
        let client = CdpClient::connect_with_timeout(&config.browser.endpoint, timeout).await?;
        info!("Connected to {}", config.browser.endpoint);

        let page = Arc::new(client.new_page(Some(url)).await?);
        let element = match locate(&page, timeout, selector).await {
            Ok(element) => element,
            Err(e) => {
                if let Err(close_err) = client.close_page(&page).await {
                    warn!("Failed to close page {}: {}", page.target_id(), close_err);
                }
                return Err(e);
            }
        };

        Ok(Self {
            client,
            page,
            element,
        })
    }

    fn atoms(&self, config: &Config) -> ElementAtoms<CdpDomAdapter, CdpKeyboard> {
        let keyboard = CdpKeyboard::new(self.page.clone())
            .with_key_delay(Duration::from_millis(config.keyboard.key_delay_ms));
        ElementAtoms::new(
            Arc::new(CdpDomAdapter::new(self.page.clone())),
            Arc::new(keyboard),
        )
    }

    /// Release the element and close the page.
    async fn close(self) -> anyhow::Result<()> {
        if let Err(e) = self.page.release_object(self.element.id()).await {
            debug!("Failed to release {}: {}", self.element, e);
        }
        self.client.close_page(&self.page).await?;
        Ok(())
    }
}

/// Wait for the page to load and find the target element.
async fn locate(page: &PageSession, timeout: Duration, selector: &str) -> anyhow::Result<ElementHandle> {
    page.wait_for_load(timeout).await?;
    page.query_selector(selector)
        .await?
        .with_context(|| format!("No element matches {}", selector))
}

/// Keep the operation's error over a cleanup error.
fn prefer_first<T>(result: anyhow::Result<T>, cleanup: anyhow::Result<()>) -> anyhow::Result<T> {
    match (result, cleanup) {
        (Err(e), Err(cleanup_err)) => {
            warn!("Cleanup failed after error: {}", cleanup_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(_), Err(cleanup_err)) => Err(cleanup_err),
        (Ok(value), Ok(())) => Ok(value),
    }
}

/// Resolve an attribute and print it, or `null`.
pub(crate) async fn attr(config: &Config, url: &str, selector: &str, name: &str) -> anyhow::Result<()> {
    let session = Session::open(config, url, selector).await?;
    let result = session
        .atoms(config)
        .resolve_attribute(&session.element, name)
        .await;
    let value = prefer_first(result.map_err(Into::into), session.close().await)?;

    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

/// Type sequences into the selected element.
pub(crate) async fn type_keys(
    config: &Config,
    url: &str,
    selector: &str,
    sequences: &[String],
    persist: bool,
) -> anyhow::Result<()> {
    let decoded = sequences
        .iter()
        .map(|s| decode_escapes(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let session = Session::open(config, url, selector).await?;
    let result = session
        .atoms(config)
        .type_keys(&session.element, &decoded, persist)
        .await;
    prefer_first(result.map_err(Into::into), session.close().await)?;

    info!("Typed {} sequences into {}", decoded.len(), selector);
    Ok(())
}
