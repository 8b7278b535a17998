//! Chrome DevTools Protocol backend for WebHands.
//!
//! Supplies the two collaborators the atoms need from a live browser:
//!
//! - [`CdpDomAdapter`] implements [`DomAdapter`](webhands_protocols::DomAdapter)
//!   by calling small script functions on the element's remote object
//! - [`CdpKeyboard`] implements
//!   [`KeyboardExecutor`](webhands_protocols::KeyboardExecutor) with
//!   `Input.dispatchKeyEvent`
//!
//! ## Setup
//!
//! Start Chrome with remote debugging enabled:
//!
//! ```bash
//! google-chrome --remote-debugging-port=9222
//! ```
//!
//! ```rust,ignore
//! let client = CdpClient::connect("http://localhost:9222").await?;
//! let page = Arc::new(client.new_page(Some("https://example.com")).await?);
//! page.wait_for_load(Duration::from_secs(10)).await?;
//! let element = page.query_selector("a").await?.expect("link");
//! let dom = CdpDomAdapter::new(page.clone());
//! let value = AttributeResolver::new(&dom).resolve(&element, "href").await?;
//! ```

mod adapter;
pub mod cdp;
mod keyboard;

pub use adapter::CdpDomAdapter;
pub use cdp::{CdpClient, CdpError, KeyEventParams, PageSession};
pub use keyboard::{CdpKeyboard, ModifierState};
