#![allow(non_snake_case)]

//! HTTP client for the Ordem backend.
//!
//! Everything the pages need to talk to the external REST API lives here:
//! the browser session store holding the bearer token, the dispatcher that
//! attaches it and reacts to authorization failures, and one facade module
//! per API area. The network backend is injected, so the whole layer is
//! testable off-browser.

pub mod auth;
pub mod campaigns;
pub mod client;
pub mod error;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, ClientConfig};
pub use error::ApiError;
pub use session::{BrowserSession, MemorySession, SessionStore};
pub use transport::{HttpRequest, HttpResponse, Method, NullTransport, Transport};

#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
