//! The app-wide API client.
//!
//! One client per browser tab, shared by every page. The session lives in
//! localStorage, requests go out through the Fetch transport, and the
//! 401 policy navigates to the login route. Server-side rendering gets the
//! same shape with a transport that refuses to dispatch, since pages only
//! fetch after hydration.

use std::rc::Rc;

use ordem_client::{ApiClient, BrowserSession, ClientConfig};

thread_local! {
    static API: ApiClient = build();
}

pub fn api() -> ApiClient {
    API.with(Clone::clone)
}

#[cfg(target_arch = "wasm32")]
fn build() -> ApiClient {
    ApiClient::new(
        ClientConfig::default(),
        Rc::new(BrowserSession),
        Rc::new(ordem_client::FetchTransport),
        redirect_to_auth,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn build() -> ApiClient {
    ApiClient::new(
        ClientConfig::default(),
        Rc::new(BrowserSession),
        Rc::new(ordem_client::NullTransport),
        || {},
    )
}

/// Injected 401 policy: the session is already cleared by the dispatcher,
/// all that is left is putting the user back on the login screen. A failed
/// login already renders there, so in that case the page keeps its error
/// state instead of reloading.
#[cfg(target_arch = "wasm32")]
fn redirect_to_auth() {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let onAuthRoute = matches!(location.pathname().as_deref(), Ok("/auth"));
        if !onAuthRoute {
            let _ = location.set_href("/auth");
        }
    }
}
