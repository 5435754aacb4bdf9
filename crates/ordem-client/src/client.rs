use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session::SessionStore;
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base address of the external backend, including the `/api` prefix.
    pub base_url: String,
    pub timeout_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".into(),
            timeout_ms: 10_000,
        }
    }
}

/// Authenticated request dispatcher.
///
/// Every outgoing request goes through here: the bearer token is attached
/// when one is stored and the target is not an auth route, and every 401
/// response clears the session and fires the injected expiry callback so
/// no later request can retry with a known-bad credential. Which
/// navigation (if any) happens on expiry is the caller's business, not the
/// network layer's.
#[derive(Clone)]
pub struct ApiClient {
    config: Rc<ClientConfig>,
    session: Rc<dyn SessionStore>,
    transport: Rc<dyn Transport>,
    on_auth_expired: Rc<dyn Fn()>,
}

/// Login and registration go out unauthenticated even when a token is
/// stored.
fn is_auth_route(path: &str) -> bool {
    path.contains("/auth/") || path.contains("/game-masters")
}

impl ApiClient {
    pub fn new(
        config: ClientConfig,
        session: Rc<dyn SessionStore>,
        transport: Rc<dyn Transport>,
        on_auth_expired: impl Fn() + 'static,
    ) -> Self {
        Self {
            config: Rc::new(config),
            session,
            transport,
            on_auth_expired: Rc::new(on_auth_expired),
        }
    }

    pub fn session(&self) -> &dyn SessionStore {
        self.session.as_ref()
    }

    fn prepare(&self, method: Method, path: &str, body: Option<String>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        if !is_auth_route(path) {
            if let Some(token) = self.session.get() {
                headers.push(("Authorization".to_string(), format!("Bearer {token}")));
            }
        }

        HttpRequest {
            method,
            url: format!("{}{}", self.config.base_url, path),
            headers,
            body,
        }
    }

    fn handle_response(&self, response: HttpResponse) -> Result<String, ApiError> {
        match response.status {
            200..=299 => Ok(response.body),
            401 => {
                self.session.clear();
                (self.on_auth_expired)();
                Err(ApiError::Unauthorized)
            }
            status => Err(ApiError::Status(status)),
        }
    }

    /// Sends one request and applies the response policy. Returns the raw
    /// body; the typed wrappers below are what facades use.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let prepared = self.prepare(method, path, body);
        let response = self
            .transport
            .send(prepared, self.config.timeout_ms)
            .await?;
        self.handle_response(response)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.request(Method::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let body = self
            .request(Method::Post, path, Some(encode(payload)?))
            .await?;
        decode(&body)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        let body = self
            .request(Method::Put, path, Some(encode(payload)?))
            .await?;
        decode(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request(Method::Delete, path, None).await?;
        Ok(())
    }
}

fn encode<B: Serialize>(payload: &B) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
