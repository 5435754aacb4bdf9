use futures_util::future::LocalBoxFuture;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully prepared outgoing request. Built by the dispatcher, consumed by
/// whichever transport is plugged in.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Network backend behind the dispatcher. The browser build sends through
/// the Fetch API; tests plug in canned responses.
pub trait Transport {
    fn send(
        &self,
        request: HttpRequest,
        timeout_ms: u32,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, ApiError>>;
}

/// Fetch-API transport with an AbortController-based timeout.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
impl Transport for FetchTransport {
    fn send(
        &self,
        request: HttpRequest,
        timeout_ms: u32,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, ApiError>> {
        use futures_util::FutureExt;
        fetch(request, timeout_ms).boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch(request: HttpRequest, timeout_ms: u32) -> Result<HttpResponse, ApiError> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{AbortController, Request, RequestInit, Response};

    let window = web_sys::window()
        .ok_or_else(|| ApiError::Network("no browser window available".into()))?;

    let controller = AbortController::new()
        .map_err(|_| ApiError::Network("failed to create abort controller".into()))?;

    let init = RequestInit::new();
    init.set_method(request.method.as_str());
    init.set_signal(Some(&controller.signal()));
    if let Some(body) = &request.body {
        init.set_body(&JsValue::from_str(body));
    }

    let fetchRequest = Request::new_with_str_and_init(&request.url, &init)
        .map_err(|_| ApiError::Network(format!("invalid request for {}", request.url)))?;
    for (name, value) in &request.headers {
        fetchRequest
            .headers()
            .set(name, value)
            .map_err(|_| ApiError::Network(format!("invalid header {name}")))?;
    }

    // Abort the fetch once the timeout elapses; the browser surfaces the
    // abort as a rejected fetch promise.
    let abort = Closure::once_into_js(move || controller.abort());
    let timeoutHandle = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.unchecked_ref(),
            timeout_ms as i32,
        )
        .map_err(|_| ApiError::Network("failed to arm request timeout".into()))?;

    let fetched = JsFuture::from(window.fetch_with_request(&fetchRequest)).await;
    window.clear_timeout_with_handle(timeoutHandle);

    let response: Response = fetched
        .map_err(|_| ApiError::Network(format!("request to {} failed", request.url)))?
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not produce a response".into()))?;

    let textPromise = response
        .text()
        .map_err(|_| ApiError::Network("response body unreadable".into()))?;
    let text = JsFuture::from(textPromise)
        .await
        .map_err(|_| ApiError::Network("response body unreadable".into()))?;

    Ok(HttpResponse {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

/// Transport for contexts that must never reach the network (server-side
/// rendering); every send fails as a network error.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTransport;

impl Transport for NullTransport {
    fn send(
        &self,
        request: HttpRequest,
        _timeout_ms: u32,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, ApiError>> {
        use futures_util::FutureExt;
        futures_util::future::ready(Err(ApiError::Network(format!(
            "no network backend for {} on this target",
            request.url
        ))))
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let request = HttpRequest {
            method: Method::Get,
            url: "http://localhost:8080/api/campaigns".into(),
            headers: vec![("Authorization".into(), "Bearer tok".into())],
            body: None,
        };
        assert_eq!(request.header("authorization"), Some("Bearer tok"));
        assert_eq!(request.header("Content-Type"), None);
    }

    #[test]
    fn methods_render_as_http_verbs() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Post.as_str(), "POST");
        assert_eq!(Method::Put.as_str(), "PUT");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }
}
