//! Shared fixtures for the in-crate tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::client::{ApiClient, ClientConfig};
use crate::error::ApiError;
use crate::session::MemorySession;
use crate::transport::{HttpRequest, HttpResponse, Transport};

/// Records every outgoing request and answers from a queue of canned
/// replies (the first reply repeats once the queue is drained).
pub(crate) struct FakeTransport {
    requests: RefCell<Vec<HttpRequest>>,
    replies: RefCell<Vec<Result<HttpResponse, ApiError>>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Rc<Self> {
        Rc::new(Self {
            requests: RefCell::new(Vec::new()),
            replies: RefCell::new(vec![Ok(HttpResponse {
                status,
                body: body.to_string(),
            })]),
        })
    }

    pub fn failing(error: ApiError) -> Rc<Self> {
        Rc::new(Self {
            requests: RefCell::new(Vec::new()),
            replies: RefCell::new(vec![Err(error)]),
        })
    }

    pub fn push_reply(&self, status: u16, body: &str) {
        self.replies.borrow_mut().push(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .expect("no request was sent")
            .clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for FakeTransport {
    fn send(
        &self,
        request: HttpRequest,
        _timeout_ms: u32,
    ) -> LocalBoxFuture<'static, Result<HttpResponse, ApiError>> {
        self.requests.borrow_mut().push(request);

        let mut replies = self.replies.borrow_mut();
        let reply = if replies.len() > 1 {
            replies.remove(0)
        } else {
            replies[0].clone()
        };
        futures_util::future::ready(reply).boxed_local()
    }
}

/// Client wired to a [`MemorySession`] and a flag recording whether the
/// auth-expiry callback fired.
pub(crate) fn client_with(
    transport: Rc<FakeTransport>,
) -> (ApiClient, MemorySession, Rc<Cell<bool>>) {
    let session = MemorySession::new();
    let expired = Rc::new(Cell::new(false));
    let flag = expired.clone();
    let client = ApiClient::new(
        ClientConfig::default(),
        Rc::new(session.clone()),
        transport,
        move || flag.set(true),
    );
    (client, session, expired)
}
