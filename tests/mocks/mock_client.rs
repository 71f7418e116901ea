use dining_moderation::api::{HttpClient, Method, RequestDescriptor};
use dining_moderation::error::ApiError;
use futures::future::{self, FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

type Reply = Result<Option<Value>, ApiError>;

/// In-memory stand-in for the REST backend. Unmatched calls answer 404.
#[derive(Clone, Default)]
pub struct MockClient {
    replies: Rc<RefCell<Vec<(Method, String, Reply, u32)>>>,
    sent: Rc<RefCell<Vec<RequestDescriptor>>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: Method, path: &str, reply: Reply) -> Self {
        self.on_after(method, path, reply, 0)
    }

    /// Like `on`, but the reply arrives after `millis`.
    pub fn on_after(self, method: Method, path: &str, reply: Reply, millis: u32) -> Self {
        self.replies
            .borrow_mut()
            .push((method, path.to_string(), reply, millis));
        self
    }

    pub fn on_get(self, path: &str, body: Value) -> Self {
        self.on(Method::Get, path, Ok(Some(body)))
    }

    pub fn on_put(self, path: &str, reply: Reply) -> Self {
        self.on(Method::Put, path, reply)
    }

    /// Every request sent to `path`, oldest first.
    pub fn sent_to(&self, method: Method, path: &str) -> Vec<RequestDescriptor> {
        self.sent
            .borrow()
            .iter()
            .filter(|request| request.method == method && request.url == path)
            .cloned()
            .collect()
    }
}

impl HttpClient for MockClient {
    fn send(&self, request: RequestDescriptor) -> LocalBoxFuture<'static, Reply> {
        let (reply, millis) = self
            .replies
            .borrow()
            .iter()
            .find(|(method, path, _, _)| *method == request.method && *path == request.url)
            .map(|(_, _, reply, millis)| (reply.clone(), *millis))
            .unwrap_or((
                Err(ApiError::Status {
                    status: 404,
                    body: String::new(),
                }),
                0,
            ));
        self.sent.borrow_mut().push(request);
        if millis == 0 {
            return Box::pin(future::ready(reply));
        }
        TimeoutFuture::new(millis).map(move |_| reply).boxed_local()
    }
}
