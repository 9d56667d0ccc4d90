//! Recording transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::channel::oneshot;

use super::{ApiRequest, ApiResponse, Endpoint, Transport, TransportError};

type Reply = Result<ApiResponse, TransportError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Answers requests from a FIFO script and records every request sent.
#[derive(Default)]
pub(crate) struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    script: RefCell<VecDeque<Scripted>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue an immediate reply.
    pub(crate) fn reply(&self, reply: Reply) -> &Self {
        self.script.borrow_mut().push_back(Scripted::Ready(reply));
        self
    }

    /// Queue a reply that resolves only when the returned sender fires.
    pub(crate) fn gated(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn count(&self, endpoint: Endpoint) -> usize {
        self.requests.borrow().iter().filter(|r| r.endpoint == endpoint).count()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Reply {
        self.requests.borrow_mut().push(request);
        let next = self.script.borrow_mut().pop_front();
        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Gated(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError("gate dropped".to_owned()))),
            None => Err(TransportError("no scripted reply".to_owned())),
        }
    }
}
