//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`ResourceClient`] without
//! spawning a real [`ResourceActor`](crate::framework::ResourceActor).
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, only scripted replies | Real store and pipelines |
//! | **Error Injection** | Easy (`return_err`) | Needs a matching store state |
//! | **Use Case** | Client wrappers, HTTP error mapping | The actor itself, full system |
//!
//! There are two styles:
//!
//! - [`MockClient`] scripts replies up front and checks them with [`MockClient::verify`].
//! - [`create_mock_client`] hands back the raw receiver; the `expect_*` helpers
//!   pull the next request off it so the test can inspect the payload and answer.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Dish>::new();
//! mock.expect_get("1").return_err(FrameworkError::ActorClosed);
//!
//! let dishes = DishClient::new(mock.client());
//! assert!(matches!(dishes.get("1").await, Err(ApiError::Unavailable(_))));
//! mock.verify();
//! ```

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use crate::pipeline::Payload;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// The scripted reply for one expected request.
enum Reply<T: ActorEntity> {
    List(Result<Vec<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Get(Result<T, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
}

struct Expectation<T: ActorEntity> {
    id: Option<String>,
    reply: Reply<T>,
}

struct Shared<T: ActorEntity> {
    expectations: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

fn lock<T: ActorEntity>(shared: &Mutex<Shared<T>>) -> MutexGuard<'_, Shared<T>> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn check_id(expected: Option<String>, actual: &str, failures: &mut Vec<String>) {
    if let Some(expected) = expected {
        if expected != actual {
            failures.push(format!("expected id {expected}, got {actual}"));
        }
    }
}

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in the order they were added.
/// A request that does not match is recorded and its reply channel dropped,
/// so the caller sees [`FrameworkError::ActorDropped`] and [`MockClient::verify`]
/// panics with the mismatch.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    shared: Arc<Mutex<Shared<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a
    /// Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let shared = Arc::new(Mutex::new(Shared {
            expectations: VecDeque::new(),
            failures: Vec::new(),
        }));
        let state = shared.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut guard = lock(&state);
                let next = guard.expectations.pop_front();
                let failures = &mut guard.failures;

                match (request, next) {
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation {
                            reply: Reply::List(response),
                            ..
                        }),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation {
                            reply: Reply::Create(response),
                            ..
                        }),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation {
                            id: expected,
                            reply: Reply::Get(response),
                        }),
                    ) => {
                        check_id(expected, &id, failures);
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation {
                            id: expected,
                            reply: Reply::Update(response),
                        }),
                    ) => {
                        check_id(expected, &id, failures);
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation {
                            id: expected,
                            reply: Reply::Delete(response),
                        }),
                    ) => {
                        check_id(expected, &id, failures);
                        answer(respond_to, response);
                    }
                    (request, _) => {
                        failures.push(format!("unexpected request: {request:?}"));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            shared,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn builder<R>(
        &mut self,
        id: Option<String>,
        wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            id,
            wrap,
            shared: self.shared.clone(),
        }
    }

    /// Expects a `list` request.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(None, Reply::List)
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(None, Reply::Create)
    }

    /// Expects a `get` request for `id`.
    pub fn expect_get(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        self.builder(Some(id.into()), Reply::Get)
    }

    /// Expects an `update` request for `id`.
    pub fn expect_update(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, T> {
        self.builder(Some(id.into()), Reply::Update)
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        self.builder(Some(id.into()), Reply::Delete)
    }

    /// Panics if an expectation is left over or a request did not match.
    pub fn verify(&self) {
        let guard = lock(&self.shared);
        if !guard.failures.is_empty() {
            panic!("Mock received bad requests: {:?}", guard.failures);
        }
        if !guard.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                guard.expectations.len()
            );
        }
    }
}

/// Finishes an expectation by choosing its reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    id: Option<String>,
    wrap: fn(Result<R, FrameworkError>) -> Reply<T>,
    shared: Arc<Mutex<Shared<T>>>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn push(self, response: Result<R, FrameworkError>) {
        let reply = (self.wrap)(response);
        lock(&self.shared).expectations.push_back(Expectation { id: self.id, reply });
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error. Accepts an
    /// [`ApiError`](crate::error::ApiError) for a rejected request.
    pub fn return_err(self, error: impl Into<FrameworkError>) {
        self.push(Err(error.into()));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test pulls each request with one of the `expect_*` helpers, asserts on
/// it, and answers through the returned responder. This is the way to check
/// *what* a client sends, e.g. that an update carries the route id.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Payload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create {
            payload,
            respond_to,
        }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Payload, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            payload,
            respond_to,
        }) => Some((id, payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(String, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
