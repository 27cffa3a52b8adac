//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the resource actors.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that every stored resource implements.
//! - [`ResourceActor`]: The generic actor that owns one collection.
//! - [`ResourceClient`]: The generic client for communicating with an actor.
//! - [`FrameworkError`]: Channel failures and rejected requests.

use crate::error::ApiError;
use crate::framework::ids::IdGenerator;
use crate::model::Resource;
use crate::pipeline::{Payload, Pipeline};
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity Trait with Pipelines and Hooks)
// =============================================================================

/// Trait that any resource must implement to be managed by [`ResourceActor`].
///
/// An entity describes *what* a valid request looks like (its pipelines) and
/// *how* a validated payload becomes a value (its constructor). The actor owns
/// the ordering: lookup, then pipeline, then mutation.
///
/// # Provided Methods (Hooks)
/// - [`ActorEntity::on_update`] rebuilds the value from the payload, keeping the id.
/// - [`ActorEntity::on_delete`] accepts every delete.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// Which collection this entity lives in; used for error messages and logs.
    const RESOURCE: Resource;

    fn id(&self) -> &str;

    /// Assigns the id drawn for a newly created entity.
    fn set_id(&mut self, id: String);

    /// Steps run before a create.
    fn create_pipeline() -> Pipeline;

    /// Steps run after the lookup and before an update.
    fn update_pipeline() -> Pipeline;

    /// Builds the entity from a payload that already passed its pipeline.
    /// On create the id is a placeholder, replaced through
    /// [`ActorEntity::set_id`] once the conversion succeeded.
    ///
    /// Returns [`ApiError::WrongType`] when a field holds the wrong JSON type.
    fn from_payload(id: String, payload: &Payload) -> Result<Self, ApiError>;

    /// Overwrites every mutable field. The value is only replaced once the
    /// whole payload converted, so a failure leaves `self` untouched.
    fn on_update(&mut self, payload: &Payload) -> Result<(), ApiError> {
        let updated = Self::from_payload(self.id().to_string(), payload)?;
        *self = updated;
        Ok(())
    }

    /// Called before removal. Returning an error keeps the entity in the store.
    fn on_delete(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur between a client and its actor.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error(transparent)]
    Rejected(#[from] ApiError),
}

impl From<FrameworkError> for ApiError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Rejected(e) => e,
            other => ApiError::Unavailable(other.to_string()),
        }
    }
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to a [`ResourceActor`].
///
/// The variants map onto the operations every collection supports. Read,
/// update and delete address an existing entity by id; the actor answers
/// [`ApiError::NotFound`] when it is missing.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Create {
        payload: Payload,
        respond_to: Response<T>,
    },
    Get {
        id: String,
        respond_to: Response<T>,
    },
    Update {
        id: String,
        payload: Payload,
        respond_to: Response<T>,
    },
    Delete {
        id: String,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages one collection.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the store and the
/// receiver end of the channel, and handles one message at a time, so no
/// request ever observes another one half-applied. The store is a `Vec` to
/// keep insertion order for listing.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    ids: IdGenerator,
    create_pipeline: Pipeline,
    update_pipeline: Pipeline,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. A full channel makes
    ///   callers wait.
    /// * `ids` - The generator new ids are drawn from. Pass clones of one
    ///   generator to every actor that must not hand out colliding ids.
    pub fn new(buffer_size: usize, ids: IdGenerator) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            ids,
            create_pipeline: T::create_pipeline(),
            update_pipeline: T::update_pipeline(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Preloads the store. Every seeded id is reported to the generator, so
    /// later ids are greater than all of them.
    pub fn with_seed(mut self, items: Vec<T>) -> Self {
        for item in &items {
            self.ids.observe(item.id());
        }
        self.store.extend(items);
        self
    }

    fn position(&self, id: &str) -> Result<usize, ApiError> {
        self.store
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| ApiError::NotFound {
                resource: T::RESOURCE,
                id: id.to_string(),
            })
    }

    fn create(&mut self, payload: &Payload) -> Result<T, ApiError> {
        self.create_pipeline.run(payload)?;
        let mut item = T::from_payload(String::new(), payload)?;
        item.set_id(self.ids.next_id());
        self.store.push(item.clone());
        Ok(item)
    }

    fn update(&mut self, id: &str, payload: Payload) -> Result<T, ApiError> {
        let index = self.position(id)?;
        let payload = payload.with_route_id(id);
        self.update_pipeline.run(&payload)?;
        let item = &mut self.store[index];
        item.on_update(&payload)?;
        Ok(item.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        let index = self.position(id)?;
        self.store[index].on_delete()?;
        self.store.remove(index);
        Ok(())
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        let entity_type = T::RESOURCE.collection();
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Create {
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, ?payload, "Create");
                    let result = self.create(&payload);
                    match &result {
                        Ok(item) => {
                            info!(entity_type, id = item.id(), size = self.store.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.position(&id).map(|i| self.store[i].clone());
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Update {
                    id,
                    payload,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?payload, "Update");
                    let result = self.update(&id, payload);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id);
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result.map_err(FrameworkError::from));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A cloneable handle for sending requests to a [`ResourceActor`].
#[derive(Debug, Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn create(&self, payload: Payload) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create {
            payload,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: impl Into<String>) -> Result<T, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(
        &self,
        id: impl Into<String>,
        payload: Payload,
    ) -> Result<T, FrameworkError> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Update {
            id,
            payload,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: impl Into<String>) -> Result<(), FrameworkError> {
        let id = id.into();
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
