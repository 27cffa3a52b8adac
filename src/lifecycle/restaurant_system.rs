use crate::clients::{DishClient, OrderClient};
use crate::framework::IdGenerator;
use crate::lifecycle::{Config, SeedData};
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while starting or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] envy::Error),
    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the dish and order actors.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping both actors
/// - **Resource Coordination**: handing both actors the same id generator, so
///   an id is never issued twice across collections
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(SeedData::fixtures()?, 32);
///
/// let dish = system.dish_client.create_dish(data).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    /// Client for interacting with the Dish actor
    pub dish_client: DishClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Seeds and spawns both actors. Must be called inside a Tokio runtime.
    pub fn new(seed: SeedData, channel_capacity: usize) -> Self {
        let ids = IdGenerator::new();

        let (dish_actor, dish_client) = crate::dish_actor::new(channel_capacity, ids.clone());
        let (order_actor, order_client) = crate::order_actor::new(channel_capacity, ids);

        // Seeding both actors before either runs puts every seeded id into the
        // generator before the first create.
        let dish_actor = dish_actor.with_seed(seed.dishes);
        let order_actor = order_actor.with_seed(seed.orders);

        let dish_handle = tokio::spawn(dish_actor.run());
        let order_handle = tokio::spawn(order_actor.run());

        Self {
            dish_client,
            order_client,
            handles: vec![dish_handle, order_handle],
        }
    }

    /// Starts a system with the fixtures when `config.seed` is set, empty otherwise.
    pub fn from_config(config: &Config) -> Result<Self, SystemError> {
        let seed = if config.seed {
            SeedData::fixtures()?
        } else {
            SeedData::empty()
        };
        info!(
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "Starting system"
        );
        Ok(Self::new(seed, config.channel_capacity))
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the channels; each actor finishes the
    /// requests already queued and exits its loop. Clones of the clients held
    /// elsewhere (the HTTP router, say) must be dropped first or this waits
    /// for them.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.dish_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
