use serde::{Deserialize, Serialize};

/// A menu item.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
/// See [`crate::dish_actor`] for its pipelines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Always a positive integer.
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    /// Creates a new Dish instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (normally assigned by the actor)
    /// * `name` - Display name
    /// * `description` - Menu description
    /// * `price` - Price in whole currency units
    /// * `image_url` - Picture of the dish
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: image_url.into(),
        }
    }
}
