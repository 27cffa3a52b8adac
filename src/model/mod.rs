//! Pure data structures managed by the resource actors.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The two collections the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Dish,
    Order,
}

impl Resource {
    /// Collection path segment, e.g. `dishes`.
    pub fn collection(&self) -> &'static str {
        match self {
            Resource::Dish => "dishes",
            Resource::Order => "orders",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Dish => write!(f, "Dish"),
            Resource::Order => write!(f, "Order"),
        }
    }
}
