//! Fixture data loaded into the stores at startup.

use crate::model::{Dish, Order};

const DISHES_JSON: &str = include_str!("../../data/dishes.json");
const ORDERS_JSON: &str = include_str!("../../data/orders.json");

/// Initial contents of both collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// The fixtures shipped in `data/`.
    pub fn fixtures() -> Result<Self, serde_json::Error> {
        Ok(Self {
            dishes: serde_json::from_str(DISHES_JSON)?,
            orders: serde_json::from_str(ORDERS_JSON)?,
        })
    }

    /// Two empty collections.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixtures_parse_with_unique_ids() {
        let seed = SeedData::fixtures().unwrap();
        assert!(!seed.dishes.is_empty());
        assert!(!seed.orders.is_empty());

        let ids: HashSet<&str> = seed
            .dishes
            .iter()
            .map(|d| d.id.as_str())
            .chain(seed.orders.iter().map(|o| o.id.as_str()))
            .collect();
        assert_eq!(ids.len(), seed.dishes.len() + seed.orders.len());
    }

    #[test]
    fn fixtures_hold_a_pending_and_a_finished_order() {
        let seed = SeedData::fixtures().unwrap();
        assert!(seed.orders.iter().any(|o| o.is_pending()));
        assert!(seed.orders.iter().any(|o| !o.is_pending()));
    }
}
