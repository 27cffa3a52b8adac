//! Shared id generation for every collection in the system.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Hands out string ids that are unique across all collections sharing it.
///
/// Ids are decimal strings. The counter starts after the highest numeric id it
/// has been shown via [`IdGenerator::observe`], so seeded entities never collide
/// with new ones. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: Arc<AtomicU64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an existing id. Non-numeric ids are ignored.
    pub fn observe(&self, id: &str) {
        if let Ok(n) = id.parse::<u64>() {
            self.last.fetch_max(n, Ordering::SeqCst);
        }
    }

    /// Returns the next id and advances the counter.
    pub fn next_id(&self) -> String {
        let id = self.last.fetch_add(1, Ordering::SeqCst) + 1;
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_after_highest_observed_id() {
        let ids = IdGenerator::new();
        ids.observe("3");
        ids.observe("12");
        ids.observe("7");
        ids.observe("3c637d011d844ebab1205fef8a7e36ea");
        assert_eq!(ids.next_id(), "13");
        assert_eq!(ids.next_id(), "14");
    }

    #[test]
    fn clones_share_the_counter() {
        let ids = IdGenerator::new();
        let other = ids.clone();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(other.next_id(), "2");
        other.observe("1");
        assert_eq!(ids.next_id(), "3");
    }
}
