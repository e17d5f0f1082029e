//! Utility functions and traits shared by the heap and the string maps

use crate::hash_map::{CapacityExceeded, KeyValueMap};

/// Extension trait for map implementations that provides additional utility methods
pub trait KeyValueMapExt: KeyValueMap {
    /// Returns true if the map contains the given key
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Stores every pair in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first [`CapacityExceeded`]; pairs before it stay stored.
    fn set_all<I>(&mut self, pairs: I) -> Result<(), CapacityExceeded>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<M: KeyValueMap + ?Sized> KeyValueMapExt for M {}

/// Returns true if every element of `elements` dominates its existing children,
/// `>=` for a max-heap and `<=` for a min-heap
#[must_use]
pub fn is_heap(elements: &[i64], is_max: bool) -> bool {
    elements.iter().enumerate().all(|(index, &parent)| {
        let left = index.saturating_mul(2).saturating_add(1);
        [left, left.saturating_add(1)]
            .iter()
            .filter_map(|&child| elements.get(child))
            .all(|&child| if is_max { parent >= child } else { parent <= child })
    })
}
