//! Fixed-size string maps keyed by a character-sum checksum.
//!
//! Both maps share [`BUCKET_COUNT`] buckets and the [`checksum`] function, and
//! differ only in how they resolve collisions.

/// Separate chaining, one growable bucket per checksum
mod chained;
/// Capacity error raised by the probing map
mod error;
/// Linear probing without wraparound
mod probing;

pub use chained::ChainedHashMap;
pub use error::CapacityExceeded;
pub use probing::ProbingHashMap;

/// Number of buckets in every map; the tables never grow
pub const BUCKET_COUNT: usize = 256;

/// Sums the Unicode scalar values of `key` and reduces the sum modulo [`BUCKET_COUNT`].
///
/// Anagrams always collide. The sum wraps at `u32::MAX`, which leaves the result
/// modulo 256 unchanged.
#[must_use]
pub fn checksum(key: &str) -> usize {
    let sum = key.chars().fold(0_u32, |sum, c| sum.wrapping_add(u32::from(c)));
    usize::try_from(sum).map_or(0, |sum| sum % BUCKET_COUNT)
}

/// A stored key-value pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// The key the pair is looked up by
    pub key: String,
    /// The value associated with the key
    pub value: String,
}

impl KeyValue {
    /// Creates a new pair
    #[must_use]
    pub fn new(key: String, value: String) -> Self {
        Self { key, value }
    }
}

/// The capability set shared by both collision strategies
pub trait KeyValueMap {
    /// Returns the value stored for `key`, if any
    fn get(&self, key: &str) -> Option<&str>;

    /// Stores `value` under `key`, returning the previous value if the key was
    /// already present.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] when the map has no bucket left for a new key.
    /// The map is unchanged in that case.
    fn set(&mut self, key: String, value: String) -> Result<Option<String>, CapacityExceeded>;
}
