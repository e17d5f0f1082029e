use super::{BUCKET_COUNT, CapacityExceeded, KeyValue, KeyValueMap, checksum};

/// A string map resolving collisions by chaining.
///
/// Each of the [`BUCKET_COUNT`] buckets keeps its colliding pairs in insertion
/// order, so a bucket can hold any number of keys and `set` never fails.
#[derive(Debug, Clone)]
pub struct ChainedHashMap {
    /// One chain per checksum value
    buckets: Vec<Vec<KeyValue>>,
    /// Number of distinct keys stored
    size: usize,
}

impl Default for ChainedHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainedHashMap {
    /// Creates an empty map with [`BUCKET_COUNT`] empty chains
    #[must_use]
    pub fn new() -> Self {
        Self { buckets: vec![Vec::new(); BUCKET_COUNT], size: 0 }
    }

    /// Returns the number of keys stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no key has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the chain length of the bucket at `index`, or 0 past the last bucket
    #[must_use]
    pub fn bucket_len(&self, index: usize) -> usize {
        self.buckets.get(index).map_or(0, Vec::len)
    }

    /// Returns the length of the longest chain
    #[must_use]
    pub fn longest_chain(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The chain a key belongs to
    fn chain(&self, key: &str) -> Option<&Vec<KeyValue>> {
        self.buckets.get(checksum(key))
    }
}

impl KeyValueMap for ChainedHashMap {
    fn get(&self, key: &str) -> Option<&str> {
        self.chain(key)?.iter().find(|pair| pair.key == key).map(|pair| pair.value.as_str())
    }

    fn set(&mut self, key: String, value: String) -> Result<Option<String>, CapacityExceeded> {
        let start = checksum(&key);
        let Some(chain) = self.buckets.get_mut(start) else {
            return Err(CapacityExceeded { key, start });
        };

        if let Some(pair) = chain.iter_mut().find(|pair| pair.key == key) {
            return Ok(Some(std::mem::replace(&mut pair.value, value)));
        }

        chain.push(KeyValue::new(key, value));
        self.size = self.size.saturating_add(1);
        Ok(None)
    }
}
