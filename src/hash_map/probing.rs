use super::{BUCKET_COUNT, CapacityExceeded, KeyValue, KeyValueMap, checksum};

/// Result of scanning forward from a key's home bucket
enum Probe {
    /// The key is stored at this index
    Found(usize),
    /// The key is absent and this index is the first free slot
    Vacant(usize),
    /// The scan ran past the last bucket
    Exhausted,
}

/// A string map resolving collisions by linear probing.
///
/// A key starts at its [`checksum`] bucket and moves forward one bucket at a time
/// until it finds itself or a free slot. The scan never wraps around, so keys
/// hashing near the end of the table can run out of room even when the front of
/// the table is empty.
#[derive(Debug, Clone)]
pub struct ProbingHashMap {
    /// At most one pair per slot
    slots: Vec<Option<KeyValue>>,
    /// Number of occupied slots
    size: usize,
}

impl Default for ProbingHashMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbingHashMap {
    /// Creates an empty map with [`BUCKET_COUNT`] free slots
    #[must_use]
    pub fn new() -> Self {
        Self { slots: vec![None; BUCKET_COUNT], size: 0 }
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

    /// Returns how many buckets past its home bucket `key` is stored, or `None`
    /// if the key is absent
    #[must_use]
    pub fn probe_distance(&self, key: &str) -> Option<usize> {
        match self.probe(key) {
            Probe::Found(index) => Some(index.saturating_sub(checksum(key))),
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    /// Scans forward from the home bucket of `key`
    fn probe(&self, key: &str) -> Probe {
        for index in checksum(key)..self.slots.len() {
            match self.slots.get(index) {
                Some(Some(pair)) if pair.key == key => return Probe::Found(index),
                Some(Some(_)) => {}
                Some(None) => return Probe::Vacant(index),
                None => break,
            }
        }
        Probe::Exhausted
    }
}

impl KeyValueMap for ProbingHashMap {
    fn get(&self, key: &str) -> Option<&str> {
        match self.probe(key) {
            Probe::Found(index) => {
                self.slots.get(index)?.as_ref().map(|pair| pair.value.as_str())
            }
            Probe::Vacant(_) | Probe::Exhausted => None,
        }
    }

    fn set(&mut self, key: String, value: String) -> Result<Option<String>, CapacityExceeded> {
        match self.probe(&key) {
            Probe::Found(index) => {
                let previous = self
                    .slots
                    .get_mut(index)
                    .and_then(Option::as_mut)
                    .map(|pair| std::mem::replace(&mut pair.value, value));
                Ok(previous)
            }
            Probe::Vacant(index) => {
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Some(KeyValue::new(key, value));
                    self.size = self.size.saturating_add(1);
                }
                Ok(None)
            }
            Probe::Exhausted => {
                let start = checksum(&key);
                Err(CapacityExceeded { key, start })
            }
        }
    }
}
