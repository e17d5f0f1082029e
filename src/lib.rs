//! # Sift Hash
//!
//! Two small classic containers, each self-contained:
//!
//! - `Heap`: an array-backed binary min- or max-heap over `i64` that supports
//!   removing arbitrary values, not just the root
//! - `ChainedHashMap` / `ProbingHashMap`: fixed 256-bucket string maps keyed by a
//!   character-sum checksum, resolving collisions by chaining or by linear probing
//!
//! The backing layout of the heap is part of its contract: values are inserted
//! one at a time, so the order of the initial values decides where each one
//! ends up.
//!
//! ## Heap Usage
//!
//! ```rust
//! use sifthash::Heap;
//!
//! let mut heap = Heap::new(true, [5, 1, 4, 2, 3]);
//! assert_eq!(heap.output(), &[5, 3, 4, 1, 2]);
//!
//! // Remove an interior value
//! heap.remove(4);
//! assert_eq!(heap.output(), &[5, 3, 2, 1]);
//!
//! // Poll the root until empty
//! assert_eq!(heap.poll(), Some(5));
//! assert_eq!(heap.into_sorted_vec(), vec![3, 2, 1]);
//! ```
//!
//! ## Map Usage
//!
//! ```rust
//! use sifthash::{KeyValueMap, ProbingHashMap};
//!
//! let mut map = ProbingHashMap::new();
//!
//! // "abc" and "cba" share a bucket, the second one probes forward
//! map.set("abc".to_string(), "Finn".to_string()).unwrap();
//! map.set("cba".to_string(), "Lex".to_string()).unwrap();
//!
//! assert_eq!(map.get("abc"), Some("Finn"));
//! assert_eq!(map.get("cba"), Some("Lex"));
//! assert_eq!(map.get("bca"), None);
//! ```

/// Module implementing the binary heap with arbitrary removal
mod heap;
/// Module implementing the fixed-size string maps
pub mod hash_map;
/// Utility functions and traits for the heap and the maps
mod utils;

pub use hash_map::{
    BUCKET_COUNT, CapacityExceeded, ChainedHashMap, KeyValue, KeyValueMap, ProbingHashMap,
    checksum,
};
pub use heap::Heap;
pub use utils::{KeyValueMapExt, is_heap};
