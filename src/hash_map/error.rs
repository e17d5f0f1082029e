use derive_more::{Display, Error};

/// Raised when a linear probe runs past the last bucket without finding the key
/// or a free slot. Probing never wraps around to the start of the table.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
#[display("no free bucket for key {key:?} from index {start} to the end of the table")]
pub struct CapacityExceeded {
    /// The key that could not be stored
    pub key: String,
    /// The bucket the probe started from
    pub start: usize,
}
