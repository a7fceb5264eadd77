//! Directory statistics snapshot

use serde::Serialize;

/// Point-in-time view of table occupancy and collision behavior
///
/// Computed by a full bucket scan; holds no references into the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryStats {
    /// Bucket count (always prime)
    pub table_size: usize,
    /// Records currently stored
    pub total_elements: usize,
    /// total_elements / table_size
    pub load_factor: f64,
    /// Inserts that landed in a non-empty bucket since the last rehash
    pub collision_count: usize,
    /// Buckets holding at least one record
    pub non_empty_buckets: usize,
    /// Mean chain length over non-empty buckets
    pub average_chain_length: f64,
    /// Longest chain
    pub max_chain_length: usize,
}

impl DirectoryStats {
    /// Distribution quality heuristic: short chains with headroom under the
    /// rehash threshold
    pub fn is_well_distributed(&self) -> bool {
        self.max_chain_length <= 3 && self.load_factor < 0.8
    }
}
