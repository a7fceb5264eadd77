//! Global type definitions
//!
//! Type aliases, constants, and configuration shared across the crate.

/// Employee identifier type
///
/// Ids are unsigned, so the division-method bucket index is always in range.
pub type EmployeeId = u32;

/// Default bucket count for a new directory (prime, for even key spread)
pub const DEFAULT_TABLE_SIZE: usize = 17;

/// Load factor threshold that triggers a rehash
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Directory configuration
#[derive(Debug, Clone)]
pub struct StaffstoreConfig {
    /// Requested initial bucket count (rounded up to a prime)
    pub initial_capacity: usize,
    /// Whether the demo renders the per-bucket chain view
    pub show_chains: bool,
}

impl Default for StaffstoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_TABLE_SIZE,
            show_chains: true,
        }
    }
}
