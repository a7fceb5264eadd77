//! Employee directory built on a separate-chaining hash table
//!
//! Buckets are indexed by the division method (`id % table_size`) with the
//! bucket count kept prime. An insert that would push the load factor past
//! the threshold first grows the table to the next prime above double the
//! current size and re-buckets every record.

use tracing::{debug, info};

use crate::employee::Employee;
use crate::prime::next_prime;
use crate::types::{DEFAULT_TABLE_SIZE, EmployeeId, MAX_LOAD_FACTOR};

pub mod baseline;
pub mod error;
pub mod stats;

pub use baseline::RecordStore;
pub use error::{DirectoryError, DirectoryResult};
pub use stats::DirectoryStats;

/// Outcome of a point lookup, with the probe cost observed on the chain
#[derive(Debug)]
pub struct Lookup<'a> {
    /// The record, when present
    pub employee: Option<&'a Employee>,
    /// Records examined on the chain, including the match itself
    pub comparisons: usize,
}

impl Lookup<'_> {
    /// True when the lookup produced a record
    pub fn found(&self) -> bool {
        self.employee.is_some()
    }
}

/// Separate-chaining hash table keyed by employee id
///
/// Chains preserve insertion order (append at tail). Duplicate ids are
/// rejected, so every stored id is unique.
pub struct EmployeeDirectory {
    /// Bucket array; length is always prime
    buckets: Vec<Vec<Employee>>,
    /// Records currently stored
    total_elements: usize,
    /// Inserts that landed in an occupied bucket since the last rehash
    collision_count: usize,
}

impl EmployeeDirectory {
    /// Create a directory with the default bucket count
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TABLE_SIZE)
    }

    /// Create a directory with at least `capacity` buckets, rounded up to
    /// the next prime
    pub fn with_capacity(capacity: usize) -> Self {
        let table_size = next_prime(capacity.max(2));
        Self {
            buckets: vec![Vec::new(); table_size],
            total_elements: 0,
            collision_count: 0,
        }
    }

    /// Bucket count
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    /// Records currently stored
    pub fn len(&self) -> usize {
        self.total_elements
    }

    /// True when no records are stored
    pub fn is_empty(&self) -> bool {
        self.total_elements == 0
    }

    /// Current load factor
    pub fn load_factor(&self) -> f64 {
        self.total_elements as f64 / self.buckets.len() as f64
    }

    /// Collisions recorded since construction or the last rehash
    pub fn collision_count(&self) -> usize {
        self.collision_count
    }

    /// Division-method bucket index for an id
    fn bucket_index(&self, id: EmployeeId) -> usize {
        id as usize % self.buckets.len()
    }

    /// Insert a record, rejecting duplicate ids
    ///
    /// Grows the table first when this insert would leave the load factor
    /// above the threshold, so the bound holds after every insert.
    pub fn insert(&mut self, employee: Employee) -> DirectoryResult<()> {
        if (self.total_elements + 1) as f64 / self.buckets.len() as f64 > MAX_LOAD_FACTOR {
            self.rehash();
        }

        let index = self.bucket_index(employee.id);
        if self.buckets[index].iter().any(|e| e.id == employee.id) {
            return Err(DirectoryError::DuplicateId(employee.id));
        }

        if !self.buckets[index].is_empty() {
            self.collision_count += 1;
            debug!(id = employee.id, index, "collision, chaining record");
        }

        self.buckets[index].push(employee);
        self.total_elements += 1;
        Ok(())
    }

    /// Grow to the next prime above double the bucket count and re-bucket
    /// every record, re-deriving the collision count from scratch
    fn rehash(&mut self) {
        let old_size = self.buckets.len();
        let new_size = next_prime(old_size * 2);
        let old_buckets = std::mem::replace(&mut self.buckets, vec![Vec::new(); new_size]);
        self.total_elements = 0;
        self.collision_count = 0;

        for bucket in old_buckets {
            for employee in bucket {
                // ids were unique in the old table, so reinsertion never rejects
                let _ = self.insert(employee);
            }
        }

        info!(
            old_size,
            new_size,
            elements = self.total_elements,
            "rehashed directory"
        );
    }

    /// Point lookup by id, counting records examined on the chain
    pub fn lookup(&self, id: EmployeeId) -> Lookup<'_> {
        let index = self.bucket_index(id);
        let mut comparisons = 0;
        for employee in &self.buckets[index] {
            comparisons += 1;
            if employee.id == id {
                return Lookup {
                    employee: Some(employee),
                    comparisons,
                };
            }
        }
        Lookup {
            employee: None,
            comparisons,
        }
    }

    /// Remove a record by id, returning it
    ///
    /// The collision count is insert-time accounting and stays untouched.
    pub fn delete(&mut self, id: EmployeeId) -> DirectoryResult<Employee> {
        let index = self.bucket_index(id);
        match self.buckets[index].iter().position(|e| e.id == id) {
            Some(position) => {
                let removed = self.buckets[index].remove(position);
                self.total_elements -= 1;
                debug!(id, index, "deleted record");
                Ok(removed)
            }
            None => Err(DirectoryError::NotFound(id)),
        }
    }

    /// Collect records matching a predicate, buckets in index order and
    /// chains in insertion order
    pub fn scan<P>(&self, predicate: P) -> Vec<&Employee>
    where
        P: Fn(&Employee) -> bool,
    {
        self.iter().filter(|&e| predicate(e)).collect()
    }

    /// Records belonging to a department
    pub fn search_by_department(&self, department: &str) -> Vec<&Employee> {
        self.scan(|e| e.department == department)
    }

    /// All records, buckets in index order and chains in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.buckets.iter().flatten()
    }

    /// Chains as stored, for rendering
    pub fn buckets(&self) -> &[Vec<Employee>] {
        &self.buckets
    }

    /// Occupancy and collision snapshot, computed by a full bucket scan
    pub fn stats(&self) -> DirectoryStats {
        let mut non_empty_buckets = 0;
        let mut chained_records = 0;
        let mut max_chain_length = 0;

        for bucket in &self.buckets {
            let length = bucket.len();
            if length > 0 {
                non_empty_buckets += 1;
                chained_records += length;
            }
            max_chain_length = max_chain_length.max(length);
        }

        let average_chain_length = if non_empty_buckets > 0 {
            chained_records as f64 / non_empty_buckets as f64
        } else {
            0.0
        };

        DirectoryStats {
            table_size: self.buckets.len(),
            total_elements: self.total_elements,
            load_factor: self.load_factor(),
            collision_count: self.collision_count,
            non_empty_buckets,
            average_chain_length,
            max_chain_length,
        }
    }
}

impl Default for EmployeeDirectory {
    fn default() -> Self {
        Self::new()
    }
}
