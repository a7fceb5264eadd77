//! Reference stores for benchmark comparison
//!
//! A minimal store interface implemented by the directory and by two
//! off-the-shelf maps, so the criterion bench can compare them on the
//! same workload.

use std::collections::HashMap;

use linked_hash_map::LinkedHashMap;

use crate::employee::Employee;
use crate::types::EmployeeId;

use super::EmployeeDirectory;

/// Minimal store interface shared by the directory and the reference maps
pub trait RecordStore {
    /// Store a record; returns false when the id was already present
    fn put(&mut self, employee: Employee) -> bool;
    /// Fetch a record by id
    fn fetch(&self, id: EmployeeId) -> Option<&Employee>;
    /// Remove a record by id
    fn evict(&mut self, id: EmployeeId) -> Option<Employee>;
    /// Number of stored records
    fn count(&self) -> usize;
}

impl RecordStore for EmployeeDirectory {
    fn put(&mut self, employee: Employee) -> bool {
        self.insert(employee).is_ok()
    }

    fn fetch(&self, id: EmployeeId) -> Option<&Employee> {
        self.lookup(id).employee
    }

    fn evict(&mut self, id: EmployeeId) -> Option<Employee> {
        self.delete(id).ok()
    }

    fn count(&self) -> usize {
        self.len()
    }
}

/// `std::collections::HashMap` baseline
#[derive(Default)]
pub struct StdHashMapStore {
    map: HashMap<EmployeeId, Employee>,
}

impl StdHashMapStore {
    /// Create an empty baseline store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for StdHashMapStore {
    fn put(&mut self, employee: Employee) -> bool {
        if self.map.contains_key(&employee.id) {
            return false;
        }
        self.map.insert(employee.id, employee);
        true
    }

    fn fetch(&self, id: EmployeeId) -> Option<&Employee> {
        self.map.get(&id)
    }

    fn evict(&mut self, id: EmployeeId) -> Option<Employee> {
        self.map.remove(&id)
    }

    fn count(&self) -> usize {
        self.map.len()
    }
}

/// `linked-hash-map` baseline, insertion-ordered like the chains
#[derive(Default)]
pub struct LinkedHashMapStore {
    map: LinkedHashMap<EmployeeId, Employee>,
}

impl LinkedHashMapStore {
    /// Create an empty baseline store
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for LinkedHashMapStore {
    fn put(&mut self, employee: Employee) -> bool {
        if self.map.contains_key(&employee.id) {
            return false;
        }
        self.map.insert(employee.id, employee);
        true
    }

    fn fetch(&self, id: EmployeeId) -> Option<&Employee> {
        self.map.get(&id)
    }

    fn evict(&mut self, id: EmployeeId) -> Option<Employee> {
        self.map.remove(&id)
    }

    fn count(&self) -> usize {
        self.map.len()
    }
}
