use super::baseline::{LinkedHashMapStore, StdHashMapStore};
use super::*;
use crate::employee::Employee;
use crate::prime::is_prime;
use crate::types::{EmployeeId, MAX_LOAD_FACTOR};

/// The original twelve-employee id set; drives one rehash at capacity 13
fn sample_ids() -> Vec<EmployeeId> {
    vec![101, 102, 203, 304, 105, 206, 307, 108, 209, 310, 411, 512]
}

fn populate(directory: &mut EmployeeDirectory, ids: &[EmployeeId]) {
    for &id in ids {
        directory
            .insert(Employee::basic(id, format!("emp-{}", id)))
            .unwrap();
    }
}

#[test]
fn test_capacity_is_rounded_to_prime() {
    assert_eq!(EmployeeDirectory::with_capacity(13).table_size(), 13);
    assert_eq!(EmployeeDirectory::with_capacity(18).table_size(), 19);
    assert_eq!(EmployeeDirectory::with_capacity(0).table_size(), 2);
    assert_eq!(EmployeeDirectory::new().table_size(), 17);
}

#[test]
fn test_insert_and_lookup() {
    let mut directory = EmployeeDirectory::new();
    directory
        .insert(Employee::new(
            101,
            "Alice Johnson",
            "Engineering",
            "Software Engineer",
            95_000.0,
            "alice@company.com",
            "555-0101",
        ))
        .unwrap();

    let lookup = directory.lookup(101);
    assert!(lookup.found());
    assert_eq!(lookup.employee.unwrap().name, "Alice Johnson");
    assert_eq!(lookup.comparisons, 1);

    // 999 hashes to an empty bucket in a size-17 table
    let miss = directory.lookup(999);
    assert!(!miss.found());
    assert_eq!(miss.comparisons, 0);
}

#[test]
fn test_duplicate_insert_rejected() {
    let mut directory = EmployeeDirectory::new();
    directory
        .insert(Employee::new(
            101,
            "Alice Johnson",
            "Engineering",
            "Software Engineer",
            95_000.0,
            "alice@company.com",
            "555-0101",
        ))
        .unwrap();

    let impostor = Employee::new(101, "Impostor", "Sales", "Rep", 1.0, "", "");
    assert_eq!(
        directory.insert(impostor),
        Err(DirectoryError::DuplicateId(101))
    );

    // first write wins, record set unchanged
    assert_eq!(directory.len(), 1);
    assert_eq!(directory.lookup(101).employee.unwrap().name, "Alice Johnson");
}

#[test]
fn test_rehash_scenario() {
    // capacity 13 with twelve inserts crosses the threshold once: the
    // tenth insert would reach 10/13, so the table grows to 29 first
    let mut directory = EmployeeDirectory::with_capacity(13);
    populate(&mut directory, &sample_ids());
    assert_eq!(directory.table_size(), 29);
    assert_eq!(directory.len(), 12);
}

#[test]
fn test_load_factor_bounded_after_every_insert() {
    let mut directory = EmployeeDirectory::with_capacity(2);
    for id in 0..200u32 {
        directory.insert(Employee::basic(id, "x")).unwrap();
        assert!(directory.load_factor() <= MAX_LOAD_FACTOR + 1e-9);
        assert!(is_prime(directory.table_size()));
    }
    assert_eq!(directory.len(), 200);
}

#[test]
fn test_rehash_conserves_records() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    for &id in &sample_ids() {
        directory
            .insert(Employee::new(
                id,
                format!("emp-{}", id),
                "Ops",
                "Agent",
                f64::from(id),
                "",
                "",
            ))
            .unwrap();
    }

    assert_eq!(directory.len(), 12);
    for &id in &sample_ids() {
        let lookup = directory.lookup(id);
        let employee = lookup.employee.expect("record must survive rehash");
        assert_eq!(employee.name, format!("emp-{}", id));
        assert_eq!(employee.salary, f64::from(id));
    }
}

#[test]
fn test_rehash_rederives_collision_count() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    let ids = sample_ids();

    // mod 13: 206 chains onto 102, 307 onto 203, 209 onto 105
    populate(&mut directory, &ids[..9]);
    assert_eq!(directory.collision_count(), 3);

    // the tenth insert rehashes to 29; mod 29 only 101 and 304 share a bucket
    populate(&mut directory, &ids[9..]);
    assert_eq!(directory.table_size(), 29);
    assert_eq!(directory.collision_count(), 1);
}

#[test]
fn test_collision_counted_on_shared_bucket() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    directory.insert(Employee::basic(101, "First")).unwrap();
    assert_eq!(directory.collision_count(), 0);

    // 114 % 13 == 101 % 13
    directory.insert(Employee::basic(114, "Second")).unwrap();
    assert_eq!(directory.collision_count(), 1);

    let lookup = directory.lookup(114);
    assert!(lookup.found());
    assert_eq!(lookup.comparisons, 2);
}

#[test]
fn test_delete_present_and_absent() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    populate(&mut directory, &[101, 102]);

    let removed = directory.delete(101).unwrap();
    assert_eq!(removed.id, 101);
    assert_eq!(directory.len(), 1);
    assert!(!directory.lookup(101).found());

    assert_eq!(directory.delete(999), Err(DirectoryError::NotFound(999)));
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_delete_keeps_collision_count() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    directory.insert(Employee::basic(101, "First")).unwrap();
    directory.insert(Employee::basic(114, "Second")).unwrap();
    assert_eq!(directory.collision_count(), 1);

    directory.delete(114).unwrap();
    assert_eq!(directory.collision_count(), 1);
}

#[test]
fn test_delete_middle_of_chain() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    // all three land in bucket 10
    populate(&mut directory, &[101, 114, 127]);

    let removed = directory.delete(114).unwrap();
    assert_eq!(removed.id, 114);
    assert!(directory.lookup(101).found());
    assert!(directory.lookup(127).found());
    assert_eq!(directory.lookup(127).comparisons, 2);
}

#[test]
fn test_comparisons_bounded_by_chain_length() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    populate(&mut directory, &sample_ids());
    let stats = directory.stats();

    for &id in &sample_ids() {
        assert!(directory.lookup(id).comparisons <= stats.max_chain_length);
    }
    // a miss scans at most one full chain
    assert!(directory.lookup(99_999).comparisons <= stats.max_chain_length);
}

#[test]
fn test_scan_order_follows_buckets_then_chains() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    // 5 and 18 share bucket 5, chained in insertion order; 3 sits in bucket 3
    populate(&mut directory, &[5, 18, 3]);

    let all: Vec<EmployeeId> = directory.iter().map(|e| e.id).collect();
    assert_eq!(all, vec![3, 5, 18]);

    let matched: Vec<EmployeeId> = directory.scan(|e| e.id > 4).iter().map(|e| e.id).collect();
    assert_eq!(matched, vec![5, 18]);
}

#[test]
fn test_search_by_department() {
    let mut directory = EmployeeDirectory::new();
    directory
        .insert(Employee::new(101, "Alice", "Engineering", "Engineer", 95_000.0, "", ""))
        .unwrap();
    directory
        .insert(Employee::new(102, "Bob", "Engineering", "Developer", 105_000.0, "", ""))
        .unwrap();
    directory
        .insert(Employee::new(203, "Carol", "Marketing", "Manager", 85_000.0, "", ""))
        .unwrap();

    let engineers = directory.search_by_department("Engineering");
    assert_eq!(engineers.len(), 2);
    assert!(engineers.iter().all(|e| e.department == "Engineering"));
    assert!(directory.search_by_department("Legal").is_empty());
}

#[test]
fn test_stats_snapshot() {
    let mut directory = EmployeeDirectory::with_capacity(13);
    directory.insert(Employee::basic(101, "a")).unwrap();
    directory.insert(Employee::basic(114, "b")).unwrap();
    directory.insert(Employee::basic(3, "c")).unwrap();

    let stats = directory.stats();
    assert_eq!(stats.table_size, 13);
    assert_eq!(stats.total_elements, 3);
    assert_eq!(stats.collision_count, 1);
    assert_eq!(stats.non_empty_buckets, 2);
    assert_eq!(stats.max_chain_length, 2);
    assert!((stats.average_chain_length - 1.5).abs() < 1e-9);
    assert!((stats.load_factor - 3.0 / 13.0).abs() < 1e-9);
    assert!(stats.is_well_distributed());
}

#[test]
fn test_stats_on_empty_directory() {
    let stats = EmployeeDirectory::new().stats();
    assert_eq!(stats.total_elements, 0);
    assert_eq!(stats.non_empty_buckets, 0);
    assert_eq!(stats.average_chain_length, 0.0);
    assert_eq!(stats.max_chain_length, 0);
    assert_eq!(stats.load_factor, 0.0);
}

#[test]
fn test_baselines_agree_with_directory() {
    let mut stores: Vec<Box<dyn RecordStore>> = vec![
        Box::new(EmployeeDirectory::new()),
        Box::new(StdHashMapStore::new()),
        Box::new(LinkedHashMapStore::new()),
    ];

    for store in &mut stores {
        for id in [1u32, 2, 3, 42] {
            assert!(store.put(Employee::basic(id, "w")));
        }
        assert!(!store.put(Employee::basic(42, "dup")));
        assert_eq!(store.count(), 4);

        assert!(store.fetch(2).is_some());
        assert!(store.fetch(99).is_none());

        assert_eq!(store.evict(2).map(|e| e.id), Some(2));
        assert!(store.evict(2).is_none());
        assert_eq!(store.count(), 3);
    }
}
