//! Staffstore demo: employee database management on a chained hash table

use std::time::Instant;

use staffstore::employee::SalaryStats;
use staffstore::report;
use staffstore::types::StaffstoreConfig;
use staffstore::{Employee, EmployeeDirectory};

// Use jemalloc as global allocator
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn seed_roster(directory: &mut EmployeeDirectory) {
    let roster = [
        Employee::new(101, "Alice Johnson", "Engineering", "Software Engineer", 95_000.0, "alice@company.com", "555-0101"),
        Employee::new(102, "Bob Smith", "Engineering", "Senior Developer", 105_000.0, "bob@company.com", "555-0102"),
        Employee::new(203, "Carol Davis", "Marketing", "Marketing Manager", 85_000.0, "carol@company.com", "555-0203"),
        Employee::new(304, "David Wilson", "Sales", "Sales Representative", 65_000.0, "david@company.com", "555-0304"),
        Employee::new(105, "Eve Brown", "Engineering", "DevOps Engineer", 90_000.0, "eve@company.com", "555-0105"),
        Employee::new(206, "Frank Miller", "HR", "HR Specialist", 70_000.0, "frank@company.com", "555-0206"),
        Employee::new(307, "Grace Lee", "Finance", "Financial Analyst", 75_000.0, "grace@company.com", "555-0307"),
        Employee::new(108, "Henry Chen", "Engineering", "Tech Lead", 120_000.0, "henry@company.com", "555-0108"),
        Employee::new(209, "Ivy Taylor", "Marketing", "Content Creator", 60_000.0, "ivy@company.com", "555-0209"),
        Employee::new(310, "Jack Anderson", "Sales", "Sales Manager", 95_000.0, "jack@company.com", "555-0310"),
        Employee::new(411, "Kate Wilson", "Legal", "Legal Counsel", 110_000.0, "kate@company.com", "555-0411"),
        Employee::new(512, "Leo Martinez", "Operations", "Operations Manager", 88_000.0, "leo@company.com", "555-0512"),
    ];

    for employee in roster {
        if let Err(err) = directory.insert(employee) {
            eprintln!("seed rejected: {}", err);
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Employee Database Management (Chained Hash Table) ===\n");

    // Start below the default capacity to drive one rehash while seeding
    let config = StaffstoreConfig {
        initial_capacity: 13,
        ..StaffstoreConfig::default()
    };
    let mut directory = EmployeeDirectory::with_capacity(config.initial_capacity);

    println!(">> Building employee database...");
    seed_roster(&mut directory);

    if config.show_chains {
        println!();
        print!("{}", report::chain_view(&directory));
    }
    println!();
    print!("{}", report::roster_view(&directory));
    println!();
    print!("{}", report::stats_report(&directory.stats()));

    println!("\n>> Employee lookups:");
    for id in [101, 203, 999, 108, 310, 404] {
        let start = Instant::now();
        let lookup = directory.lookup(id);
        let elapsed = start.elapsed();
        match lookup.employee {
            Some(employee) => println!("[+] {}: {} - {}", id, employee.name, employee.position),
            None => println!("[x] {}: not found", id),
        }
        println!("    comparisons: {}, time: {:?}", lookup.comparisons, elapsed);
    }

    println!("\n>> Engineering department:");
    for employee in directory.search_by_department("Engineering") {
        println!(
            "  * {} - {} (${:.0})",
            employee.name, employee.position, employee.salary
        );
    }

    if let Some(salary) = SalaryStats::collect(directory.iter()) {
        println!();
        print!("{}", report::salary_report(&salary));
    }

    println!("\n>> Deletions:");
    for id in [203, 999] {
        match directory.delete(id) {
            Ok(employee) => println!("[-] deleted {} (id {})", employee.name, id),
            Err(err) => println!("[x] {}", err),
        }
    }

    let stats = directory.stats();
    println!();
    print!("{}", report::stats_report(&stats));
    match report::stats_json(&stats) {
        Ok(json) => println!("\n>> Stats snapshot:\n{}", json),
        Err(err) => eprintln!("snapshot export failed: {}", err),
    }
}
