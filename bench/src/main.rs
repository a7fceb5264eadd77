//! Staffstore benchmark tool

use std::time::Instant;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use staffstore::{Employee, EmployeeDirectory};

mod metrics;
mod scenarios;

use metrics::Metrics;
use scenarios::scenario_by_name;

#[derive(Parser, Debug, Clone)]
#[command(name = "staffstore-bench")]
#[command(about = "Staffstore employee directory benchmark tool")]
pub struct Args {
    /// Records loaded before the measured phase
    #[arg(short = 'e', long, default_value = "10000")]
    pub employees: usize,

    /// Operations executed in the measured phase
    #[arg(short = 'o', long, default_value = "100000")]
    pub operations: usize,

    /// Requested initial bucket count
    #[arg(short = 'c', long, default_value = "17")]
    pub capacity: usize,

    /// Fraction of lookups targeting absent ids
    #[arg(short = 'm', long, default_value = "0.2")]
    pub miss_ratio: f64,

    /// Scenario name: lookup | churn
    #[arg(short = 's', long, default_value = "lookup")]
    pub scenario: String,

    /// RNG seed
    #[arg(long, default_value = "0")]
    pub seed: u64,
}

const DEPARTMENTS: [&str; 5] = ["Engineering", "Marketing", "Sales", "HR", "Finance"];

fn build_directory(args: &Args) -> EmployeeDirectory {
    let mut directory = EmployeeDirectory::with_capacity(args.capacity);
    for id in 0..args.employees as u32 {
        let employee = Employee::new(
            id,
            format!("employee-{}", id),
            DEPARTMENTS[id as usize % DEPARTMENTS.len()],
            "Staff",
            50_000.0 + f64::from(id % 1000) * 50.0,
            format!("employee-{}@company.com", id),
            format!("555-{:04}", id % 10_000),
        );
        if directory.insert(employee).is_err() {
            eprintln!("duplicate id {} during load", id);
        }
    }
    directory
}

fn main() {
    let args = Args::parse();

    let scenario = match scenario_by_name(&args.scenario) {
        Some(scenario) => scenario,
        None => {
            eprintln!("unknown scenario: {}", args.scenario);
            std::process::exit(1);
        }
    };

    println!(
        "staffstore-bench @ {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "scenario={} employees={} operations={} capacity={} miss_ratio={} seed={}",
        scenario.name(),
        args.employees,
        args.operations,
        args.capacity,
        args.miss_ratio,
        args.seed
    );

    let mut directory = build_directory(&args);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut metrics = Metrics::new();

    let start = Instant::now();
    for _ in 0..args.operations {
        scenario.step(&mut directory, &mut rng, &args, &mut metrics);
    }
    let elapsed = start.elapsed();

    metrics.report(elapsed, directory.stats());
}
