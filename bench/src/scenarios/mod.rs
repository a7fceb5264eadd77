//! Benchmark scenarios

use std::time::Instant;

use rand::Rng;
use rand::rngs::StdRng;
use staffstore::EmployeeDirectory;

use crate::Args;
use crate::metrics::Metrics;

/// A single benchmark operation, applied repeatedly against the directory
pub trait Scenario {
    fn name(&self) -> &'static str;
    fn step(
        &self,
        directory: &mut EmployeeDirectory,
        rng: &mut StdRng,
        args: &Args,
        metrics: &mut Metrics,
    );
}

/// Point lookups with a configurable miss ratio
pub struct LookupScenario;

impl Scenario for LookupScenario {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn step(
        &self,
        directory: &mut EmployeeDirectory,
        rng: &mut StdRng,
        args: &Args,
        metrics: &mut Metrics,
    ) {
        let miss = rng.gen_bool(args.miss_ratio.clamp(0.0, 1.0));
        // loaded ids are dense from zero, so high ids always miss
        let id = if miss {
            u32::MAX - rng.gen_range(0..1_000_000)
        } else {
            rng.gen_range(0..args.employees.max(1) as u32)
        };

        let start = Instant::now();
        let lookup = directory.lookup(id);
        let latency = start.elapsed();
        metrics.record_op(lookup.found(), lookup.comparisons, latency);
    }
}

/// Delete a random id and reinsert the record it held
pub struct ChurnScenario;

impl Scenario for ChurnScenario {
    fn name(&self) -> &'static str {
        "churn"
    }

    fn step(
        &self,
        directory: &mut EmployeeDirectory,
        rng: &mut StdRng,
        args: &Args,
        metrics: &mut Metrics,
    ) {
        let id = rng.gen_range(0..args.employees.max(1) as u32);

        let start = Instant::now();
        match directory.delete(id) {
            Ok(employee) => {
                let reinserted = directory.insert(employee).is_ok();
                metrics.record_op(reinserted, 0, start.elapsed());
            }
            Err(_) => {
                metrics.record_op(false, 0, start.elapsed());
            }
        }
    }
}

static LOOKUP: LookupScenario = LookupScenario;
static CHURN: ChurnScenario = ChurnScenario;

/// Resolve a scenario from its CLI name
pub fn scenario_by_name(name: &str) -> Option<&'static dyn Scenario> {
    match name {
        "lookup" => Some(&LOOKUP),
        "churn" => Some(&CHURN),
        _ => None,
    }
}
