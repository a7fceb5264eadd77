//! Metrics collection module

use std::time::Duration;

use staffstore::directory::DirectoryStats;

/// Aggregates per-operation results for the final report
///
/// Plain counters: the directory has exactly one caller, so the whole run
/// is single-threaded.
pub struct Metrics {
    ops: u64,
    hits: u64,
    comparisons: u64,
    latency_sum: Duration,
    latency_max: Duration,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            ops: 0,
            hits: 0,
            comparisons: 0,
            latency_sum: Duration::ZERO,
            latency_max: Duration::ZERO,
        }
    }

    /// Record one operation
    pub fn record_op(&mut self, hit: bool, comparisons: usize, latency: Duration) {
        self.ops += 1;
        if hit {
            self.hits += 1;
        }
        self.comparisons += comparisons as u64;
        self.latency_sum += latency;
        if latency > self.latency_max {
            self.latency_max = latency;
        }
    }

    /// Print the aggregated results and the directory's final state
    pub fn report(&self, elapsed: Duration, stats: DirectoryStats) {
        let ops = self.ops.max(1);
        println!("\n>> Benchmark Results:");
        println!("+-- Operations: {}", self.ops);
        println!(
            "+-- Hits: {} ({:.1}%)",
            self.hits,
            100.0 * self.hits as f64 / ops as f64
        );
        println!("+-- Total Time: {:?}", elapsed);
        println!(
            "+-- Throughput: {:.0} ops/s",
            self.ops as f64 / elapsed.as_secs_f64().max(f64::MIN_POSITIVE)
        );
        println!("+-- Avg Latency: {:?}", self.latency_sum / ops as u32);
        println!("+-- Max Latency: {:?}", self.latency_max);
        println!(
            "+-- Avg Comparisons: {:.2}",
            self.comparisons as f64 / ops as f64
        );
        println!("\n>> Final Directory State:");
        println!("+-- Table Size: {}", stats.table_size);
        println!("+-- Elements: {}", stats.total_elements);
        println!("+-- Load Factor: {:.3}", stats.load_factor);
        println!("+-- Collisions: {}", stats.collision_count);
        println!("+-- Max Chain: {}", stats.max_chain_length);
    }
}
