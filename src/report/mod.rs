//! Console rendering for directory state and statistics
//!
//! Display adapters over the directory's read accessors; nothing here
//! mutates the table.

use std::fmt;

use crate::directory::{DirectoryStats, EmployeeDirectory};
use crate::employee::SalaryStats;

/// Boxed per-bucket chain view
pub struct ChainView<'a> {
    directory: &'a EmployeeDirectory,
}

/// Render the bucket array with its chains
pub fn chain_view(directory: &EmployeeDirectory) -> ChainView<'_> {
    ChainView { directory }
}

impl fmt::Display for ChainView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">> Employee Database (Hash Table Structure):")?;
        writeln!(
            f,
            "+-------+------------------------------------------------------------+"
        )?;
        writeln!(
            f,
            "| Index | Employees (Chain)                                          |"
        )?;
        writeln!(
            f,
            "+-------+------------------------------------------------------------+"
        )?;
        for (index, chain) in self.directory.buckets().iter().enumerate() {
            if chain.is_empty() {
                writeln!(f, "| {:>5} | {:<58} |", index, "Empty")?;
            } else {
                let rendered: Vec<String> = chain
                    .iter()
                    .map(|e| format!("[{}:{}]", e.id, e.name))
                    .collect();
                writeln!(f, "| {:>5} | {:<58} |", index, rendered.join(" -> "))?;
            }
        }
        writeln!(
            f,
            "+-------+------------------------------------------------------------+"
        )
    }
}

/// Formatted employee table
pub struct RosterView<'a> {
    directory: &'a EmployeeDirectory,
}

/// Render every record as a table row, in scan order
pub fn roster_view(directory: &EmployeeDirectory) -> RosterView<'_> {
    RosterView { directory }
}

impl fmt::Display for RosterView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">> Employee Directory:")?;
        writeln!(
            f,
            "+--------+-----------------+--------------+--------------------+-----------+"
        )?;
        writeln!(
            f,
            "| Emp ID | Name            | Department   | Position           | Salary    |"
        )?;
        writeln!(
            f,
            "+--------+-----------------+--------------+--------------------+-----------+"
        )?;
        for employee in self.directory.iter() {
            writeln!(
                f,
                "| {:<6} | {:<15} | {:<12} | {:<18} | ${:>8.0} |",
                employee.id, employee.name, employee.department, employee.position, employee.salary
            )?;
        }
        writeln!(
            f,
            "+--------+-----------------+--------------+--------------------+-----------+"
        )
    }
}

/// Performance analysis block for a stats snapshot
pub struct StatsReport<'a> {
    stats: &'a DirectoryStats,
}

/// Render occupancy and collision figures
pub fn stats_report(stats: &DirectoryStats) -> StatsReport<'_> {
    StatsReport { stats }
}

impl fmt::Display for StatsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, "[!] Hash Table Performance Analysis:")?;
        writeln!(f, "+-- Table Size: {}", s.table_size)?;
        writeln!(f, "+-- Total Elements: {}", s.total_elements)?;
        writeln!(f, "+-- Load Factor: {:.3}", s.load_factor)?;
        writeln!(f, "+-- Total Collisions: {}", s.collision_count)?;
        writeln!(
            f,
            "+-- Non-empty Buckets: {}/{} ({:.1}%)",
            s.non_empty_buckets,
            s.table_size,
            100.0 * s.non_empty_buckets as f64 / s.table_size as f64
        )?;
        writeln!(f, "+-- Average Chain Length: {:.2}", s.average_chain_length)?;
        writeln!(f, "+-- Maximum Chain Length: {}", s.max_chain_length)?;
        writeln!(
            f,
            "+-- Hash Distribution Quality: {}",
            if s.is_well_distributed() {
                "Good"
            } else {
                "Needs Improvement"
            }
        )
    }
}

/// Payroll summary block
pub struct SalaryReport<'a> {
    stats: &'a SalaryStats,
}

/// Render payroll statistics
pub fn salary_report(stats: &SalaryStats) -> SalaryReport<'_> {
    SalaryReport { stats }
}

impl fmt::Display for SalaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stats;
        writeln!(f, ">> Salary Statistics:")?;
        writeln!(f, "+-- Average Salary: ${:.0}", s.average)?;
        writeln!(f, "+-- Highest Paid: {} (${:.0})", s.highest_paid, s.max_salary)?;
        writeln!(f, "+-- Lowest Paid: {} (${:.0})", s.lowest_paid, s.min_salary)?;
        writeln!(f, "+-- Total Payroll: ${:.0}", s.total_payroll)
    }
}

/// Pretty-printed JSON snapshot of a stats read
pub fn stats_json(stats: &DirectoryStats) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stats)
}
