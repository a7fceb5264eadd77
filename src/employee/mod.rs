//! Employee record and payroll aggregation

use serde::{Deserialize, Serialize};

use crate::types::EmployeeId;

/// Employee record
///
/// Uniquely identified by `id`; the remaining fields are payload the
/// directory stores but never interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier
    pub id: EmployeeId,
    /// Full name
    pub name: String,
    /// Department name
    pub department: String,
    /// Job title
    pub position: String,
    /// Annual salary in dollars
    pub salary: f64,
    /// Work email address
    pub email: String,
    /// Work phone number
    pub phone: String,
}

impl Employee {
    /// Create a fully populated employee record
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        position: impl Into<String>,
        salary: f64,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            position: position.into(),
            salary,
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Create a record with only an id and a name
    pub fn basic(id: EmployeeId, name: impl Into<String>) -> Self {
        Self::new(id, name, "", "", 0.0, "", "")
    }
}

/// Payroll statistics over a set of employee records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryStats {
    /// Mean salary
    pub average: f64,
    /// Sum of all salaries
    pub total_payroll: f64,
    /// Lowest salary
    pub min_salary: f64,
    /// Highest salary
    pub max_salary: f64,
    /// Name of the highest-paid employee
    pub highest_paid: String,
    /// Name of the lowest-paid employee
    pub lowest_paid: String,
}

impl SalaryStats {
    /// Aggregate payroll statistics from a record iterator
    ///
    /// Returns `None` when the iterator is empty.
    pub fn collect<'a>(records: impl Iterator<Item = &'a Employee>) -> Option<Self> {
        let mut count = 0usize;
        let mut total = 0.0;
        let mut min_salary = f64::INFINITY;
        let mut max_salary = f64::NEG_INFINITY;
        let mut highest_paid = String::new();
        let mut lowest_paid = String::new();

        for employee in records {
            count += 1;
            total += employee.salary;
            if employee.salary > max_salary {
                max_salary = employee.salary;
                highest_paid = employee.name.clone();
            }
            if employee.salary < min_salary {
                min_salary = employee.salary;
                lowest_paid = employee.name.clone();
            }
        }

        if count == 0 {
            return None;
        }

        Some(Self {
            average: total / count as f64,
            total_payroll: total,
            min_salary,
            max_salary,
            highest_paid,
            lowest_paid,
        })
    }
}
