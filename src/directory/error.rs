//! Directory error definitions

use std::error::Error;
use std::fmt;

use crate::types::EmployeeId;

/// Directory error types
///
/// Both variants are normal negative outcomes of directory operations,
/// reported to the caller rather than escalated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryError {
    /// Insert attempted with an id already present
    DuplicateId(EmployeeId),
    /// Delete targeted an absent id
    NotFound(EmployeeId),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::DuplicateId(id) => {
                write!(f, "Employee id already exists: {}", id)
            }
            DirectoryError::NotFound(id) => write!(f, "Employee id not found: {}", id),
        }
    }
}

impl Error for DirectoryError {}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
