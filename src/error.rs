//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate:
//! [`EngineError`] for configuration-level failures and [`Violation`] for
//! field-level input validation failures.

use rust_decimal::Decimal;
use thiserror::Error;

/// Configuration-level error type for the Payroll Calculation Engine.
///
/// These errors occur while loading or constructing a payroll configuration,
/// never during a calculation itself.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The tax bracket schedule violates a structural invariant.
    #[error("Invalid tax schedule: {message}")]
    InvalidSchedule {
        /// A description of the invariant that was violated.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

/// A field-level violation detected by input validation.
///
/// The validator collects every violation in a single pass so that a caller
/// can highlight all invalid fields at once. Calculation stages never raise
/// violations themselves; they assume validated input.
///
/// # Example
///
/// ```
/// use payroll_engine::error::Violation;
///
/// let violation = Violation::InvalidWorkDays { work_days: 32 };
/// assert_eq!(violation.field(), "work_days");
/// assert_eq!(violation.to_string(), "Work days must be between 0 and 31, got 32");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// The base salary is below the configured minimum-wage floor.
    #[error("Base salary {base_salary} is below the minimum wage {smig}")]
    BelowMinimumWage {
        /// The offending base salary.
        base_salary: Decimal,
        /// The configured minimum-wage floor.
        smig: Decimal,
    },

    /// The number of work days is outside the valid range.
    #[error("Work days must be between 0 and 31, got {work_days}")]
    InvalidWorkDays {
        /// The offending work day count.
        work_days: u32,
    },

    /// A monetary input is below zero.
    #[error("Field '{field}' must not be negative")]
    NegativeAmount {
        /// The name of the offending field.
        field: &'static str,
    },

    /// No employee identifier was supplied for a result intended to be
    /// persisted. Raised on the persistence path only, never by `calculate`.
    #[error("An employee identifier is required to record a calculation")]
    MissingContext,
}

impl Violation {
    /// Returns the name of the input field this violation refers to.
    ///
    /// Adapters use this to build a field-to-message mapping so a UI can
    /// highlight every invalid field in one pass.
    pub fn field(&self) -> &'static str {
        match self {
            Violation::BelowMinimumWage { .. } => "base_salary",
            Violation::InvalidWorkDays { .. } => "work_days",
            Violation::NegativeAmount { field } => field,
            Violation::MissingContext => "employee_id",
        }
    }
}
