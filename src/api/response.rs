//! Response types for the Payroll Calculation Engine API.
//!
//! This module defines the success envelope returned by the `/calculate`
//! endpoint and the error response structures.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Violation;
use crate::models::PayrollCalculation;

/// A warning attached to a calculation response.
///
/// Warnings indicate conditions that don't prevent calculation but may
/// require attention, such as deductions exceeding gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

impl CalculationWarning {
    /// The warning raised when deductions exceed gross salary.
    pub fn negative_net_salary() -> Self {
        Self {
            code: "NEGATIVE_NET_SALARY".to_string(),
            message: "Total deductions exceed gross salary; net salary is negative".to_string(),
            severity: "high".to_string(),
        }
    }
}

/// Success envelope for the `/calculate` endpoint.
///
/// The envelope identifies the calculation so batch payroll-run callers can
/// persist it verbatim; the [`PayrollCalculation`] inside stays the pure
/// engine value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The identifier the calculation is recorded under.
    pub employee_id: String,
    /// The itemized calculation result.
    pub calculation: PayrollCalculation,
    /// Warnings attached to the result.
    pub warnings: Vec<CalculationWarning>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Field-to-message mapping for validation failures, so a UI can
    /// highlight every invalid field in one pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fields: None,
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            fields: None,
            details: Some(details.into()),
        }
    }

    /// Creates a validation error carrying a field-to-message mapping.
    ///
    /// Every violation is reported; when several violations hit the same
    /// field, the first message wins.
    pub fn validation_error(violations: &[Violation]) -> Self {
        let mut fields = BTreeMap::new();
        for violation in violations {
            fields
                .entry(violation.field().to_string())
                .or_insert_with(|| violation.to_string());
        }

        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: "The payroll input is invalid".to_string(),
            fields: Some(fields),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}
