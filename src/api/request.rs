//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::PayrollInput;

/// Request body for the `/calculate` endpoint.
///
/// The employee identifier is what a payroll-history record would be stored
/// against. The engine itself never needs it to compute, but this endpoint
/// serves persistence-intending callers and therefore requires it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The identifier the calculation will be recorded under.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// The compensation and elected options for the calculation.
    pub input: PayrollInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "input": {
                "base_salary": "45000",
                "work_days": 22,
                "bonuses": "5000",
                "transport_allowance": "2500",
                "housing_allowance": "0",
                "apply_mandatory_contribution": true,
                "apply_progressive_tax": true,
                "retirement_fund": "0",
                "professional_tax": "0",
                "union_contribution": "0"
            }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id.as_deref(), Some("emp_001"));
        assert_eq!(
            request.input.base_salary,
            Decimal::from_str("45000").unwrap()
        );
        assert_eq!(request.input.work_days, 22);
    }

    #[test]
    fn test_deserialize_request_without_employee_id() {
        let json = r#"{
            "input": { "base_salary": "20000" }
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, None);
        assert!(request.input.apply_mandatory_contribution);
    }

    #[test]
    fn test_serialize_round_trip() {
        let request = CalculationRequest {
            employee_id: Some("emp_002".to_string()),
            input: PayrollInput {
                base_salary: Decimal::from_str("60000").unwrap(),
                ..PayrollInput::default()
            },
        };

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: CalculationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.employee_id.as_deref(), Some("emp_002"));
        assert_eq!(deserialized.input, request.input);
    }
}
