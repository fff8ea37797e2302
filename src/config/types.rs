//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the jurisdiction whose rules are configured.
///
/// Contains identifying information about the rule set, including its
/// jurisdiction code, name, version, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct JurisdictionMetadata {
    /// The jurisdiction code (e.g., "DZ").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rule set.
    pub version: String,
    /// URL to the official rule documentation.
    pub source_url: String,
}

/// Mandatory social-security contribution rates.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ContributionRates {
    /// Employee-side contribution rate as a fraction of gross (e.g., 0.09).
    pub employee: Decimal,
    /// Employer-side contribution rate as a fraction of gross (e.g., 0.26).
    pub employer: Decimal,
}

/// One bracket of the progressive income-tax schedule.
///
/// Brackets form an ordered, non-overlapping, contiguous list: the first
/// bracket's lower bound is zero, each bracket's upper bound equals the next
/// bracket's lower bound, and the final bracket is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of this bracket.
    pub lower: Decimal,
    /// Exclusive upper bound, or `None` for the open-ended final bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Marginal rate applied to the portion of income inside this bracket.
    pub rate: Decimal,
}

/// Rates configuration file structure (rates.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// The statutory minimum-wage floor for base salaries.
    pub smig: Decimal,
    /// Mandatory contribution rates.
    pub contributions: ContributionRates,
}

/// Brackets configuration file structure (brackets.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct BracketsConfig {
    /// The progressive tax bracket schedule, ordered by lower bound.
    pub brackets: Vec<TaxBracket>,
}

/// The complete payroll configuration loaded from YAML files.
///
/// Constructing a `PayrollConfig` validates the bracket schedule invariants
/// once, so calculation stages can assume a well-formed schedule without
/// re-checking it per call.
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    /// Jurisdiction metadata.
    metadata: JurisdictionMetadata,
    /// The statutory minimum-wage floor.
    smig: Decimal,
    /// Mandatory contribution rates.
    contributions: ContributionRates,
    /// The validated tax bracket schedule.
    brackets: Vec<TaxBracket>,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidSchedule` if the bracket schedule violates
    /// any structural invariant:
    /// - the schedule is empty
    /// - the first bracket's lower bound is not zero
    /// - a non-final bracket has no upper bound
    /// - a bracket's upper bound does not exceed its lower bound
    /// - a bracket's upper bound differs from the next bracket's lower bound
    /// - the final bracket has an upper bound
    /// - a rate or the minimum wage is negative
    pub fn new(
        metadata: JurisdictionMetadata,
        smig: Decimal,
        contributions: ContributionRates,
        brackets: Vec<TaxBracket>,
    ) -> EngineResult<Self> {
        if smig < Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: format!("minimum wage must not be negative, got {}", smig),
            });
        }
        if contributions.employee < Decimal::ZERO || contributions.employer < Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: "contribution rates must not be negative".to_string(),
            });
        }
        Self::validate_brackets(&brackets)?;

        Ok(Self {
            metadata,
            smig,
            contributions,
            brackets,
        })
    }

    fn validate_brackets(brackets: &[TaxBracket]) -> EngineResult<()> {
        let Some(first) = brackets.first() else {
            return Err(EngineError::InvalidSchedule {
                message: "schedule must contain at least one bracket".to_string(),
            });
        };

        if first.lower != Decimal::ZERO {
            return Err(EngineError::InvalidSchedule {
                message: format!(
                    "first bracket must start at 0, got {}",
                    first.lower
                ),
            });
        }

        for (i, bracket) in brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO {
                return Err(EngineError::InvalidSchedule {
                    message: format!("bracket {} has a negative rate {}", i, bracket.rate),
                });
            }

            let is_last = i == brackets.len() - 1;
            match bracket.upper {
                Some(upper) if is_last => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!(
                            "final bracket must be open-ended, got upper bound {}",
                            upper
                        ),
                    });
                }
                Some(upper) => {
                    if upper <= bracket.lower {
                        return Err(EngineError::InvalidSchedule {
                            message: format!(
                                "bracket {} upper bound {} does not exceed lower bound {}",
                                i, upper, bracket.lower
                            ),
                        });
                    }
                    let next = &brackets[i + 1];
                    if next.lower != upper {
                        return Err(EngineError::InvalidSchedule {
                            message: format!(
                                "bracket {} upper bound {} does not meet next lower bound {}",
                                i, upper, next.lower
                            ),
                        });
                    }
                }
                None if !is_last => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("bracket {} is open-ended but not final", i),
                    });
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Returns the jurisdiction metadata.
    pub fn metadata(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the statutory minimum-wage floor.
    pub fn smig(&self) -> Decimal {
        self.smig
    }

    /// Returns the mandatory contribution rates.
    pub fn contributions(&self) -> ContributionRates {
        self.contributions
    }

    /// Returns the validated tax bracket schedule.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }
}
