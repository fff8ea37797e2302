//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoint for computing itemized payroll
//! breakdowns. It is a thin adapter: all business rules live in
//! [`crate::calculation`].

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse, CalculationWarning};
pub use state::AppState;
