//! Semantic checks on a decoded transfer request.
//!
//! Serde and the request parser handle syntax; this module only rejects
//! values that parse fine but cannot be transferred. Pure, no I/O.

use thiserror::Error;

use crate::config::request::TransferRequest;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

/// Reject a zero transfer amount.
pub fn validate_amount(amount: u64) -> Result<(), ValidationError> {
    if amount == 0 {
        return Err(ValidationError::NonPositiveAmount);
    }
    Ok(())
}

pub fn validate_request(request: &TransferRequest) -> Result<(), ValidationError> {
    validate_amount(request.amount)
}
