//! Top-level error type and exit code mapping.

use thiserror::Error;

use crate::blockchain::BlockchainError;
use crate::config::{ConfigError, ValidationError};

/// Anything that aborts a transfer run.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to transfer tokens: {0}")]
    Transfer(#[from] BlockchainError),
}

impl AppError {
    /// Process exit status for this failure. Success is 0 and never returned here.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Validation(_) => 3,
            AppError::Transfer(err) => match err {
                BlockchainError::Network { .. } | BlockchainError::Timeout { .. } => 4,
                BlockchainError::InsufficientFunds { .. } => 5,
                BlockchainError::Signing(_) => 6,
                BlockchainError::Submission(_) => 7,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::RpcStep;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            AppError::from(ConfigError::InvalidField {
                field: "rpcURL",
                reason: "bad".into(),
            }),
            AppError::from(ValidationError::NonPositiveAmount),
            AppError::from(BlockchainError::Network {
                step: RpcStep::GetBalance,
                message: "down".into(),
            }),
            AppError::from(BlockchainError::InsufficientFunds {
                balance: 1,
                required: 2,
            }),
            AppError::from(BlockchainError::Signing("no key".into())),
            AppError::from(BlockchainError::Submission("rejected".into())),
        ];

        let codes: Vec<u8> = errors.iter().map(AppError::exit_code).collect();
        assert_eq!(codes, vec![2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_timeout_maps_to_network_code() {
        let err = AppError::from(BlockchainError::Timeout {
            step: RpcStep::GetLatestBlockhash,
            secs: 30,
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_messages_carry_step_context() {
        let err = AppError::from(ValidationError::NonPositiveAmount);
        assert_eq!(
            err.to_string(),
            "invalid configuration: amount must be greater than zero"
        );

        let err = AppError::from(BlockchainError::InsufficientFunds {
            balance: 1000,
            required: 5000,
        });
        assert_eq!(
            err.to_string(),
            "failed to transfer tokens: insufficient balance: balance=1000, required=5000"
        );
    }
}
