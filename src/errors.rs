use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::types::{LoanAmount, LoanPeriod};

/// reasons a well-formed request still gets no offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoLoanReason {
    /// applicant falls in the debt segment, search never runs
    ExistingDebt,
    /// every (period, amount) pair was scored below the threshold
    NoSuitableOffer,
}

impl fmt::Display for NoLoanReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoLoanReason::ExistingDebt => write!(f, "loan rejected due to existing debt"),
            NoLoanReason::NoSuitableOffer => write!(
                f,
                "no suitable loan found within the allowed period and amount constraints"
            ),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    #[error("invalid personal ID code: {code}")]
    InvalidIdentityCode {
        code: String,
    },

    #[error("requested loan amount must be between {min}€ and {max}€")]
    InvalidLoanAmount {
        min: LoanAmount,
        max: LoanAmount,
    },

    #[error("requested loan period must be between {min} and {max} months")]
    InvalidLoanPeriod {
        min: LoanPeriod,
        max: LoanPeriod,
    },

    #[error("{reason}")]
    NoValidLoan {
        reason: NoLoanReason,
    },
}

/// fieldless tag for mapping errors onto transport responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidIdentityCode,
    InvalidLoanAmount,
    InvalidLoanPeriod,
    NoValidLoan,
}

impl DecisionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecisionError::InvalidIdentityCode { .. } => ErrorKind::InvalidIdentityCode,
            DecisionError::InvalidLoanAmount { .. } => ErrorKind::InvalidLoanAmount,
            DecisionError::InvalidLoanPeriod { .. } => ErrorKind::InvalidLoanPeriod,
            DecisionError::NoValidLoan { .. } => ErrorKind::NoValidLoan,
        }
    }
}

/// errors raised while building or loading a configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {message}")]
    Invalid {
        message: String,
    },

    #[error("malformed configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DecisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_in_messages() {
        let err = DecisionError::InvalidLoanAmount { min: 2000, max: 10000 };
        assert_eq!(err.to_string(), "requested loan amount must be between 2000€ and 10000€");

        let err = DecisionError::InvalidLoanPeriod { min: 12, max: 60 };
        assert_eq!(err.to_string(), "requested loan period must be between 12 and 60 months");
    }

    #[test]
    fn test_no_valid_loan_messages_differ() {
        let debt = DecisionError::NoValidLoan { reason: NoLoanReason::ExistingDebt };
        let exhausted = DecisionError::NoValidLoan { reason: NoLoanReason::NoSuitableOffer };

        assert_ne!(debt.to_string(), exhausted.to_string());
        assert!(debt.to_string().contains("existing debt"));
        assert_eq!(debt.kind(), exhausted.kind());
    }

    #[test]
    fn test_kind_serializes_as_tag() {
        let err = DecisionError::InvalidIdentityCode { code: "123".to_string() };
        let json = serde_json::to_string(&err.kind()).unwrap();
        assert_eq!(json, "\"InvalidIdentityCode\"");
    }
}
