use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// loan amount in whole euros
pub type LoanAmount = i64;

/// loan period in months
pub type LoanPeriod = i32;

/// credit modifier derived from the personal code, 0 means debt
pub type CreditModifier = i32;

/// customer segment encoded in the last four digits of the personal code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditSegment {
    /// 0000-2499, outstanding debt
    Debt,
    /// 2500-4999
    Segment1,
    /// 5000-7499
    Segment2,
    /// 7500-9999
    Segment3,
}

impl CreditSegment {
    /// classify the numeric value of the last four digits
    pub fn from_digits(segment: u16) -> Self {
        match segment {
            0..=2499 => CreditSegment::Debt,
            2500..=4999 => CreditSegment::Segment1,
            5000..=7499 => CreditSegment::Segment2,
            _ => CreditSegment::Segment3,
        }
    }

    pub fn has_debt(&self) -> bool {
        matches!(self, CreditSegment::Debt)
    }
}

/// loan request as received from the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub personal_code: String,
    pub loan_amount: LoanAmount,
    pub loan_period: LoanPeriod,
}

impl LoanRequest {
    pub fn new(personal_code: impl Into<String>, loan_amount: LoanAmount, loan_period: LoanPeriod) -> Self {
        Self {
            personal_code: personal_code.into(),
            loan_amount,
            loan_period,
        }
    }
}

/// approved offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub loan_amount: LoanAmount,
    pub loan_period: LoanPeriod,
}

/// outward response shape, fields absent when not applicable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResponse {
    pub loan_amount: Option<LoanAmount>,
    pub loan_period: Option<LoanPeriod>,
    pub error_message: Option<String>,
}

impl DecisionResponse {
    pub fn is_approved(&self) -> bool {
        self.error_message.is_none()
    }

    /// convert to json string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Decision>> for DecisionResponse {
    fn from(result: Result<Decision>) -> Self {
        match result {
            Ok(decision) => DecisionResponse {
                loan_amount: Some(decision.loan_amount),
                loan_period: Some(decision.loan_period),
                error_message: None,
            },
            Err(err) => DecisionResponse {
                loan_amount: None,
                loan_period: None,
                error_message: Some(err.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{DecisionError, NoLoanReason};

    #[test]
    fn test_segment_boundaries() {
        assert_eq!(CreditSegment::from_digits(0), CreditSegment::Debt);
        assert_eq!(CreditSegment::from_digits(2499), CreditSegment::Debt);
        assert_eq!(CreditSegment::from_digits(2500), CreditSegment::Segment1);
        assert_eq!(CreditSegment::from_digits(4999), CreditSegment::Segment1);
        assert_eq!(CreditSegment::from_digits(5000), CreditSegment::Segment2);
        assert_eq!(CreditSegment::from_digits(7499), CreditSegment::Segment2);
        assert_eq!(CreditSegment::from_digits(7500), CreditSegment::Segment3);
        assert_eq!(CreditSegment::from_digits(9999), CreditSegment::Segment3);
    }

    #[test]
    fn test_request_wire_format() {
        let request: LoanRequest = serde_json::from_str(
            r#"{"personalCode":"39001016004","loanAmount":4000,"loanPeriod":12}"#,
        )
        .unwrap();

        assert_eq!(request, LoanRequest::new("39001016004", 4000, 12));
    }

    #[test]
    fn test_response_from_decision() {
        let response = DecisionResponse::from(Ok(Decision { loan_amount: 3600, loan_period: 12 }));

        assert!(response.is_approved());
        assert_eq!(
            response.to_json().unwrap(),
            r#"{"loanAmount":3600,"loanPeriod":12,"errorMessage":null}"#
        );
    }

    #[test]
    fn test_response_from_error() {
        let response = DecisionResponse::from(Err(DecisionError::NoValidLoan {
            reason: NoLoanReason::ExistingDebt,
        }));

        assert!(!response.is_approved());
        assert_eq!(response.loan_amount, None);
        assert_eq!(response.loan_period, None);
        assert_eq!(response.error_message.as_deref(), Some("loan rejected due to existing debt"));
    }
}
