use tracing::debug;

use crate::config::DecisionConfig;
use crate::errors::{DecisionError, NoLoanReason, Result};
use crate::identity::{EstonianPersonalCodeValidator, IdentityCodeValidator};
use crate::scoring::{credit_score, segment_of};
use crate::types::{CreditModifier, CreditSegment, Decision, LoanAmount, LoanPeriod, LoanRequest};

/// decides the best loan offer an applicant qualifies for
///
/// The engine is stateless between calls: every decision is a function of the
/// request and the configuration it was built with, so one engine can be
/// shared across threads by reference.
#[derive(Debug, Clone)]
pub struct DecisionEngine<V = EstonianPersonalCodeValidator> {
    config: DecisionConfig,
    validator: V,
}

impl DecisionEngine<EstonianPersonalCodeValidator> {
    /// create engine validating estonian personal codes
    pub fn new(config: DecisionConfig) -> Self {
        Self::with_validator(config, EstonianPersonalCodeValidator::new())
    }
}

impl Default for DecisionEngine<EstonianPersonalCodeValidator> {
    fn default() -> Self {
        Self::new(DecisionConfig::default())
    }
}

impl<V: IdentityCodeValidator> DecisionEngine<V> {
    /// create engine with a custom identity code validator
    pub fn with_validator(config: DecisionConfig, validator: V) -> Self {
        Self { config, validator }
    }

    pub fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// decide on a loan request
    pub fn decide_request(&self, request: &LoanRequest) -> Result<Decision> {
        self.decide(&request.personal_code, request.loan_amount, request.loan_period)
    }

    /// find the shortest period, then the largest amount, that scores above the threshold
    pub fn decide(
        &self,
        personal_code: &str,
        requested_amount: LoanAmount,
        requested_period: LoanPeriod,
    ) -> Result<Decision> {
        if let Err(err) = self.verify_inputs(personal_code, requested_amount, requested_period) {
            debug!(
                requested_amount,
                requested_period,
                kind = ?err.kind(),
                "loan request rejected at validation"
            );
            return Err(err);
        }

        let modifier = self.credit_modifier(personal_code)?;
        if modifier == 0 {
            debug!(requested_amount, requested_period, "loan request rejected due to debt");
            return Err(DecisionError::NoValidLoan {
                reason: NoLoanReason::ExistingDebt,
            });
        }

        match self.find_offer(modifier, requested_period) {
            Some(decision) => {
                debug!(
                    requested_amount,
                    requested_period,
                    approved_amount = decision.loan_amount,
                    approved_period = decision.loan_period,
                    "loan approved"
                );
                Ok(decision)
            }
            None => {
                debug!(requested_amount, requested_period, modifier, "no qualifying loan offer");
                Err(DecisionError::NoValidLoan {
                    reason: NoLoanReason::NoSuitableOffer,
                })
            }
        }
    }

    /// credit modifier from the last four digits of the code, 0 means debt
    pub fn credit_modifier(&self, personal_code: &str) -> Result<CreditModifier> {
        let segment = segment_of(personal_code).ok_or_else(|| DecisionError::InvalidIdentityCode {
            code: personal_code.to_string(),
        })?;

        Ok(self.config.modifier_for(CreditSegment::from_digits(segment)))
    }

    // identity code first, then amount, then period
    fn verify_inputs(
        &self,
        personal_code: &str,
        requested_amount: LoanAmount,
        requested_period: LoanPeriod,
    ) -> Result<()> {
        if !self.validator.is_valid(personal_code) {
            return Err(DecisionError::InvalidIdentityCode {
                code: personal_code.to_string(),
            });
        }

        if !self.config.amount_range().contains(&requested_amount) {
            return Err(DecisionError::InvalidLoanAmount {
                min: self.config.min_amount,
                max: self.config.max_amount,
            });
        }

        if !self.config.period_range().contains(&requested_period) {
            return Err(DecisionError::InvalidLoanPeriod {
                min: self.config.min_period,
                max: self.config.max_period,
            });
        }

        Ok(())
    }

    fn find_offer(&self, modifier: CreditModifier, requested_period: LoanPeriod) -> Option<Decision> {
        for period in requested_period..=self.config.max_period {
            for amount in self.config.amount_range().rev() {
                if credit_score(modifier, amount, period) >= self.config.score_threshold {
                    return Some(Decision {
                        loan_amount: amount,
                        loan_period: period,
                    });
                }
            }
        }
        None
    }
}
