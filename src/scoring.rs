use crate::types::{CreditModifier, LoanAmount, LoanPeriod};

/// numeric value of the last four digits of a personal code
pub fn segment_of(personal_code: &str) -> Option<u16> {
    let tail = personal_code.len().checked_sub(4).and_then(|start| personal_code.get(start..))?;
    if !tail.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    tail.parse().ok()
}

/// credit score = ((credit modifier / loan amount) * loan period) / 10
pub fn credit_score(modifier: CreditModifier, amount: LoanAmount, period: LoanPeriod) -> f64 {
    if amount <= 0 {
        return 0.0;
    }
    ((modifier as f64 / amount as f64) * period as f64) / 10.0
}
