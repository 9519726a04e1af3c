/// quick start - minimal example to get started
use loan_decision_engine::{DecisionConfig, DecisionEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // engine with the default bounds and estonian personal code validation
    let engine = DecisionEngine::new(DecisionConfig::default());

    // ask for 4000€ over 12 months
    let decision = engine.decide("39001016004", 4000, 12)?;

    println!(
        "approved {}€ over {} months",
        decision.loan_amount, decision.loan_period
    );

    Ok(())
}
