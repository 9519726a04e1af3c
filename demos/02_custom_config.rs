/// custom bounds and an injected identity code check
use loan_decision_engine::{DecisionConfig, DecisionEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DecisionConfig::builder()
        .amount_bounds(1_000, 20_000)
        .period_bounds(6, 36)
        .score_threshold(0.2)
        .segment_modifiers(150, 400, 1_200)
        .build()?;

    println!("{}", config.to_json_pretty()?);

    // accept any code ending in four digits
    let engine = DecisionEngine::with_validator(config, |code: &str| {
        code.len() >= 4 && code.chars().all(|c| c.is_ascii_digit())
    });

    for period in [6, 12, 24] {
        match engine.decide("00005500", 5_000, period) {
            Ok(decision) => println!(
                "requested {period} months -> {}€ over {} months",
                decision.loan_amount, decision.loan_period
            ),
            Err(err) => println!("requested {period} months -> {err}"),
        }
    }

    Ok(())
}
