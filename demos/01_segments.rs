/// how the credit segment in the personal code shapes the offer
use loan_decision_engine::{
    DecisionConfig, DecisionEngine, EstonianPersonalCodeValidator, IdentityCodeValidator,
};

fn main() {
    let engine = DecisionEngine::new(DecisionConfig::default());
    let validator = EstonianPersonalCodeValidator::new();

    let applicants = [
        ("debt", "39001011237"),
        ("segment 1", "39001012506"),
        ("segment 2", "39001016004"),
        ("segment 3", "39001019006"),
        ("bad checksum", "39001019007"),
    ];

    for (label, code) in applicants {
        println!("{label} ({code}), valid: {}", validator.is_valid(code));

        match engine.decide(code, 4000, 12) {
            Ok(decision) => println!(
                "  offer: {}€ over {} months",
                decision.loan_amount, decision.loan_period
            ),
            Err(err) => println!("  {:?}: {}", err.kind(), err),
        }
    }
}
