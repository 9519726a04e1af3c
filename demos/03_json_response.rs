/// json request in, json response out
use loan_decision_engine::{DecisionConfig, DecisionEngine, DecisionResponse, LoanRequest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = DecisionEngine::new(DecisionConfig::default());

    let requests = [
        r#"{"personalCode":"39001016004","loanAmount":4000,"loanPeriod":12}"#,
        r#"{"personalCode":"39001011237","loanAmount":4000,"loanPeriod":12}"#,
        r#"{"personalCode":"39001016004","loanAmount":50000,"loanPeriod":12}"#,
    ];

    for body in requests {
        let request: LoanRequest = serde_json::from_str(body)?;
        let response = DecisionResponse::from(engine.decide_request(&request));
        println!("{} -> {}", body, response.to_json()?);
    }

    Ok(())
}
