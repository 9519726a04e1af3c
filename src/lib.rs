pub mod config;
pub mod engine;
pub mod errors;
pub mod identity;
pub mod scoring;
pub mod types;

// re-export key types
pub use config::{DecisionConfig, DecisionConfigBuilder};
pub use engine::DecisionEngine;
pub use errors::{ConfigError, DecisionError, ErrorKind, NoLoanReason, Result};
pub use identity::{EstonianPersonalCodeValidator, IdentityCodeValidator};
pub use scoring::{credit_score, segment_of};
pub use types::{
    CreditModifier, CreditSegment, Decision, DecisionResponse, LoanAmount, LoanPeriod,
    LoanRequest,
};

// re-export external dependencies that users will need
pub use chrono;
