use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::errors::ConfigError;
use crate::types::{CreditModifier, CreditSegment, LoanAmount, LoanPeriod};

/// decision engine configuration, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionConfig {
    pub min_amount: LoanAmount,
    pub max_amount: LoanAmount,
    pub min_period: LoanPeriod,
    pub max_period: LoanPeriod,
    pub score_threshold: f64,
    pub segment_1_modifier: CreditModifier,
    pub segment_2_modifier: CreditModifier,
    pub segment_3_modifier: CreditModifier,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            min_amount: 2_000,
            max_amount: 10_000,
            min_period: 12,
            max_period: 60,
            score_threshold: 0.1,
            segment_1_modifier: 100,
            segment_2_modifier: 300,
            segment_3_modifier: 1_000,
        }
    }
}

impl DecisionConfig {
    /// builder starting from the default constants
    pub fn builder() -> DecisionConfigBuilder {
        DecisionConfigBuilder::new()
    }

    /// load from json and check invariants
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DecisionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// check bounds ordering and positivity of every constant
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_amount <= 0 {
            return Err(invalid(format!("minimum amount must be positive, got {}", self.min_amount)));
        }
        if self.min_amount > self.max_amount {
            return Err(invalid(format!(
                "minimum amount {} exceeds maximum amount {}",
                self.min_amount, self.max_amount
            )));
        }
        if self.min_period <= 0 {
            return Err(invalid(format!("minimum period must be positive, got {}", self.min_period)));
        }
        if self.min_period > self.max_period {
            return Err(invalid(format!(
                "minimum period {} exceeds maximum period {}",
                self.min_period, self.max_period
            )));
        }
        if !self.score_threshold.is_finite() || self.score_threshold <= 0.0 {
            return Err(invalid(format!(
                "score threshold must be a positive number, got {}",
                self.score_threshold
            )));
        }

        let modifiers = [
            ("segment 1", self.segment_1_modifier),
            ("segment 2", self.segment_2_modifier),
            ("segment 3", self.segment_3_modifier),
        ];
        for (name, modifier) in modifiers {
            if modifier <= 0 {
                return Err(invalid(format!("{name} modifier must be positive, got {modifier}")));
            }
        }

        Ok(())
    }

    pub fn amount_range(&self) -> RangeInclusive<LoanAmount> {
        self.min_amount..=self.max_amount
    }

    pub fn period_range(&self) -> RangeInclusive<LoanPeriod> {
        self.min_period..=self.max_period
    }

    /// modifier for a segment, 0 for debt
    pub fn modifier_for(&self, segment: CreditSegment) -> CreditModifier {
        match segment {
            CreditSegment::Debt => 0,
            CreditSegment::Segment1 => self.segment_1_modifier,
            CreditSegment::Segment2 => self.segment_2_modifier,
            CreditSegment::Segment3 => self.segment_3_modifier,
        }
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid { message }
}

/// builder for decision configurations
pub struct DecisionConfigBuilder {
    config: DecisionConfig,
}

impl DecisionConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: DecisionConfig::default(),
        }
    }

    pub fn amount_bounds(mut self, min: LoanAmount, max: LoanAmount) -> Self {
        self.config.min_amount = min;
        self.config.max_amount = max;
        self
    }

    pub fn period_bounds(mut self, min: LoanPeriod, max: LoanPeriod) -> Self {
        self.config.min_period = min;
        self.config.max_period = max;
        self
    }

    pub fn score_threshold(mut self, threshold: f64) -> Self {
        self.config.score_threshold = threshold;
        self
    }

    pub fn segment_modifiers(
        mut self,
        segment_1: CreditModifier,
        segment_2: CreditModifier,
        segment_3: CreditModifier,
    ) -> Self {
        self.config.segment_1_modifier = segment_1;
        self.config.segment_2_modifier = segment_2;
        self.config.segment_3_modifier = segment_3;
        self
    }

    pub fn build(self) -> Result<DecisionConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for DecisionConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = DecisionConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.amount_range(), 2_000..=10_000);
        assert_eq!(config.period_range(), 12..=60);
        assert_eq!(config.modifier_for(CreditSegment::Debt), 0);
        assert_eq!(config.modifier_for(CreditSegment::Segment1), 100);
        assert_eq!(config.modifier_for(CreditSegment::Segment2), 300);
        assert_eq!(config.modifier_for(CreditSegment::Segment3), 1_000);
    }

    #[test]
    fn test_builder_overrides() {
        let config = DecisionConfig::builder()
            .amount_bounds(1_000, 5_000)
            .period_bounds(6, 24)
            .score_threshold(0.5)
            .segment_modifiers(50, 150, 500)
            .build()
            .unwrap();

        assert_eq!(config.min_amount, 1_000);
        assert_eq!(config.max_period, 24);
        assert_eq!(config.score_threshold, 0.5);
        assert_eq!(config.modifier_for(CreditSegment::Segment2), 150);
    }

    #[test]
    fn test_builder_rejects_inverted_bounds() {
        let result = DecisionConfig::builder().amount_bounds(5_000, 1_000).build();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));

        let result = DecisionConfig::builder().period_bounds(48, 12).build();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_builder_rejects_non_positive_values() {
        assert!(DecisionConfig::builder().segment_modifiers(100, 0, 1_000).build().is_err());
        assert!(DecisionConfig::builder().amount_bounds(0, 1_000).build().is_err());
        assert!(DecisionConfig::builder().score_threshold(f64::NAN).build().is_err());
        assert!(DecisionConfig::builder().score_threshold(0.0).build().is_err());
    }

    #[test]
    fn test_json_roundtrip_and_validation() {
        let config = DecisionConfig::default();
        let json = config.to_json_pretty().unwrap();
        assert_eq!(DecisionConfig::from_json(&json).unwrap(), config);

        let inverted = json.replace("\"min_period\": 12", "\"min_period\": 72");
        assert!(matches!(DecisionConfig::from_json(&inverted), Err(ConfigError::Invalid { .. })));

        assert!(matches!(DecisionConfig::from_json("{"), Err(ConfigError::Json(_))));
    }
}
