use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CountError, Result};

/// How a [`PrimeCounter`](crate::PrimeCounter) tallies a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Precalculated prefix table, then trial division in chunks.
    #[default]
    TrialDivision,
    /// Sieve of Eratosthenes up to `sieve_limit`, trial division above it.
    Sieve,
}

impl Strategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TrialDivision => "trial_division",
            Self::Sieve => "sieve",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = CountError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trial_division" | "trial-division" | "trial" => Ok(Self::TrialDivision),
            "sieve" => Ok(Self::Sieve),
            _ => Err(CountError::UnknownStrategy(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CounterConfig {
    pub strategy: Strategy,
    /// Largest bound the sieve is allowed to allocate for.
    pub sieve_limit: i32,
    /// Candidates per independently tallied window.
    pub chunk_size: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::TrialDivision,
            sieve_limit: 1 << 24,
            chunk_size: 1 << 16,
        }
    }
}

impl CounterConfig {
    /// Parse a JSON document. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON, unknown fields, or values
    /// rejected by [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if `chunk_size` is zero or `sieve_limit` is negative.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CountError::ZeroChunkSize);
        }
        if self.sieve_limit < 0 {
            return Err(CountError::NegativeSieveLimit(self.sieve_limit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = CounterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategy, Strategy::TrialDivision);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = CounterConfig::from_json_str(r#"{ "strategy": "sieve" }"#).unwrap();
        assert_eq!(config.strategy, Strategy::Sieve);
        assert_eq!(config.chunk_size, CounterConfig::default().chunk_size);
        assert_eq!(config.sieve_limit, CounterConfig::default().sieve_limit);
    }

    #[test]
    fn empty_json_is_default() {
        let config = CounterConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CounterConfig::default());
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = CounterConfig::from_json_str(r#"{ "chunk_size": 0 }"#).unwrap_err();
        assert!(matches!(err, CountError::ZeroChunkSize));
    }

    #[test]
    fn negative_sieve_limit_is_rejected() {
        let err = CounterConfig::from_json_str(r#"{ "sieve_limit": -1 }"#).unwrap_err();
        assert!(matches!(err, CountError::NegativeSieveLimit(-1)));
        assert_eq!(err.to_string(), "Sieve limit -1 is negative");
    }

    #[test]
    fn unknown_field_is_json_error() {
        let err = CounterConfig::from_json_str(r#"{ "threads": 4 }"#).unwrap_err();
        assert!(matches!(err, CountError::Json(_)));
    }

    #[test]
    fn unknown_strategy_in_json_is_json_error() {
        let err = CounterConfig::from_json_str(r#"{ "strategy": "wheel" }"#).unwrap_err();
        assert!(matches!(err, CountError::Json(_)));
    }

    #[test]
    fn strategy_parses_and_displays() {
        assert_eq!("sieve".parse::<Strategy>().unwrap(), Strategy::Sieve);
        assert_eq!(" Trial-Division ".parse::<Strategy>().unwrap(), Strategy::TrialDivision);
        for strategy in [Strategy::TrialDivision, Strategy::Sieve] {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let err = "wheel".parse::<Strategy>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown strategy: wheel");
    }

    #[test]
    fn serializes_strategy_in_snake_case() {
        let json = serde_json::to_string(&CounterConfig::default()).unwrap();
        assert!(json.contains(r#""strategy":"trial_division""#), "{json}");
    }
}
