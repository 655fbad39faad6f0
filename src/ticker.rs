use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated stock ticker symbol. Always stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    pub fn new(ticker: String) -> Result<Self> {
        let uppercase_ticker = ticker.to_uppercase();
        if uppercase_ticker.is_empty() {
            return Err(anyhow!("Ticker cannot be empty"));
        }
        if !uppercase_ticker
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(anyhow!(
                "Ticker must contain only alphanumeric characters or hyphens: {}",
                ticker
            ));
        }
        Ok(Ticker(uppercase_ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Ticker::new(s).map_err(|e| e.to_string())
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> String {
        ticker.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_is_uppercased() {
        let ticker = Ticker::new("brk-b".to_string()).unwrap();
        assert_eq!(ticker.as_str(), "BRK-B");
    }

    #[test]
    fn test_empty_ticker_is_rejected() {
        assert!(Ticker::new("".to_string()).is_err());
    }

    #[test]
    fn test_ticker_rejects_invalid_characters() {
        assert!(Ticker::new("EX!".to_string()).is_err());
        assert!(Ticker::new("E X".to_string()).is_err());
    }

    #[test]
    fn test_ticker_serde_round_trip() {
        let ticker: Ticker = serde_json::from_str("\"ex\"").unwrap();
        assert_eq!(ticker.to_string(), "EX");
        assert!(serde_json::from_str::<Ticker>("\"\"").is_err());
    }
}
