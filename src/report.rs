use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::{EnumIter, IntoEnumIterator};

/// SEC filing categories this crate knows how to describe. The set is
/// closed: an unrecognized form string is a validation error, not a
/// passthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(try_from = "String", into = "String")]
pub enum FilingType {
    Form10K,
    Form10Q,
    Form8K,
    Form20F,
    FormS1,
    FormDEF14A,
}

impl TryFrom<String> for FilingType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        FilingType::from_str(&s)
    }
}

impl From<FilingType> for String {
    fn from(filing_type: FilingType) -> String {
        filing_type.to_string()
    }
}

impl fmt::Display for FilingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilingType::Form10K => write!(f, "10-K"),
            FilingType::Form10Q => write!(f, "10-Q"),
            FilingType::Form8K => write!(f, "8-K"),
            FilingType::Form20F => write!(f, "20-F"),
            FilingType::FormS1 => write!(f, "S-1"),
            FilingType::FormDEF14A => write!(f, "DEF 14A"),
        }
    }
}

pub static FILING_TYPES: Lazy<String> = Lazy::new(|| {
    FilingType::iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
});

impl FilingType {
    pub fn list_types() -> &'static str {
        &FILING_TYPES
    }
}

impl FromStr for FilingType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<FilingType, String> {
        match s.to_uppercase().as_str() {
            "10-K" => Ok(FilingType::Form10K),
            "10-Q" => Ok(FilingType::Form10Q),
            "8-K" => Ok(FilingType::Form8K),
            "20-F" => Ok(FilingType::Form20F),
            "S-1" => Ok(FilingType::FormS1),
            "DEF 14A" => Ok(FilingType::FormDEF14A),
            _ => Err(format!(
                "Unknown filing type: {} (expected one of: {})",
                s,
                FilingType::list_types()
            )),
        }
    }
}
