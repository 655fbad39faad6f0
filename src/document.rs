use anyhow::{anyhow, Result};
use core::fmt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::report::FilingType;
use crate::ticker::Ticker;

/// Discriminator for the shape of a document's auxiliary metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataKind {
    SecDocument,
    EarningsTranscript,
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MetadataKind::SecDocument => write!(f, "sec_document"),
            MetadataKind::EarningsTranscript => write!(f, "earnings_transcript"),
        }
    }
}

/// A fiscal quarter, restricted to 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quarter(u8);

impl Quarter {
    pub fn new(quarter: u8) -> Result<Self> {
        if !(1..=4).contains(&quarter) {
            return Err(anyhow!(
                "Fiscal quarter must be between 1 and 4: {}",
                quarter
            ));
        }
        Ok(Quarter(quarter))
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Quarter {
    type Error = String;

    fn try_from(quarter: u8) -> Result<Self, Self::Error> {
        Quarter::new(quarter).map_err(|e| e.to_string())
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> u8 {
        quarter.0
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structured attributes of a SEC regulatory filing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecMetadata {
    pub company_name: String,
    pub company_ticker: Ticker,
    pub doc_type: FilingType,
    pub year: i32,
    pub quarter: Option<Quarter>,
}

impl SecMetadata {
    /// Fiscal period covered by the filing, e.g. "2024 Q2" or "2024".
    pub fn time_period(&self) -> String {
        match self.quarter {
            Some(quarter) => format!("{} Q{}", self.year, quarter),
            None => self.year.to_string(),
        }
    }
}

/// Structured attributes of an earnings call transcript. Transcripts are
/// always tied to a specific quarter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarningsMetadata {
    pub symbol: Ticker,
    pub year: i32,
    pub quarter: Quarter,
}

/// A document as produced by the ingestion pipeline: a source URL plus an
/// optional map of per-kind metadata payloads. Payloads stay opaque JSON
/// until a typed accessor validates them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub url: Url,
    pub metadata_map: Option<HashMap<MetadataKind, Value>>,
}

impl Document {
    pub fn new(url: Url) -> Self {
        Document {
            url,
            metadata_map: None,
        }
    }

    pub fn with_metadata(mut self, kind: MetadataKind, payload: Value) -> Self {
        self.metadata_map
            .get_or_insert_with(HashMap::new)
            .insert(kind, payload);
        self
    }

    fn metadata_value(&self, kind: MetadataKind) -> Option<&Value> {
        self.metadata_map.as_ref().and_then(|map| map.get(&kind))
    }

    /// SEC filing metadata, if the document carries any. A payload stored
    /// under the tag that does not match the SEC shape is a hard error.
    pub fn sec_metadata(&self) -> Result<Option<SecMetadata>> {
        match self.metadata_value(MetadataKind::SecDocument) {
            Some(value) => {
                let metadata = serde_json::from_value(value.clone()).map_err(|e| {
                    anyhow!(
                        "Invalid {} metadata for {}: {}",
                        MetadataKind::SecDocument,
                        self.url,
                        e
                    )
                })?;
                Ok(Some(metadata))
            }
            None => Ok(None),
        }
    }

    /// Earnings transcript metadata, if the document carries any.
    pub fn earnings_metadata(&self) -> Result<Option<EarningsMetadata>> {
        match self.metadata_value(MetadataKind::EarningsTranscript) {
            Some(value) => {
                let metadata = serde_json::from_value(value.clone()).map_err(|e| {
                    anyhow!(
                        "Invalid {} metadata for {}: {}",
                        MetadataKind::EarningsTranscript,
                        self.url,
                        e
                    )
                })?;
                Ok(Some(metadata))
            }
            None => Ok(None),
        }
    }
}
