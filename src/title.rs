use anyhow::Result;

use crate::document::Document;

/// Derive a display title for a document from its SEC filing metadata.
///
/// Documents without SEC metadata get a fixed placeholder title. A payload
/// stored under the SEC tag that fails validation propagates as an error.
pub fn build_title_for_document(document: &Document) -> Result<String> {
    let sec_metadata = match document.sec_metadata()? {
        Some(metadata) => metadata,
        None => {
            log::debug!("No SEC metadata for {}, using placeholder title", document.url);
            return Ok("No Title Document".to_string());
        }
    };

    Ok(format!(
        "{} ({}) {} ({})",
        sec_metadata.company_name,
        sec_metadata.company_ticker,
        sec_metadata.doc_type,
        sec_metadata.time_period()
    ))
}

/// Derive a one-sentence description for a document, for surfacing alongside
/// its title.
pub fn build_description_for_document(document: &Document) -> Result<String> {
    let sec_metadata = match document.sec_metadata()? {
        Some(metadata) => metadata,
        None => {
            return Ok(
                "A document containing useful information that the user pre-selected to discuss with the assistant."
                    .to_string(),
            )
        }
    };

    Ok(format!(
        "A SEC {} filing describing the financials of {} ({}) for the {} time period.",
        sec_metadata.doc_type,
        sec_metadata.company_name,
        sec_metadata.company_ticker,
        sec_metadata.time_period()
    ))
}
