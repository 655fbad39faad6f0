pub mod document;
pub mod report;
pub mod ticker;
pub mod title;

// Re-exports
pub use document::{Document, EarningsMetadata, MetadataKind, Quarter, SecMetadata};
pub use report::FilingType;
pub use ticker::Ticker;
pub use title::{build_description_for_document, build_title_for_document};
