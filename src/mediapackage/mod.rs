//! Media package element classification
//!
//! Flavors tag package elements by role and subtype so the rest of the
//! system can select them during ingestion, processing and search.

pub mod elements;
pub mod flavor;

pub use elements::MANIFEST_FILENAME;
pub use flavor::ElementFlavor;
