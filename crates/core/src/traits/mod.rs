//! Core traits for the helpline classifier
//!
//! Components behind these traits can be swapped without touching the HTTP
//! layer, and mocked in tests.
//!
//! ```text
//! Classification:
//!   - Classifier: free text → ClassificationResult
//!
//! Schemes:
//!   - SchemeCatalog: read-only source of government schemes
//! ```

mod catalog;
mod classifier;

pub use catalog::SchemeCatalog;
pub use classifier::Classifier;
