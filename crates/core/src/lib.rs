//! Core traits and types for the JanAI helpline classifier
//!
//! This crate provides foundational types used across all other crates:
//! - Problem categories and urgency levels
//! - Language definitions for the supported Indian languages
//! - Helpline records and classification results
//! - Government scheme and user profile types
//! - Traits for pluggable classifiers and scheme catalogs
//! - Error types

pub mod category;
pub mod classification;
pub mod error;
pub mod helpline;
pub mod language;
pub mod scheme;
pub mod traits;

pub use category::{Category, UrgencyLevel};
pub use classification::{
    ClassificationResult, ClassificationSource, ClassifyRequest, ALL_INDIA,
};
pub use error::{Error, Result};
pub use helpline::{HelplineRecord, Scope, NATIONAL_EMERGENCY_NUMBER};
pub use language::{Language, Script};
pub use scheme::{Scheme, UserProfile};
pub use traits::{Classifier, SchemeCatalog};
