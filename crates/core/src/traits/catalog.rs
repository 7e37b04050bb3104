//! Scheme catalog trait

use crate::{Result, Scheme};

/// Read-only source of government schemes
pub trait SchemeCatalog: Send + Sync {
    /// All schemes in catalog order
    fn schemes(&self) -> Result<Vec<Scheme>>;
}
