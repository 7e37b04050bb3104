//! Government scheme and user profile types

use serde::{Deserialize, Serialize};

/// A government welfare scheme from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub eligibility: String,
    #[serde(default)]
    pub benefits: String,
}

impl Scheme {
    /// Whether the scheme's category mentions any of the given keywords
    pub fn matches_any(&self, keywords: &[&str]) -> bool {
        let category = self.category.to_lowercase();
        keywords.iter().any(|k| category.contains(k))
    }
}

/// Profile submitted to the scheme finder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
}

impl UserProfile {
    /// Names of required fields that are missing or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push("name");
        }
        if self.age.is_none() {
            missing.push("age");
        }
        if blank(&self.gender) {
            missing.push("gender");
        }
        if blank(&self.occupation) {
            missing.push("occupation");
        }
        missing
    }
}
