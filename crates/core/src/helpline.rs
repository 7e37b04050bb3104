//! Helpline records

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The all-emergencies number that every result must carry
pub const NATIONAL_EMERGENCY_NUMBER: &str = "112";

const NATIONAL_LABEL: &str = "national";

/// Where a helpline is reachable
///
/// Serialized as `"national"` or the state name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Scope {
    National,
    State(String),
}

impl Scope {
    pub fn is_national(&self) -> bool {
        matches!(self, Self::National)
    }

    pub fn state(&self) -> Option<&str> {
        match self {
            Self::National => None,
            Self::State(name) => Some(name),
        }
    }
}

impl From<String> for Scope {
    fn from(value: String) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(NATIONAL_LABEL)
            || trimmed.eq_ignore_ascii_case(crate::ALL_INDIA)
        {
            Self::National
        } else {
            Self::State(trimmed.to_string())
        }
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::National => NATIONAL_LABEL.to_string(),
            Scope::State(name) => name,
        }
    }
}

/// A dialable helpline
///
/// `number` is the identity key; two records with the same number are
/// duplicates regardless of the other fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelplineRecord {
    pub number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub description: String,
    pub availability: String,
    pub scope: Scope,
}

impl HelplineRecord {
    /// Build a national record available around the clock
    pub fn national(
        number: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            category,
            description: description.into(),
            availability: "24/7".to_string(),
            scope: Scope::National,
        }
    }

    /// Build a state record available around the clock
    pub fn state(
        state: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            category,
            description: description.into(),
            availability: "24/7".to_string(),
            scope: Scope::State(state.into()),
        }
    }

    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = availability.into();
        self
    }

    pub fn is_national_emergency(&self) -> bool {
        self.number == NATIONAL_EMERGENCY_NUMBER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_serde() {
        let record = HelplineRecord::state(
            "Telangana",
            "155313",
            "HMWSSB Water Supply",
            Category::Water,
            "Hyderabad water supply and sewerage",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["scope"], "Telangana");
        assert_eq!(json["type"], "water");

        let national = HelplineRecord::national("112", "ERSS", Category::General, "All emergencies");
        let json = serde_json::to_value(&national).unwrap();
        assert_eq!(json["scope"], "national");
    }

    #[test]
    fn test_scope_parse_all_india() {
        assert_eq!(Scope::from("All India".to_string()), Scope::National);
        assert_eq!(Scope::from("national".to_string()), Scope::National);
        assert_eq!(
            Scope::from(" Kerala ".to_string()),
            Scope::State("Kerala".to_string())
        );
    }

    #[test]
    fn test_availability_override() {
        let record = HelplineRecord::national("1800-11-3155", "Jal Shakti", Category::Water, "")
            .with_availability("9 AM - 6 PM");
        assert_eq!(record.availability, "9 AM - 6 PM");
        assert!(!record.is_national_emergency());
    }
}
