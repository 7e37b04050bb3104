//! Problem categories and urgency levels

use serde::{Deserialize, Serialize};

/// Problem category a complaint is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Child,
    Women,
    Police,
    Medical,
    Fire,
    Electricity,
    Water,
    Transport,
    #[default]
    General,
}

impl Category {
    /// Stable lowercase identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Women => "women",
            Self::Police => "police",
            Self::Medical => "medical",
            Self::Fire => "fire",
            Self::Electricity => "electricity",
            Self::Water => "water",
            Self::Transport => "transport",
            Self::General => "general",
        }
    }

    /// Human-readable problem type shown to callers
    pub fn problem_type(&self) -> &'static str {
        match self {
            Self::Child => "Child Protection",
            Self::Women => "Women Safety",
            Self::Police => "Crime/Police",
            Self::Medical => "Healthcare",
            Self::Fire => "Fire Emergency",
            Self::Electricity => "Electricity",
            Self::Water => "Water Supply",
            Self::Transport => "Transport",
            Self::General => "General",
        }
    }

    /// Issue label used by the complaint form
    pub fn issue_label(&self) -> &'static str {
        match self {
            Self::Child => "Child Help",
            Self::Women => "Women Help",
            Self::Police => "Police",
            Self::Medical => "Health",
            Self::Fire => "Fire",
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::Transport => "Transport",
            Self::General => "",
        }
    }

    /// All categories in resolution priority order
    pub fn all() -> &'static [Category] {
        &[
            Self::Child,
            Self::Women,
            Self::Police,
            Self::Medical,
            Self::Fire,
            Self::Electricity,
            Self::Water,
            Self::Transport,
            Self::General,
        ]
    }

    /// Parse a free-form label produced by a caller or a remote model
    ///
    /// Unknown labels map to `General`.
    pub fn from_str_loose(s: &str) -> Self {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return Self::General;
        }

        if let Some(exact) = Self::all().iter().find(|c| c.as_str() == s) {
            return *exact;
        }

        // Keyword containment for labels like "Child Protection" or "Crime/Police"
        const ALIASES: &[(&str, Category)] = &[
            ("child", Category::Child),
            ("kid", Category::Child),
            ("women", Category::Women),
            ("woman", Category::Women),
            ("police", Category::Police),
            ("crime", Category::Police),
            ("medical", Category::Medical),
            ("health", Category::Medical),
            ("ambulance", Category::Medical),
            ("fire", Category::Fire),
            ("electric", Category::Electricity),
            ("power", Category::Electricity),
            ("water", Category::Water),
            ("transport", Category::Transport),
            ("accident", Category::Transport),
            ("road", Category::Transport),
        ];

        ALIASES
            .iter()
            .find(|(needle, _)| s.contains(needle))
            .map(|(_, category)| *category)
            .unwrap_or(Self::General)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a classified problem
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Parse case-insensitively, `None` for unknown values
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" | "moderate" => Some(Self::Medium),
            "high" | "urgent" => Some(Self::High),
            "critical" | "emergency" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
