//! Category resolution
//!
//! An explicit ordered rule list picks exactly one category per request;
//! the first rule whose predicate holds wins. Urgency and confidence follow
//! from the chosen category and the auxiliary cue sets.

use janai_core::{Category, UrgencyLevel};

use crate::lexicon::CueSet;
use crate::matcher::Matches;

const CONFIDENCE_GENERAL: f32 = 0.5;
const CONFIDENCE_KEYWORD: f32 = 0.8;
const CONFIDENCE_CO_OCCURRENCE: f32 = 0.85;
const CONFIDENCE_ESCALATED: f32 = 0.9;

/// One precedence rule: a pure predicate tagged with its category
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub category: Category,
    predicate: fn(&Matches) -> bool,
}

impl Rule {
    pub fn applies(&self, matches: &Matches) -> bool {
        (self.predicate)(matches)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

/// Result of running the rule list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub category: Category,
    pub urgency: UrgencyLevel,
    pub confidence: f32,
    /// Name of the rule that fired
    pub rule: &'static str,
}

fn child(m: &Matches) -> bool {
    m.has(Category::Child)
}

/// Lexicon hit, or a woman/girl subject co-occurring with a harassment
/// action while no child cue is present
fn women(m: &Matches) -> bool {
    m.has(Category::Women) || women_co_occurrence(m)
}

fn women_co_occurrence(m: &Matches) -> bool {
    m.has_cue(CueSet::WomenSubject)
        && m.has_cue(CueSet::WomenAction)
        && !m.has_cue(CueSet::ChildExclusion)
}

fn police(m: &Matches) -> bool {
    m.has(Category::Police)
}

fn medical(m: &Matches) -> bool {
    m.has(Category::Medical)
}

fn fire(m: &Matches) -> bool {
    m.has(Category::Fire)
}

fn electricity(m: &Matches) -> bool {
    m.has(Category::Electricity)
}

fn water(m: &Matches) -> bool {
    m.has(Category::Water)
}

fn transport(m: &Matches) -> bool {
    m.has(Category::Transport)
}

fn always(_: &Matches) -> bool {
    true
}

const RULES: &[Rule] = &[
    Rule { name: "child", category: Category::Child, predicate: child },
    Rule { name: "women", category: Category::Women, predicate: women },
    Rule { name: "police", category: Category::Police, predicate: police },
    Rule { name: "medical", category: Category::Medical, predicate: medical },
    Rule { name: "fire", category: Category::Fire, predicate: fire },
    Rule { name: "electricity", category: Category::Electricity, predicate: electricity },
    Rule { name: "water", category: Category::Water, predicate: water },
    Rule { name: "transport", category: Category::Transport, predicate: transport },
    Rule { name: "general", category: Category::General, predicate: always },
];

/// Picks one category from a set of keyword matches
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryResolver;

impl CategoryResolver {
    pub fn new() -> Self {
        Self
    }

    /// The precedence rules, highest priority first
    pub fn rules(&self) -> &'static [Rule] {
        RULES
    }

    pub fn resolve(&self, matches: &Matches) -> Resolution {
        // The trailing general rule always applies
        let rule = RULES
            .iter()
            .find(|rule| rule.applies(matches))
            .unwrap_or(&RULES[RULES.len() - 1]);

        let urgency = Self::urgency(rule.category, matches);
        let confidence = Self::confidence(rule.category, urgency, matches);

        tracing::debug!(
            rule = rule.name,
            category = %rule.category,
            urgency = urgency.as_str(),
            "Resolved category"
        );

        Resolution {
            category: rule.category,
            urgency,
            confidence,
            rule: rule.name,
        }
    }

    /// Urgency for a resolved category
    pub fn urgency(category: Category, matches: &Matches) -> UrgencyLevel {
        match category {
            Category::Child | Category::Women | Category::Police => UrgencyLevel::High,
            Category::Fire => UrgencyLevel::Critical,
            Category::Medical if matches.has_cue(CueSet::EmergencyHealth) => {
                UrgencyLevel::Critical
            }
            Category::Transport if matches.has_cue(CueSet::TransportEmergency) => {
                UrgencyLevel::High
            }
            Category::Medical
            | Category::Electricity
            | Category::Water
            | Category::Transport
            | Category::General => UrgencyLevel::Medium,
        }
    }

    fn confidence(category: Category, urgency: UrgencyLevel, matches: &Matches) -> f32 {
        match category {
            Category::General => CONFIDENCE_GENERAL,
            Category::Women if !matches.has(Category::Women) => CONFIDENCE_CO_OCCURRENCE,
            Category::Medical if urgency == UrgencyLevel::Critical => CONFIDENCE_ESCALATED,
            Category::Transport if urgency == UrgencyLevel::High => CONFIDENCE_ESCALATED,
            Category::Fire => CONFIDENCE_ESCALATED,
            _ => CONFIDENCE_KEYWORD,
        }
    }
}
