//! Helpline assembly
//!
//! Merges national, remote-suggested and state records into one ordered,
//! deduplicated and capped list that always carries 112.

use std::collections::HashSet;

use janai_config::constants::helplines::{DEFAULT_CAP, MAX_CAP, MIN_CAP};
use janai_core::{Category, HelplineRecord, ALL_INDIA};

use crate::directory;

#[derive(Debug, Clone, Copy)]
pub struct HelplineAssembler {
    cap: usize,
}

impl Default for HelplineAssembler {
    fn default() -> Self {
        Self { cap: DEFAULT_CAP }
    }
}

impl HelplineAssembler {
    /// Create an assembler; the cap is clamped to the supported range
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.clamp(MIN_CAP, MAX_CAP),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Ordered helplines for a resolved category and state
    ///
    /// Order: national category list, remote suggestions, state records of
    /// the category, national baseline, remaining state records. State
    /// records are only used when `state` is a specific state.
    pub fn assemble(
        &self,
        category: Category,
        state: &str,
        remote: &[HelplineRecord],
    ) -> Vec<HelplineRecord> {
        let state_records = if state == ALL_INDIA {
            &[][..]
        } else {
            directory::state_records(state)
        };

        let ordered = directory::category_priority(category)
            .iter()
            .chain(remote.iter().filter(|r| !r.number.trim().is_empty()))
            .chain(state_records.iter().filter(|r| r.category == category))
            .chain(directory::national_baseline())
            .chain(state_records.iter().filter(|r| r.category != category));

        let mut seen = HashSet::new();
        let mut helplines: Vec<HelplineRecord> = ordered
            .filter(|record| seen.insert(record.number.trim().to_string()))
            .take(self.cap)
            .cloned()
            .collect();

        if !has_national_emergency(&helplines) {
            if let Some(emergency) = directory::national_baseline()
                .iter()
                .find(|r| r.is_national_emergency())
            {
                if helplines.len() >= self.cap {
                    helplines.pop();
                }
                helplines.push(emergency.clone());
            }
        }

        tracing::debug!(
            category = %category,
            state = %state,
            remote = remote.len(),
            count = helplines.len(),
            "Assembled helplines"
        );

        helplines
    }
}

/// Whether a list carries the all-emergencies number
pub fn has_national_emergency(helplines: &[HelplineRecord]) -> bool {
    helplines.iter().any(HelplineRecord::is_national_emergency)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(helplines: &[HelplineRecord]) -> Vec<&str> {
        helplines.iter().map(|h| h.number.as_str()).collect()
    }

    #[test]
    fn test_national_only() {
        let helplines = HelplineAssembler::default().assemble(Category::Fire, ALL_INDIA, &[]);
        assert_eq!(
            numbers(&helplines),
            vec!["101", "112", "100", "108", "102", "1091", "1098", "1930"]
        );
        assert!(helplines.iter().all(|h| h.scope.is_national()));
    }

    #[test]
    fn test_state_category_records_follow_national_list() {
        let helplines = HelplineAssembler::default().assemble(Category::Water, "Telangana", &[]);
        assert_eq!(
            numbers(&helplines),
            vec!["1916", "1800-11-3155", "112", "155313", "040-23300114", "9281097233", "100", "108"]
        );
    }

    #[test]
    fn test_remote_records_come_second() {
        let remote = vec![
            HelplineRecord::national("1800-180-1551", "Kisan Call Centre", Category::General, ""),
            HelplineRecord::national("1098", "Child Helpline", Category::Child, ""),
            HelplineRecord::national("  ", "Blank", Category::General, ""),
        ];
        let helplines = HelplineAssembler::default().assemble(Category::Child, ALL_INDIA, &remote);
        assert_eq!(numbers(&helplines)[..3], ["1098", "112", "1800-180-1551"]);
        assert!(helplines.iter().all(|h| !h.number.trim().is_empty()));
    }

    #[test]
    fn test_dedup_and_cap() {
        let assembler = HelplineAssembler::new(6);
        let helplines = assembler.assemble(Category::Women, "Telangana", &[]);
        assert_eq!(helplines.len(), 6);
        let unique: HashSet<_> = helplines.iter().map(|h| &h.number).collect();
        assert_eq!(unique.len(), helplines.len());
    }

    #[test]
    fn test_112_survives_truncation() {
        let remote: Vec<_> = (0..20)
            .map(|i| HelplineRecord::national(format!("9000{i}"), "Extra", Category::General, ""))
            .collect();
        let helplines = HelplineAssembler::new(6).assemble(Category::Transport, ALL_INDIA, &remote);
        assert_eq!(helplines.len(), 6);
        assert!(has_national_emergency(&helplines));
    }

    #[test]
    fn test_cap_is_clamped() {
        assert_eq!(HelplineAssembler::new(1).cap(), MIN_CAP);
        assert_eq!(HelplineAssembler::new(100).cap(), MAX_CAP);
    }
}
