//! # Tool Catalog
//!
//! The read-only set of rentable tools, keyed by code.
//!
//! A catalog is built once (at startup, from the shipped list or from
//! configuration) and never mutated afterwards, so it can be shared across
//! threads without locking.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{ChargeSchedule, ToolPolicy};
use crate::validation::{validate_tool_policy, ValidationResult};

/// Immutable mapping from tool code to policy.
///
/// Codes are matched case-insensitively: keys are stored upper-cased and
/// lookups are normalized the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolPolicy>,
}

impl ToolCatalog {
    /// The tools available in the shop.
    ///
    /// | Code | Type       | Brand  | Daily | Weekday | Weekend | Holiday |
    /// |------|------------|--------|-------|---------|---------|---------|
    /// | CHNS | Chainsaw   | Stihl  | 1.49  | yes     | no      | yes     |
    /// | LADW | Ladder     | Werner | 1.99  | yes     | yes     | no      |
    /// | JAKD | Jackhammer | DeWalt | 2.99  | yes     | no      | no      |
    /// | JAKR | Jackhammer | Ridgid | 2.99  | yes     | no      | no      |
    pub fn standard() -> Self {
        let tools = [
            ToolPolicy::new(
                "CHNS",
                "Chainsaw",
                "Stihl",
                Money::from_cents(149),
                ChargeSchedule::new(true, false, true),
            ),
            ToolPolicy::new(
                "LADW",
                "Ladder",
                "Werner",
                Money::from_cents(199),
                ChargeSchedule::new(true, true, false),
            ),
            ToolPolicy::new(
                "JAKD",
                "Jackhammer",
                "DeWalt",
                Money::from_cents(299),
                ChargeSchedule::new(true, false, false),
            ),
            ToolPolicy::new(
                "JAKR",
                "Jackhammer",
                "Ridgid",
                Money::from_cents(299),
                ChargeSchedule::new(true, false, false),
            ),
        ];

        ToolCatalog {
            tools: tools
                .into_iter()
                .map(|tool| (normalize_code(tool.code()), tool))
                .collect(),
        }
    }

    /// Builds a catalog from externally supplied entries.
    ///
    /// Every entry is validated, and two entries whose codes differ only in
    /// case are rejected as duplicates.
    pub fn from_policies<I>(policies: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = ToolPolicy>,
    {
        let mut tools = BTreeMap::new();

        for policy in policies {
            validate_tool_policy(&policy)?;

            let key = normalize_code(policy.code());
            if tools.contains_key(&key) {
                return Err(ValidationError::Duplicate {
                    field: "code".to_string(),
                    value: policy.code().to_string(),
                });
            }
            tools.insert(key, policy);
        }

        debug!(count = tools.len(), "Tool catalog built");
        Ok(ToolCatalog { tools })
    }

    /// Finds a tool by code, ignoring case and surrounding whitespace.
    pub fn find(&self, code: &str) -> Option<&ToolPolicy> {
        self.tools.get(&normalize_code(code))
    }

    /// All tools, ordered by code.
    pub fn iter(&self) -> impl Iterator<Item = &ToolPolicy> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        ToolCatalog::standard()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DayKind;

    #[test]
    fn test_standard_catalog() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.len(), 4);

        let ladder = catalog.find("LADW").unwrap();
        assert_eq!(ladder.tool_type(), "Ladder");
        assert_eq!(ladder.brand(), "Werner");
        assert_eq!(ladder.daily_charge(), Money::from_cents(199));
        assert!(ladder.charges_on(DayKind::Weekend));
        assert!(!ladder.charges_on(DayKind::Holiday));

        let codes: Vec<_> = catalog.iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["CHNS", "JAKD", "JAKR", "LADW"]);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = ToolCatalog::standard();
        assert_eq!(catalog.find("jakr").unwrap().brand(), "Ridgid");
        assert_eq!(catalog.find("ChNs").unwrap().brand(), "Stihl");
        assert_eq!(catalog.find(" ladw ").unwrap().brand(), "Werner");
        assert!(catalog.find("NOPE").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_from_policies() {
        let catalog = ToolCatalog::from_policies(vec![ToolPolicy::new(
            "drll",
            "Drill",
            "Makita",
            Money::from_cents(350),
            ChargeSchedule::new(true, true, true),
        )])
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find("DRLL").unwrap().code(), "drll");
    }

    #[test]
    fn test_from_policies_rejects_duplicates() {
        let drill = |code: &str| {
            ToolPolicy::new(
                code,
                "Drill",
                "Makita",
                Money::from_cents(350),
                ChargeSchedule::default(),
            )
        };

        let err = ToolCatalog::from_policies(vec![drill("DRLL"), drill("drll")]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "code".to_string(),
                value: "drll".to_string(),
            }
        );
    }

    #[test]
    fn test_from_policies_rejects_invalid_entries() {
        let negative = ToolPolicy::new(
            "DRLL",
            "Drill",
            "Makita",
            Money::from_cents(-100),
            ChargeSchedule::default(),
        );
        assert!(ToolCatalog::from_policies(vec![negative]).is_err());

        let oversized = ToolPolicy::new(
            "BIG",
            "Crane",
            "Liebherr",
            Money::from_cents(100_000_000_001),
            ChargeSchedule::new(true, true, true),
        );
        assert!(matches!(
            ToolCatalog::from_policies(vec![oversized]),
            Err(ValidationError::TooLarge { .. })
        ));
    }
}
