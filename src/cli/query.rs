use crate::policy::{Policy, PolicySet};

/// Tables requested by the positional selectors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    /// Set when the first selector is all digits
    pub policy_id: Option<String>,
    /// Set when two selectors are given
    pub zone_pair: Option<(String, String)>,
}

impl Query {
    /// Interpret the selectors following the vdom argument
    ///
    /// Both selections may be active at once, e.g. `10 20` looks up policy
    /// `10` and also filters for zones `10` → `20`.
    pub fn from_selectors(selectors: &[String]) -> Self {
        let policy_id = selectors
            .first()
            .filter(|first| !first.is_empty() && first.chars().all(|c| c.is_ascii_digit()))
            .cloned();

        let zone_pair = match selectors {
            [from_zone, to_zone] => Some((from_zone.clone(), to_zone.clone())),
            _ => None,
        };

        Self {
            policy_id,
            zone_pair,
        }
    }

    /// Selected policies, one list per requested table
    pub fn select<'a>(&self, policies: &'a PolicySet) -> Vec<Vec<&'a Policy>> {
        let mut tables = Vec::new();
        if let Some(id) = &self.policy_id {
            tables.push(policies.by_id(id));
        }
        if let Some((from_zone, to_zone)) = &self.zone_pair {
            tables.push(policies.by_zone_pair(from_zone, to_zone));
        }
        tables
    }
}
