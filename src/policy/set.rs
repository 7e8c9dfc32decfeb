use indexmap::IndexMap;

use super::model::Policy;

/// Policies of one virtual domain keyed by id, in configuration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolicySet {
    policies: IndexMap<String, Policy>,
}

impl PolicySet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a policy under its id
    ///
    /// A policy with the same id is replaced in place and returned, so the
    /// replacement keeps the position of the first occurrence.
    pub fn insert(&mut self, policy: Policy) -> Option<Policy> {
        self.policies.insert(policy.id().to_string(), policy)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.policies.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Policy> {
        self.policies.get(id)
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Policy> {
        self.policies.values()
    }

    /// Exact lookup by policy id, yielding zero or one policy
    pub fn by_id(&self, id: &str) -> Vec<&Policy> {
        self.get(id).into_iter().collect()
    }

    /// Policies whose source and destination zones match, ignoring case
    pub fn by_zone_pair(&self, from_zone: &str, to_zone: &str) -> Vec<&Policy> {
        let from_zone = from_zone.to_lowercase();
        let to_zone = to_zone.to_lowercase();

        self.iter()
            .filter(|policy| {
                policy.source_zone.to_lowercase() == from_zone
                    && policy.dest_zone.to_lowercase() == to_zone
            })
            .collect()
    }
}
