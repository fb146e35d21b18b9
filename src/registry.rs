//! Rule registry
//!
//! Owns the instantiated rule set and validates it at construction. Callers
//! hold a registry and pass it to the runner explicitly; there is no global.

use crate::rule::{Rule, RuleId, RuleInfo};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate rule id: {0}")]
    DuplicateRuleId(RuleId),
}

/// The validated rule set, split into exclusion rules and everything else.
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
    index: HashMap<RuleId, usize>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl RuleRegistry {
    /// Build the registry from the shipped rule library.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_rules(crate::rules::all())
    }

    /// Build a registry over an explicit rule set. Tests use this to run
    /// against a controlled subset.
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Result<Self, RegistryError> {
        let mut index = HashMap::with_capacity(rules.len());
        for (i, rule) in rules.iter().enumerate() {
            let id = rule.info().id;
            if index.insert(id, i).is_some() {
                return Err(RegistryError::DuplicateRuleId(id));
            }
        }
        log::info!("rule registry loaded with {} rules", rules.len());
        Ok(Self { rules, index })
    }

    pub fn all(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Rules that exclude an element's subtree from the main scan pass.
    pub fn exclusion_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules
            .iter()
            .filter(|r| r.info().exclusionary)
            .map(|r| r.as_ref())
    }

    /// Rules evaluated in the main scan pass.
    pub fn included_rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules
            .iter()
            .filter(|r| !r.info().exclusionary)
            .map(|r| r.as_ref())
    }

    pub fn get(&self, id: RuleId) -> Option<&dyn Rule> {
        self.index.get(&id).map(|&i| self.rules[i].as_ref())
    }

    pub fn info(&self, id: RuleId) -> Option<&RuleInfo> {
        self.get(id).map(|r| r.info())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
