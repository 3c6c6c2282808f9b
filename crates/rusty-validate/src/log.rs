//! Last-failure log kept per rule
//!
//! The log is diagnostics only. It never feeds back into a validation outcome.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// The rules that write to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rule {
    Email,
    Mobile,
    Password,
    String,
}

impl Rule {
    /// Key used for this rule in [`ValidationLog::snapshot`]
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Email => "email",
            Rule::Mobile => "mobile",
            Rule::Password => "password",
            Rule::String => "string",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of rule to the reason its most recent call failed
#[derive(Debug, Default)]
pub struct ValidationLog {
    entries: Mutex<BTreeMap<Rule, String>>,
}

impl ValidationLog {
    pub fn new() -> Self {
        Self::default()
    }

    // Last writer wins; a panic elsewhere must not disable diagnostics.
    fn entries(&self) -> MutexGuard<'_, BTreeMap<Rule, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record a failure reason for `rule`, replacing any previous one
    pub fn record(&self, rule: Rule, reason: impl Into<String>) {
        let reason = reason.into();
        tracing::debug!(rule = %rule, reason = %reason, "validation failed");
        self.entries().insert(rule, reason);
    }

    /// Drop the entry for `rule` after it passed
    pub fn forget(&self, rule: Rule) {
        self.entries().remove(&rule);
    }

    /// Reason of the last failure of `rule`, if any
    pub fn get(&self, rule: Rule) -> Option<String> {
        self.entries().get(&rule).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Copy of the log keyed by rule name
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries()
            .iter()
            .map(|(rule, reason)| (rule.as_str().to_string(), reason.clone()))
            .collect()
    }

    /// Remove every entry
    pub fn clear(&self) {
        tracing::trace!("validation log cleared");
        self.entries().clear();
    }
}
