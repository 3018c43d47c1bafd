//! Persistence adapter: the issue collection and theme flag as JSON text.
//!
//! Reads never fail. An absent, unreadable, or corrupt entry loads as the
//! empty default (no issues, light theme) and is logged.

use std::collections::HashSet;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::model::Issue;

/// Key holding the JSON array of issues.
pub const ISSUES_KEY: &str = "civicIssues";

/// Key holding the bare JSON boolean theme flag.
pub const THEME_KEY: &str = "darkMode";

/// Typed access to the two durable entries.
#[derive(Debug)]
pub struct Persistence<S> {
    backend: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub(crate) const fn backend(&self) -> &S {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Load the issue collection in stored order.
    ///
    /// An entry that is not a JSON array loads as empty. Inside the array,
    /// records that do not parse and records repeating an earlier `id` are
    /// skipped.
    #[must_use]
    pub fn load_issues(&self) -> Vec<Issue> {
        let Some(text) = self.read(ISSUES_KEY) else {
            return Vec::new();
        };

        let records: Vec<serde_json::Value> = match serde_json::from_str(&text) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key = ISSUES_KEY, error = %e, "corrupt issue collection, starting empty");
                return Vec::new();
            }
        };

        let issues: Vec<Issue> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(issue) => Some(issue),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed issue record");
                    None
                }
            })
            .collect();

        let mut seen = HashSet::with_capacity(issues.len());
        let total = issues.len();
        let unique: Vec<Issue> = issues.into_iter().filter(|i| seen.insert(i.id)).collect();
        if unique.len() != total {
            tracing::warn!(
                dropped = total - unique.len(),
                "dropped issues with duplicate ids"
            );
        }

        tracing::debug!(count = unique.len(), "loaded issues");
        unique
    }

    /// Write the full collection as one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub fn save_issues(&mut self, issues: &[Issue]) -> Result<()> {
        let json = serde_json::to_string(issues)?;
        self.backend.set(ISSUES_KEY, &json)?;
        tracing::debug!(count = issues.len(), "saved issues");
        Ok(())
    }

    /// Load the dark-mode flag, `false` when absent or unreadable.
    #[must_use]
    pub fn load_theme(&self) -> bool {
        let Some(text) = self.read(THEME_KEY) else {
            return false;
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!(key = THEME_KEY, error = %e, "corrupt theme flag, using light theme");
            false
        })
    }

    /// Persist the dark-mode flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_theme(&mut self, dark: bool) -> Result<()> {
        let json = serde_json::to_string(&dark)?;
        self.backend.set(THEME_KEY, &json)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read entry, using default");
                None
            }
        }
    }
}
