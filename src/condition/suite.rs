//! Condition suite - canonical ordering of condition directories

use super::analyzer::{analyze_condition, ConditionSummary};
use crate::config::AnalysisConfig;
use crate::discovery::list_subdirs;
use crate::{Error, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::path::Path;
use tracing::{info, warn};

/// Canonical condition labels, in reporting order
/// (two conditions `a`/`b` crossed with repetitions `1`/`2`)
pub const CONDITION_KEYS: [&str; 4] = ["a1", "b1", "a2", "b2"];

/// Position of `name` in [`CONDITION_KEYS`]
///
/// # Errors
/// Returns [`Error::UnknownCondition`] if `name` is not a canonical label
pub fn condition_index(name: &str) -> Result<usize> {
    CONDITION_KEYS
        .iter()
        .position(|key| *key == name)
        .ok_or_else(|| Error::UnknownCondition {
            name: name.to_string(),
            expected: &CONDITION_KEYS,
        })
}

/// Ordered mapping from condition label to summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionSuite {
    entries: Vec<(&'static str, ConditionSummary)>,
}

impl ConditionSuite {
    /// Build a suite from `(label, summary)` pairs, reordered canonically
    ///
    /// # Errors
    /// Returns [`Error::UnknownCondition`] for a non-canonical label and
    /// [`Error::InvalidInput`] for a repeated one
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, ConditionSummary)>,
        S: AsRef<str>,
    {
        let mut indexed = Vec::new();
        for (label, summary) in entries {
            let idx = condition_index(label.as_ref())?;
            if indexed.iter().any(|(i, _)| *i == idx) {
                return Err(Error::InvalidInput(format!(
                    "condition '{}' listed twice",
                    label.as_ref()
                )));
            }
            indexed.push((idx, summary));
        }
        indexed.sort_by_key(|(idx, _)| *idx);

        Ok(Self {
            entries: indexed
                .into_iter()
                .map(|(idx, summary)| (CONDITION_KEYS[idx], summary))
                .collect(),
        })
    }

    /// Number of conditions present
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no condition was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Summary for `label`, if present
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&ConditionSummary> {
        self.entries
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, summary)| summary)
    }

    /// Labels in canonical order
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Iterate `(label, summary)` in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ConditionSummary)> + '_ {
        self.entries.iter().map(|(key, summary)| (*key, summary))
    }
}

impl Serialize for ConditionSuite {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, summary) in &self.entries {
            map.serialize_entry(key, summary)?;
        }
        map.end()
    }
}

impl fmt::Display for ConditionSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<9} {:>7} {:>14} {:>11} {:>16} {:>7} {:>11}",
            "condition", "trials", "mean_of_means", "total_comm", "mean_commissions", "lapses", "mean_lapses"
        )?;
        for (key, s) in self.iter() {
            writeln!(
                f,
                "{:<9} {:>7} {:>14.3} {:>11} {:>16.3} {:>7} {:>11.3}",
                key,
                s.trial_count,
                s.mean_of_means,
                s.total_commissions,
                s.mean_commissions,
                s.total_lapses,
                s.mean_lapses
            )?;
        }
        Ok(())
    }
}

/// Discover, order and analyze the condition directories under `root`
///
/// Every subdirectory name is checked against [`CONDITION_KEYS`] before any
/// trial file is read, so an unknown name fails without partial output.
///
/// # Errors
/// Returns [`Error::UnknownCondition`] for a non-canonical directory, or any
/// IO/parse error raised while analyzing a condition
pub fn build_suite<P: AsRef<Path>>(root: P, config: &AnalysisConfig) -> Result<ConditionSuite> {
    let root = root.as_ref();
    let mut conditions = list_subdirs(root)?
        .into_iter()
        .map(|name| condition_index(&name).map(|idx| (idx, name)))
        .collect::<Result<Vec<_>>>()?;
    conditions.sort_by_key(|(idx, _)| *idx);

    if conditions.len() < CONDITION_KEYS.len() {
        warn!(
            root = %root.display(),
            found = conditions.len(),
            expected = CONDITION_KEYS.len(),
            "missing condition directories"
        );
    }

    let mut entries = Vec::with_capacity(conditions.len());
    for (idx, name) in conditions {
        let summary = analyze_condition(root.join(&name), config)?;
        entries.push((CONDITION_KEYS[idx], summary));
    }

    info!(root = %root.display(), conditions = entries.len(), "suite built");
    Ok(ConditionSuite { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(mean: f64) -> ConditionSummary {
        ConditionSummary {
            mean_of_means: mean,
            trial_count: 1,
            ..ConditionSummary::default()
        }
    }

    #[test]
    fn test_condition_index() {
        assert_eq!(condition_index("a1").unwrap(), 0);
        assert_eq!(condition_index("b2").unwrap(), 3);
        let err = condition_index("c1").unwrap_err();
        assert!(err.to_string().contains("not found in list"));
    }

    #[test]
    fn test_from_entries_reorders_by_name() {
        let suite = ConditionSuite::from_entries(vec![
            ("b2", summary(4.0)),
            ("a1", summary(1.0)),
            ("a2", summary(3.0)),
        ])
        .unwrap();
        assert_eq!(suite.labels(), vec!["a1", "a2", "b2"]);
        assert_eq!(suite.get("b2").unwrap().mean_of_means, 4.0);
        assert!(suite.get("b1").is_none());
    }

    #[test]
    fn test_from_entries_rejects_duplicates() {
        let result = ConditionSuite::from_entries(vec![("a1", summary(1.0)), ("a1", summary(2.0))]);
        assert!(result.is_err());
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let suite = ConditionSuite::from_entries(vec![("b1", summary(2.0)), ("a1", summary(1.0))])
            .unwrap();
        let json = serde_json::to_string(&suite).unwrap();
        let a1 = json.find("\"a1\"").unwrap();
        let b1 = json.find("\"b1\"").unwrap();
        assert!(a1 < b1);
    }

    #[test]
    fn test_display_lists_each_condition() {
        let suite = ConditionSuite::from_entries(vec![("a1", summary(300.0))]).unwrap();
        let text = suite.to_string();
        assert!(text.starts_with("condition"));
        assert!(text.contains("a1"));
        assert!(text.contains("300.000"));
    }
}
