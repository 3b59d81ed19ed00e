//! Filtering of unified model records.
//!
//! Two mutually exclusive modes per invocation:
//!
//! - Unified search: a single free-text pattern, OR'd across fields
//!   (glob on id and name, exact provider tag, substring on description).
//! - Explicit mode: field-scoped filters combined with AND semantics,
//!   all substring matches.
//!
//! Both modes preserve the relative order of surviving records.

use crate::domain::ModelRecord;
use crate::glob::glob_match;

/// Field-scoped filters for explicit AND-mode filtering.
///
/// Absent fields are vacuously true; an entirely empty filter set
/// behaves as identity.
#[derive(Debug, Clone, Default)]
pub struct FieldFilters {
    /// Case-insensitive substring match against the derived provider tag.
    pub provider: Option<String>,
    /// Case-insensitive substring match against the model ID or name.
    pub model: Option<String>,
    /// Case-insensitive substring match against the description.
    pub description: Option<String>,
}

impl FieldFilters {
    /// True when no field filter is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.provider.is_none() && self.model.is_none() && self.description.is_none()
    }

    /// True when the record satisfies every supplied filter.
    #[must_use]
    pub fn matches(&self, record: &ModelRecord) -> bool {
        if let Some(provider) = &self.provider {
            if !contains_ignore_case(record.provider(), provider) {
                return false;
            }
        }
        if let Some(model) = &self.model {
            if !contains_ignore_case(&record.id, model) && !contains_ignore_case(&record.name, model)
            {
                return false;
            }
        }
        if let Some(description) = &self.description {
            if !contains_ignore_case(&record.description, description) {
                return false;
            }
        }
        true
    }
}

/// Filter records by a single free-text pattern.
///
/// A record survives if the pattern glob-matches its ID, glob-matches
/// its name, equals its derived provider tag (case-insensitive), or is
/// a case-insensitive substring of its description. An empty pattern
/// returns the input unchanged.
#[must_use]
pub fn unified_search(records: Vec<ModelRecord>, pattern: &str) -> Vec<ModelRecord> {
    if pattern.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            glob_match(pattern, &record.id)
                || glob_match(pattern, &record.name)
                || record.provider().eq_ignore_ascii_case(pattern)
                || contains_ignore_case(&record.description, pattern)
        })
        .collect()
}

/// Filter records by explicit field filters (AND semantics).
///
/// An empty filter set returns the input unchanged.
#[must_use]
pub fn filter_by_fields(records: Vec<ModelRecord>, filters: &FieldFilters) -> Vec<ModelRecord> {
    if filters.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| filters.matches(record))
        .collect()
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ModelRecord;

    fn record(id: &str, name: &str, description: &str) -> ModelRecord {
        ModelRecord::new(id.to_string(), name.to_string(), 0, description.to_string())
    }

    fn sample() -> Vec<ModelRecord> {
        vec![
            record("openai/gpt-4.1", "GPT-4.1", "Flagship multimodal model"),
            record("anthropic/claude-3-opus", "Claude 3 Opus", "Strong reasoning"),
            record("cohere/command-r", "Command R", "Retrieval augmented generation"),
            record("standalone", "Standalone", "No provider prefix"),
        ]
    }

    #[test]
    fn test_empty_pattern_is_identity() {
        let records = sample();
        let ids: Vec<String> = records.iter().map(|r| r.id.clone()).collect();
        let filtered = unified_search(records, "");
        let filtered_ids: Vec<String> = filtered.iter().map(|r| r.id.clone()).collect();
        assert_eq!(filtered_ids, ids);
    }

    #[test]
    fn test_unified_glob_on_id() {
        let filtered = unified_search(sample(), "anthropic/*");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "anthropic/claude-3-opus");
    }

    #[test]
    fn test_unified_glob_on_name() {
        let filtered = unified_search(sample(), "*command*");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "cohere/command-r");
    }

    #[test]
    fn test_unified_exact_provider_match() {
        let filtered = unified_search(sample(), "Cohere");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "cohere/command-r");
    }

    #[test]
    fn test_unified_provider_match_is_exact_not_glob() {
        // "cohere*" is not a provider equality match and globs nothing here
        let filtered = unified_search(sample(), "coher");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_unified_description_substring() {
        let filtered = unified_search(sample(), "reasoning");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "anthropic/claude-3-opus");
    }

    #[test]
    fn test_unified_preserves_relative_order() {
        let filtered = unified_search(sample(), "*o*");
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        // Every id contains an 'o'; order must match the input
        assert_eq!(
            ids,
            vec![
                "openai/gpt-4.1",
                "anthropic/claude-3-opus",
                "cohere/command-r",
                "standalone",
            ]
        );
    }

    #[test]
    fn test_empty_field_filters_are_identity() {
        let filters = FieldFilters::default();
        assert!(filters.is_empty());
        let filtered = filter_by_fields(sample(), &filters);
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_field_filter_provider_substring() {
        let filters = FieldFilters {
            provider: Some("anthro".to_string()),
            ..Default::default()
        };
        let filtered = filter_by_fields(sample(), &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "anthropic/claude-3-opus");
    }

    #[test]
    fn test_field_filter_model_matches_id_or_name() {
        let by_id = filter_by_fields(
            sample(),
            &FieldFilters {
                model: Some("gpt-4".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_id.len(), 1);

        let by_name = filter_by_fields(
            sample(),
            &FieldFilters {
                model: Some("claude 3".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "anthropic/claude-3-opus");
    }

    #[test]
    fn test_field_filters_and_semantics() {
        // Provider matches but model does not: record is excluded
        let filters = FieldFilters {
            provider: Some("openai".to_string()),
            model: Some("claude".to_string()),
            ..Default::default()
        };
        let filtered = filter_by_fields(sample(), &filters);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_field_filter_description() {
        let filters = FieldFilters {
            description: Some("RETRIEVAL".to_string()),
            ..Default::default()
        };
        let filtered = filter_by_fields(sample(), &filters);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "cohere/command-r");
    }
}
