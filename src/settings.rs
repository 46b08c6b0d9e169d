// ABOUTME: Validation of loosely-typed tree settings against a resource adapter.
// ABOUTME: Total: every invalid or missing field falls back to the adapter's default.

use crate::diagnostics::{Diagnostics, Warning};
use crate::resource::{FormatKey, ResourceAdapter, SortKey};
use serde::Serialize;
use serde_json::Value;

pub const LABEL_FIELD: &str = "label";
pub const DESCRIPTION_FIELD: &str = "description";
pub const GROUP_BY_FIELD: &str = "groupBy";
pub const SORT_BY_FIELD: &str = "sortBy";

/// Spelling of an explicit "do not group" choice.
const NO_GROUPING: &str = "None";

/// Fully resolved settings; every key is valid for the adapter they were
/// validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeSettings {
    pub label_key: FormatKey,
    /// Joined with `" - "`; empty means the leaves have no description.
    pub description_keys: Vec<FormatKey>,
    pub group_by_key: Option<FormatKey>,
    pub sort_by_key: SortKey,
}

impl TreeSettings {
    pub fn defaults(adapter: &dyn ResourceAdapter) -> Self {
        Self {
            label_key: adapter.default_label_key(),
            description_keys: adapter.default_description_keys().to_vec(),
            group_by_key: None,
            sort_by_key: adapter.default_sort_by_key(),
        }
    }
}

/// Resolve raw settings for one resource kind.
///
/// Each field is checked on its own, so one bad field never discards the
/// others. `null` or a missing field silently takes the default; anything
/// else that is unusable is reported to `diagnostics`.
pub fn validate_settings(
    adapter: &dyn ResourceAdapter,
    raw: &Value,
    diagnostics: &mut Diagnostics,
) -> TreeSettings {
    let mut settings = TreeSettings::defaults(adapter);

    let fields = match raw {
        Value::Object(fields) => fields,
        Value::Null => return settings,
        other => {
            diagnostics.warn(Warning::invalid_setting(
                adapter.kind().as_str(),
                format!("expected a mapping, got {}", type_name(other)),
            ));
            return settings;
        }
    };

    if let Some(key) = fields
        .get(LABEL_FIELD)
        .and_then(|v| one_of(v, adapter.label_keys(), LABEL_FIELD, diagnostics))
    {
        settings.label_key = key;
    }

    if let Some(keys) = fields
        .get(DESCRIPTION_FIELD)
        .and_then(|v| description_keys(v, adapter, diagnostics))
    {
        settings.description_keys = keys;
    }

    settings.group_by_key = match fields.get(GROUP_BY_FIELD) {
        Some(Value::String(s)) if s == NO_GROUPING => None,
        Some(v) => one_of(v, adapter.group_by_keys(), GROUP_BY_FIELD, diagnostics),
        None => None,
    };

    if let Some(key) = fields
        .get(SORT_BY_FIELD)
        .and_then(|v| sort_key(v, adapter, diagnostics))
    {
        settings.sort_by_key = key;
    }

    tracing::debug!(kind = %adapter.kind(), ?settings, "resolved tree settings");
    settings
}

/// A string naming one of `valid`; `None` for anything else.
fn one_of(
    value: &Value,
    valid: &[FormatKey],
    field: &str,
    diagnostics: &mut Diagnostics,
) -> Option<FormatKey> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let key = valid.iter().copied().find(|k| k.as_str() == s);
            if key.is_none() {
                diagnostics.warn(Warning::invalid_setting(field, format!("unknown key \"{s}\"")));
            }
            key
        }
        other => {
            diagnostics.warn(Warning::invalid_setting(
                field,
                format!("expected a string, got {}", type_name(other)),
            ));
            None
        }
    }
}

/// An explicitly empty list is kept (no description); a list whose entries
/// are all unknown, or a value that is not a list, yields `None` so the
/// defaults stay in place.
fn description_keys(
    value: &Value,
    adapter: &dyn ResourceAdapter,
    diagnostics: &mut Diagnostics,
) -> Option<Vec<FormatKey>> {
    let entries = match value {
        Value::Null => return None,
        Value::Array(entries) => entries,
        other => {
            diagnostics.warn(Warning::invalid_setting(
                DESCRIPTION_FIELD,
                format!("expected a list, got {}", type_name(other)),
            ));
            return None;
        }
    };

    if entries.is_empty() {
        return Some(Vec::new());
    }

    let keys: Vec<FormatKey> = entries
        .iter()
        .filter_map(|entry| one_of(entry, adapter.description_keys(), DESCRIPTION_FIELD, diagnostics))
        .collect();

    if keys.is_empty() { None } else { Some(keys) }
}

fn sort_key(
    value: &Value,
    adapter: &dyn ResourceAdapter,
    diagnostics: &mut Diagnostics,
) -> Option<SortKey> {
    match value {
        Value::Null => None,
        Value::String(s) => {
            let key = s
                .parse::<SortKey>()
                .ok()
                .filter(|k| adapter.sort_by_keys().contains(k));
            if key.is_none() {
                diagnostics.warn(Warning::invalid_setting(SORT_BY_FIELD, format!("unknown key \"{s}\"")));
            }
            key
        }
        other => {
            diagnostics.warn(Warning::invalid_setting(
                SORT_BY_FIELD,
                format!("expected a string, got {}", type_name(other)),
            ));
            None
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
