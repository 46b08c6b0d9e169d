// ABOUTME: Network adapter: key tables, normalization, and formatting.
// ABOUTME: Marks the engine's predefined networks so hosts can hide remove commands.

use super::sealed::Sealed;
use super::{ContextValue, FormatKey, NONE_TEXT, ResourceAdapter, ResourceKind, unsupported_key};
use crate::descriptor::RawDescriptor;
use crate::diagnostics::{Diagnostics, Warning};
use crate::normalize::{CommonFields, NormalizedItem};

const ITEM_KEYS: &[FormatKey] = &[
    FormatKey::CreatedTime,
    FormatKey::Driver,
    FormatKey::NetworkId,
    FormatKey::NetworkName,
];

const GROUP_KEYS: &[FormatKey] = &[FormatKey::CreatedTime, FormatKey::Driver];

const DEFAULT_DESCRIPTION: &[FormatKey] = &[FormatKey::Driver];

/// Networks every Docker engine creates and refuses to remove.
const BUILT_IN_NETWORKS: &[&str] = &["bridge", "host", "none"];

/// Adapter for `GET /networks` listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkAdapter;

impl Sealed for NetworkAdapter {}

impl ResourceAdapter for NetworkAdapter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Networks
    }

    fn label_keys(&self) -> &'static [FormatKey] {
        ITEM_KEYS
    }

    fn default_label_key(&self) -> FormatKey {
        FormatKey::NetworkName
    }

    fn description_keys(&self) -> &'static [FormatKey] {
        ITEM_KEYS
    }

    fn default_description_keys(&self) -> &'static [FormatKey] {
        DEFAULT_DESCRIPTION
    }

    fn group_by_keys(&self) -> &'static [FormatKey] {
        GROUP_KEYS
    }

    fn normalize(
        &self,
        raw: &RawDescriptor,
        now: i64,
        diagnostics: &mut Diagnostics,
    ) -> NormalizedItem {
        let common = CommonFields::extract(raw, None, now, diagnostics);

        let display_name = match raw.name.as_deref() {
            Some(name) => name.to_string(),
            None => {
                diagnostics.warn(Warning::missing_field(&common.id, "name", &common.short_id));
                common.short_id.clone()
            }
        };

        NormalizedItem {
            id: common.id,
            short_id: common.short_id,
            display_name,
            image_ref: None,
            created_at: common.created_at,
            age: common.age,
            ports: Vec::new(),
            status: String::new(),
            state: String::new(),
            driver: raw.driver.clone(),
        }
    }

    fn format(&self, key: FormatKey, item: &NormalizedItem) -> String {
        match key {
            FormatKey::NetworkName => item.display_name().to_string(),
            FormatKey::NetworkId => item.short_id().to_string(),
            FormatKey::Driver => item.driver().unwrap_or(NONE_TEXT).to_string(),
            FormatKey::CreatedTime => item.age().label().to_string(),
            other => unsupported_key(self.kind(), other),
        }
    }

    fn context_value(&self, item: &NormalizedItem) -> ContextValue {
        if BUILT_IN_NETWORKS.contains(&item.display_name()) {
            ContextValue::BuiltInNetwork
        } else {
            ContextValue::Network
        }
    }
}
