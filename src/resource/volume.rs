// ABOUTME: Volume adapter: key tables, normalization, and formatting.
// ABOUTME: Volumes are identified by name; the Engine API gives them no separate id.

use super::sealed::Sealed;
use super::{ContextValue, FormatKey, NONE_TEXT, ResourceAdapter, ResourceKind, unsupported_key};
use crate::descriptor::RawDescriptor;
use crate::diagnostics::{Diagnostics, Warning};
use crate::normalize::{CommonFields, NormalizedItem};

const ITEM_KEYS: &[FormatKey] = &[
    FormatKey::CreatedTime,
    FormatKey::Driver,
    FormatKey::VolumeName,
];

const GROUP_KEYS: &[FormatKey] = &[FormatKey::CreatedTime, FormatKey::Driver];

const DEFAULT_DESCRIPTION: &[FormatKey] = &[FormatKey::CreatedTime];

/// Adapter for `GET /volumes` listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct VolumeAdapter;

impl Sealed for VolumeAdapter {}

impl ResourceAdapter for VolumeAdapter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Volumes
    }

    fn label_keys(&self) -> &'static [FormatKey] {
        ITEM_KEYS
    }

    fn default_label_key(&self) -> FormatKey {
        FormatKey::VolumeName
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
        let common = CommonFields::extract(raw, raw.name.as_deref(), now, diagnostics);

        let display_name = match raw.name.as_deref() {
            Some(name) => name.to_string(),
            None => {
                diagnostics.warn(Warning::missing_field(&common.id, "name", NONE_TEXT));
                NONE_TEXT.to_string()
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
            FormatKey::VolumeName => item.display_name().to_string(),
            FormatKey::Driver => item.driver().unwrap_or(NONE_TEXT).to_string(),
            FormatKey::CreatedTime => item.age().label().to_string(),
            other => unsupported_key(self.kind(), other),
        }
    }

    fn context_value(&self, _item: &NormalizedItem) -> ContextValue {
        ContextValue::Volume
    }
}
