// ABOUTME: Container adapter: key tables, normalization, and formatting.
// ABOUTME: Default view labels containers by image and describes them by name and status.

use super::sealed::Sealed;
use super::{
    ContextValue, FormatKey, NONE_TEXT, ResourceAdapter, ResourceKind, format_image_key,
    format_ports, unsupported_key,
};
use crate::descriptor::RawDescriptor;
use crate::diagnostics::{Diagnostics, Warning};
use crate::normalize::{CommonFields, NormalizedItem, PortBinding, strip_name};
use crate::types::ImageRef;

const ITEM_KEYS: &[FormatKey] = &[
    FormatKey::ContainerId,
    FormatKey::ContainerName,
    FormatKey::CreatedTime,
    FormatKey::FullTag,
    FormatKey::Ports,
    FormatKey::Registry,
    FormatKey::Repository,
    FormatKey::RepositoryNameAndTag,
    FormatKey::State,
    FormatKey::Status,
    FormatKey::Tag,
];

const GROUP_KEYS: &[FormatKey] = &[
    FormatKey::CreatedTime,
    FormatKey::FullTag,
    FormatKey::Ports,
    FormatKey::Registry,
    FormatKey::Repository,
    FormatKey::RepositoryNameAndTag,
    FormatKey::State,
    FormatKey::Status,
    FormatKey::Tag,
];

const DEFAULT_DESCRIPTION: &[FormatKey] = &[FormatKey::ContainerName, FormatKey::Status];

/// Adapter for `GET /containers/json` listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerAdapter;

impl Sealed for ContainerAdapter {}

impl ResourceAdapter for ContainerAdapter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Containers
    }

    fn label_keys(&self) -> &'static [FormatKey] {
        ITEM_KEYS
    }

    fn default_label_key(&self) -> FormatKey {
        FormatKey::RepositoryNameAndTag
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

        let display_name = match raw.names.first() {
            Some(name) => strip_name(name).to_string(),
            None => {
                diagnostics.warn(Warning::missing_field(&common.id, "name", &common.short_id));
                common.short_id.clone()
            }
        };

        let image_ref = match raw.image.as_deref() {
            Some(image) => ImageRef::parse(image),
            None => {
                diagnostics.warn(Warning::missing_field(&common.id, "image", NONE_TEXT));
                ImageRef::dangling()
            }
        };

        let ports = raw
            .ports
            .iter()
            .filter_map(|port| {
                let binding = PortBinding::from_raw(port);
                if binding.is_none() {
                    diagnostics.warn(Warning::skipped_port(&common.id));
                }
                binding
            })
            .collect();

        NormalizedItem {
            id: common.id,
            short_id: common.short_id,
            display_name,
            image_ref: Some(image_ref),
            created_at: common.created_at,
            age: common.age,
            ports,
            status: raw.status.clone().unwrap_or_default(),
            state: raw.state.clone().unwrap_or_default(),
            driver: None,
        }
    }

    fn format(&self, key: FormatKey, item: &NormalizedItem) -> String {
        match key {
            FormatKey::ContainerId => item.short_id().to_string(),
            FormatKey::ContainerName => item.display_name().to_string(),
            FormatKey::CreatedTime => item.age().label().to_string(),
            FormatKey::Ports => format_ports(item),
            FormatKey::State => item.state().to_string(),
            FormatKey::Status => item.status().to_string(),
            FormatKey::FullTag
            | FormatKey::Registry
            | FormatKey::Repository
            | FormatKey::RepositoryNameAndTag
            | FormatKey::Tag => format_image_key(self.kind(), item.image_ref(), key),
            other => unsupported_key(self.kind(), other),
        }
    }

    fn context_value(&self, item: &NormalizedItem) -> ContextValue {
        match item.state().to_ascii_lowercase().as_str() {
            "running" => ContextValue::RunningContainer,
            "paused" => ContextValue::PausedContainer,
            _ => ContextValue::StoppedContainer,
        }
    }
}
