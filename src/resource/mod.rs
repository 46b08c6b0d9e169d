// ABOUTME: Resource adapters: one key table and formatter per resource kind.
// ABOUTME: Defines ResourceKind, ContextValue, and the ResourceAdapter trait.

mod container;
mod image;
mod keys;
mod network;
pub(crate) mod sealed;
mod volume;

pub use container::ContainerAdapter;
pub use image::ImageAdapter;
pub use keys::{FormatKey, ParseKeyError, SortKey};
pub use network::NetworkAdapter;
pub use volume::VolumeAdapter;

use crate::descriptor::RawDescriptor;
use crate::diagnostics::Diagnostics;
use crate::normalize::NormalizedItem;
use crate::types::ImageRef;
use serde::Serialize;
use sealed::Sealed;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text shown for a value a descriptor does not have.
pub const NONE_TEXT: &str = "<none>";

/// The resource kinds a tree can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Containers,
    Images,
    Volumes,
    Networks,
}

impl ResourceKind {
    pub const ALL: &'static [ResourceKind] = &[
        ResourceKind::Containers,
        ResourceKind::Images,
        ResourceKind::Volumes,
        ResourceKind::Networks,
    ];

    /// The adapter for this kind. Adapters are stateless constants.
    pub fn adapter(&self) -> &'static dyn ResourceAdapter {
        match self {
            ResourceKind::Containers => &ContainerAdapter,
            ResourceKind::Images => &ImageAdapter,
            ResourceKind::Volumes => &VolumeAdapter,
            ResourceKind::Networks => &NetworkAdapter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Containers => "containers",
            ResourceKind::Images => "images",
            ResourceKind::Volumes => "volumes",
            ResourceKind::Networks => "networks",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown resource kind: {0} (expected containers, images, volumes, or networks)")]
pub struct ParseResourceKindError(String);

impl FromStr for ResourceKind {
    type Err = ParseResourceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "containers" | "container" => Ok(ResourceKind::Containers),
            "images" | "image" => Ok(ResourceKind::Images),
            "volumes" | "volume" => Ok(ResourceKind::Volumes),
            "networks" | "network" => Ok(ResourceKind::Networks),
            _ => Err(ParseResourceKindError(s.to_string())),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag a tree host matches on to decide which commands apply to a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContextValue {
    RunningContainer,
    PausedContainer,
    StoppedContainer,
    Image,
    Volume,
    Network,
    /// One of the networks every engine predefines; cannot be removed.
    BuiltInNetwork,
}

impl ContextValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextValue::RunningContainer => "runningContainer",
            ContextValue::PausedContainer => "pausedContainer",
            ContextValue::StoppedContainer => "stoppedContainer",
            ContextValue::Image => "image",
            ContextValue::Volume => "volume",
            ContextValue::Network => "network",
            ContextValue::BuiltInNetwork => "builtInNetwork",
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-kind key tables, normalization, and formatting.
///
/// Every key listed in `label_keys`, `description_keys`, and
/// `group_by_keys` must be accepted by `format`; asking for any other key is
/// a wiring bug and panics.
pub trait ResourceAdapter: Sealed + Send + Sync {
    fn kind(&self) -> ResourceKind;

    fn label_keys(&self) -> &'static [FormatKey];

    fn default_label_key(&self) -> FormatKey;

    fn description_keys(&self) -> &'static [FormatKey];

    fn default_description_keys(&self) -> &'static [FormatKey];

    fn group_by_keys(&self) -> &'static [FormatKey];

    fn sort_by_keys(&self) -> &'static [SortKey] {
        &[SortKey::CreatedTime, SortKey::Label]
    }

    fn default_sort_by_key(&self) -> SortKey {
        SortKey::CreatedTime
    }

    /// Build the canonical item; `now` (epoch seconds) fixes its age bucket.
    fn normalize(
        &self,
        raw: &RawDescriptor,
        now: i64,
        diagnostics: &mut Diagnostics,
    ) -> NormalizedItem;

    fn format(&self, key: FormatKey, item: &NormalizedItem) -> String;

    fn context_value(&self, item: &NormalizedItem) -> ContextValue;
}

/// Format one of the image-reference keys.
pub(crate) fn format_image_key(
    kind: ResourceKind,
    image: Option<&ImageRef>,
    key: FormatKey,
) -> String {
    let Some(image) = image else {
        return NONE_TEXT.to_string();
    };
    match key {
        FormatKey::Registry => image.registry().to_string(),
        FormatKey::Repository => image.repository().to_string(),
        FormatKey::Tag => image.tag().to_string(),
        FormatKey::FullTag | FormatKey::RepositoryNameAndTag => image.to_string(),
        other => unsupported_key(kind, other),
    }
}

/// Comma-separated private ports in descriptor order.
pub(crate) fn format_ports(item: &NormalizedItem) -> String {
    if item.ports().is_empty() {
        return NONE_TEXT.to_string();
    }
    item.ports()
        .iter()
        .map(|p| p.private_port.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn unsupported_key(kind: ResourceKind, key: FormatKey) -> ! {
    panic!("{kind} adapter cannot format key {key}; its key tables and formatter disagree")
}
