// ABOUTME: Image adapter: key tables, normalization, and formatting.
// ABOUTME: Images are shown by their first repository tag; untagged ones as <none>:<none>.

use super::sealed::Sealed;
use super::{ContextValue, FormatKey, ResourceAdapter, ResourceKind, format_image_key, unsupported_key};
use crate::descriptor::RawDescriptor;
use crate::diagnostics::Diagnostics;
use crate::normalize::{CommonFields, NormalizedItem};
use crate::types::ImageRef;

const ITEM_KEYS: &[FormatKey] = &[
    FormatKey::CreatedTime,
    FormatKey::FullTag,
    FormatKey::ImageId,
    FormatKey::Registry,
    FormatKey::Repository,
    FormatKey::RepositoryNameAndTag,
    FormatKey::Tag,
];

const GROUP_KEYS: &[FormatKey] = &[
    FormatKey::CreatedTime,
    FormatKey::ImageId,
    FormatKey::Registry,
    FormatKey::Repository,
    FormatKey::Tag,
];

const DEFAULT_DESCRIPTION: &[FormatKey] = &[FormatKey::CreatedTime];

/// Tag the Engine API reports for images that have none.
const DANGLING_TAG: &str = "<none>:<none>";

/// Adapter for `GET /images/json` listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageAdapter;

impl Sealed for ImageAdapter {}

impl ResourceAdapter for ImageAdapter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Images
    }

    fn label_keys(&self) -> &'static [FormatKey] {
        ITEM_KEYS
    }

    fn default_label_key(&self) -> FormatKey {
        FormatKey::FullTag
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

        let image_ref = raw
            .repo_tags
            .iter()
            .find(|tag| tag.as_str() != DANGLING_TAG)
            .map(|tag| ImageRef::parse(tag))
            .unwrap_or_else(ImageRef::dangling);

        NormalizedItem {
            id: common.id,
            short_id: common.short_id,
            display_name: image_ref.to_string(),
            image_ref: Some(image_ref),
            created_at: common.created_at,
            age: common.age,
            ports: Vec::new(),
            status: String::new(),
            state: String::new(),
            driver: None,
        }
    }

    fn format(&self, key: FormatKey, item: &NormalizedItem) -> String {
        match key {
            FormatKey::ImageId => item.short_id().to_string(),
            FormatKey::CreatedTime => item.age().label().to_string(),
            FormatKey::FullTag
            | FormatKey::Registry
            | FormatKey::Repository
            | FormatKey::RepositoryNameAndTag
            | FormatKey::Tag => format_image_key(self.kind(), item.image_ref(), key),
            other => unsupported_key(self.kind(), other),
        }
    }

    fn context_value(&self, _item: &NormalizedItem) -> ContextValue {
        ContextValue::Image
    }
}
