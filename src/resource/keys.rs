// ABOUTME: Format keys and sort keys accepted in tree settings.
// ABOUTME: Parsed from and displayed as the PascalCase names used in settings files.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} key: {value}")]
pub struct ParseKeyError {
    kind: &'static str,
    value: String,
}

/// Selects which formatted field of an item to show, or to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatKey {
    ContainerId,
    ContainerName,
    CreatedTime,
    Driver,
    FullTag,
    ImageId,
    NetworkId,
    NetworkName,
    Ports,
    Registry,
    Repository,
    RepositoryNameAndTag,
    State,
    Status,
    Tag,
    VolumeName,
}

impl FormatKey {
    pub const ALL: &'static [FormatKey] = &[
        FormatKey::ContainerId,
        FormatKey::ContainerName,
        FormatKey::CreatedTime,
        FormatKey::Driver,
        FormatKey::FullTag,
        FormatKey::ImageId,
        FormatKey::NetworkId,
        FormatKey::NetworkName,
        FormatKey::Ports,
        FormatKey::Registry,
        FormatKey::Repository,
        FormatKey::RepositoryNameAndTag,
        FormatKey::State,
        FormatKey::Status,
        FormatKey::Tag,
        FormatKey::VolumeName,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::ContainerId => "ContainerId",
            FormatKey::ContainerName => "ContainerName",
            FormatKey::CreatedTime => "CreatedTime",
            FormatKey::Driver => "Driver",
            FormatKey::FullTag => "FullTag",
            FormatKey::ImageId => "ImageId",
            FormatKey::NetworkId => "NetworkId",
            FormatKey::NetworkName => "NetworkName",
            FormatKey::Ports => "Ports",
            FormatKey::Registry => "Registry",
            FormatKey::Repository => "Repository",
            FormatKey::RepositoryNameAndTag => "RepositoryNameAndTag",
            FormatKey::State => "State",
            FormatKey::Status => "Status",
            FormatKey::Tag => "Tag",
            FormatKey::VolumeName => "VolumeName",
        }
    }
}

impl FromStr for FormatKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKey::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ParseKeyError {
                kind: "format",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FormatKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Selects the comparator used to order items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Most recently created first.
    CreatedTime,
    /// Ascending ordinal order of the resolved label text.
    Label,
}

impl FromStr for SortKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CreatedTime" => Ok(SortKey::CreatedTime),
            "Label" => Ok(SortKey::Label),
            _ => Err(ParseKeyError {
                kind: "sort",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::CreatedTime => write!(f, "CreatedTime"),
            SortKey::Label => write!(f, "Label"),
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
