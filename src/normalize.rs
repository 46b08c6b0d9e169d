// ABOUTME: Canonical, immutable form of a raw descriptor.
// ABOUTME: Shared field extraction used by every resource adapter's normalizer.

use crate::descriptor::{RawDescriptor, RawPort, RawTimestamp};
use crate::diagnostics::{Diagnostics, Warning};
use crate::resource::ResourceAdapter;
use crate::types::{ImageRef, RelativeTime};
use chrono::DateTime;
use std::fmt;

/// Length of the abbreviated identifier shown in trees.
pub const SHORT_ID_LEN: usize = 12;

/// Network protocol of a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Sctp,
}

impl Protocol {
    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("udp") => Protocol::Udp,
            Some("sctp") => Protocol::Sctp,
            _ => Protocol::Tcp,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Tcp => write!(f, "tcp"),
            Protocol::Udp => write!(f, "udp"),
            Protocol::Sctp => write!(f, "sctp"),
        }
    }
}

/// A container port, published or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortBinding {
    pub private_port: u16,
    pub public_port: Option<u16>,
    pub protocol: Protocol,
}

impl PortBinding {
    /// `None` when the descriptor gave no usable private port.
    pub fn from_raw(raw: &RawPort) -> Option<Self> {
        Some(Self {
            private_port: raw.private_port?,
            public_port: raw.public_port,
            protocol: Protocol::parse(raw.protocol.as_deref()),
        })
    }
}

/// A descriptor after normalization. Built once per tree build and only
/// read afterwards; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedItem {
    pub(crate) id: String,
    pub(crate) short_id: String,
    pub(crate) display_name: String,
    pub(crate) image_ref: Option<ImageRef>,
    pub(crate) created_at: i64,
    pub(crate) age: RelativeTime,
    pub(crate) ports: Vec<PortBinding>,
    pub(crate) status: String,
    pub(crate) state: String,
    pub(crate) driver: Option<String>,
}

impl NormalizedItem {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn short_id(&self) -> &str {
        &self.short_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn image_ref(&self) -> Option<&ImageRef> {
        self.image_ref.as_ref()
    }

    /// Creation time in epoch seconds.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Age bucket relative to the build's reference time.
    pub fn age(&self) -> &RelativeTime {
        &self.age
    }

    pub fn ports(&self) -> &[PortBinding] {
        &self.ports
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }
}

/// Fields every resource kind shares, resolved with their fallbacks.
pub(crate) struct CommonFields {
    pub id: String,
    pub short_id: String,
    pub created_at: i64,
    pub age: RelativeTime,
}

impl CommonFields {
    /// `fallback_id` stands in for descriptors without an `Id` (volumes).
    pub fn extract(
        raw: &RawDescriptor,
        fallback_id: Option<&str>,
        now: i64,
        diagnostics: &mut Diagnostics,
    ) -> Self {
        let id = raw
            .id
            .as_deref()
            .or(fallback_id)
            .unwrap_or_default()
            .to_string();
        let created_at = created_at(raw, &id, diagnostics);
        Self {
            short_id: short_id(&id),
            age: RelativeTime::between(created_at, now),
            created_at,
            id,
        }
    }
}

/// First twelve characters of an identifier, after any `sha256:` style prefix.
pub fn short_id(id: &str) -> String {
    let digest = id.split_once(':').map(|(_, rest)| rest).unwrap_or(id);
    digest.chars().take(SHORT_ID_LEN).collect()
}

/// Strip the leading `/` the Engine API puts on container names.
pub fn strip_name(name: &str) -> &str {
    name.strip_prefix('/').unwrap_or(name)
}

fn created_at(raw: &RawDescriptor, id: &str, diagnostics: &mut Diagnostics) -> i64 {
    let text = match (&raw.created, &raw.created_at) {
        (Some(RawTimestamp::Epoch(secs)), _) => return *secs,
        (Some(RawTimestamp::Text(text)), _) | (None, Some(text)) => text,
        (None, None) => {
            diagnostics.warn(Warning::missing_field(id, "creation time", "0"));
            return 0;
        }
    };

    match DateTime::parse_from_rfc3339(text) {
        Ok(dt) => dt.timestamp(),
        Err(_) => {
            diagnostics.warn(Warning::unreadable_timestamp(id, text));
            0
        }
    }
}

/// Normalize every descriptor through the adapter, keeping input order.
pub fn normalize_all(
    adapter: &dyn ResourceAdapter,
    descriptors: &[RawDescriptor],
    now: i64,
    diagnostics: &mut Diagnostics,
) -> Vec<NormalizedItem> {
    let items: Vec<NormalizedItem> = descriptors
        .iter()
        .map(|raw| adapter.normalize(raw, now, diagnostics))
        .collect();
    tracing::debug!(kind = %adapter.kind(), count = items.len(), "normalized descriptors");
    items
}
