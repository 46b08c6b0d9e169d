// ABOUTME: Raw resource descriptors as reported by the Docker Engine list APIs.
// ABOUTME: Every field is optional; the normalizer resolves what is missing.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One container, image, volume, or network as listed by the runtime.
///
/// Field names follow the Engine API's PascalCase JSON. Only the union of
/// fields the adapters read is kept; anything else in the payload is ignored.
/// A field of the wrong shape reads as absent, so one odd field never
/// rejects the listing; the normalizer substitutes and warns.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RawDescriptor {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<String>,
    /// Container names, each with a leading `/`.
    #[serde(deserialize_with = "lenient_list")]
    pub names: Vec<String>,
    /// Volume and network name.
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Container image reference.
    #[serde(deserialize_with = "lenient")]
    pub image: Option<String>,
    /// Image repository tags.
    #[serde(deserialize_with = "lenient_list")]
    pub repo_tags: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub created: Option<RawTimestamp>,
    /// Volume creation time.
    #[serde(deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub ports: Vec<RawPort>,
    #[serde(deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub driver: Option<String>,
}

/// Creation time in either of the shapes the Engine API uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    /// Seconds since the epoch (containers, images).
    Epoch(i64),
    /// RFC 3339 text (networks).
    Text(String),
}

/// A published or exposed container port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawPort {
    #[serde(rename = "PrivatePort", deserialize_with = "lenient")]
    pub private_port: Option<u16>,
    #[serde(rename = "PublicPort", deserialize_with = "lenient")]
    pub public_port: Option<u16>,
    #[serde(rename = "Type", deserialize_with = "lenient")]
    pub protocol: Option<String>,
}

impl RawDescriptor {
    /// Parse a descriptor listing.
    ///
    /// The list endpoints answer with a bare array, except `GET /volumes`,
    /// which wraps it as `{"Volumes": [...], "Warnings": [...]}`.
    pub fn list_from_json(json: &str) -> serde_json::Result<Vec<Self>> {
        let listing = match serde_json::from_str(json)? {
            Value::Object(mut envelope) => match envelope.remove("Volumes") {
                Some(Value::Null) => return Ok(Vec::new()),
                Some(volumes) => volumes,
                None => return Err(de::Error::missing_field("Volumes")),
            },
            bare => bare,
        };
        serde_json::from_value(listing)
    }
}

// Wrong-typed values read as the field's default (`None` for options).
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

// `null` or a non-array reads as empty (the Engine API reports absent lists
// as `null`, e.g. `RepoTags` of a dangling image); unreadable entries are dropped.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| T::deserialize(entry).ok())
            .collect(),
        _ => Vec::new(),
    })
}
