// ABOUTME: Container image reference parsing for tree labels.
// ABOUTME: Splits references like nginx, nginx:tag, host:5000/org/image:tag.

use std::fmt;

/// Registry assumed when a reference does not name one.
pub const DEFAULT_REGISTRY: &str = "docker.io/library";

/// Tag assumed when a reference does not carry one.
pub const DEFAULT_TAG: &str = "latest";

/// A parsed image reference.
///
/// Parsing is total: anything that does not look like a registry-qualified
/// reference ends up as a repository under [`DEFAULT_REGISTRY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    registry: String,
    repository: String,
    tag: String,
    explicit_tag: bool,
}

impl ImageRef {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();

        // Only a colon inside the final path segment separates a tag;
        // one before a slash belongs to a host:port registry.
        let last_segment_start = input.rfind('/').map(|i| i + 1).unwrap_or(0);
        let (name, tag) = match input[last_segment_start..].rfind(':') {
            Some(offset) => {
                let colon = last_segment_start + offset;
                (&input[..colon], Some(&input[colon + 1..]))
            }
            None => (input, None),
        };

        let (registry, repository) = Self::parse_registry_and_repository(name);

        Self {
            registry,
            repository,
            tag: tag.unwrap_or(DEFAULT_TAG).to_string(),
            explicit_tag: tag.is_some(),
        }
    }

    fn parse_registry_and_repository(name: &str) -> (String, String) {
        match name.split_once('/') {
            Some((first, rest)) if first.contains('.') || first.contains(':') => {
                (first.to_string(), rest.to_string())
            }
            // No registry, the whole thing is the repository (e.g., "library/nginx")
            _ => (DEFAULT_REGISTRY.to_string(), name.to_string()),
        }
    }

    /// Reference for an image that has no repository or tag at all.
    pub fn dangling() -> Self {
        Self {
            registry: DEFAULT_REGISTRY.to_string(),
            repository: "<none>".to_string(),
            tag: "<none>".to_string(),
            explicit_tag: true,
        }
    }

    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the tag was written in the reference rather than defaulted.
    pub fn has_explicit_tag(&self) -> bool {
        self.explicit_tag
    }

    pub fn is_default_registry(&self) -> bool {
        self.registry == DEFAULT_REGISTRY
    }
}

/// Renders `registry/repository:tag`, leaving out the default registry and
/// any tag that was not spelled out in the parsed text.
impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_default_registry() {
            write!(f, "{}/", self.registry)?;
        }
        write!(f, "{}", self.repository)?;
        if self.explicit_tag {
            write!(f, ":{}", self.tag)?;
        }
        Ok(())
    }
}
