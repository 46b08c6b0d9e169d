// ABOUTME: Diagnostics accumulator for fallbacks taken while building a tree.
// ABOUTME: Collects warnings that never fail a build but are useful to show or log.

/// Collects non-fatal warnings during settings validation and normalization.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!(kind = ?warning.kind, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Count warnings of one kind.
    pub fn count(&self, kind: WarningKind) -> usize {
        self.warnings.iter().filter(|w| w.kind == kind).count()
    }
}

/// A fallback the engine applied instead of failing.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// A settings field was missing, mistyped, or named an unknown key.
    pub fn invalid_setting(field: &str, message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::InvalidSetting,
            message: format!("setting `{field}`: {}", message.into()),
        }
    }

    /// A descriptor lacked a field and a substitute was used.
    pub fn missing_field(id: &str, field: &str, substitute: &str) -> Self {
        Self {
            kind: WarningKind::MissingField,
            message: format!("descriptor {id}: no {field}, using \"{substitute}\""),
        }
    }

    /// A container port had no private port number and was left out.
    pub fn skipped_port(id: &str) -> Self {
        Self {
            kind: WarningKind::MissingField,
            message: format!("descriptor {id}: port without a private port number, skipped"),
        }
    }

    /// A descriptor timestamp could not be read.
    pub fn unreadable_timestamp(id: &str, raw: &str) -> Self {
        Self {
            kind: WarningKind::UnreadableTimestamp,
            message: format!("descriptor {id}: unreadable timestamp \"{raw}\", using epoch"),
        }
    }
}

/// Categories of fallbacks taken while building a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A settings field fell back to its default.
    InvalidSetting,
    /// A descriptor field was absent.
    MissingField,
    /// A descriptor timestamp was not an epoch or RFC 3339 value.
    UnreadableTimestamp,
}
