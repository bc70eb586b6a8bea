//! Mapping error model.

use thiserror::Error;

/// Result type used across the mapping engine.
pub type MapResult<T> = Result<T, MapError>;

/// Mapping-level error.
///
/// An unconfigured type pair is **not** an error: mapping it yields the
/// destination's default value. Everything here is either raised by an
/// extractor or by the executor while assembling the destination.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A source member an extractor dereferenced does not exist.
    #[error("missing source field: {field}")]
    MissingField { field: String },

    /// A source member exists but could not be read as the requested type.
    #[error("invalid source field {field}: {reason}")]
    InvalidField { field: String, reason: String },

    /// Free-form failure raised by a caller-supplied extractor.
    #[error("extractor failed: {0}")]
    Extractor(String),

    /// A configured member name is not part of the destination's shape.
    #[error("{destination} has no member named {member}")]
    UnknownMember {
        destination: &'static str,
        member: String,
    },

    /// An extracted value does not fit the destination field it targets.
    #[error("member {member} cannot hold a {found}: {reason}")]
    MemberType {
        member: String,
        found: &'static str,
        reason: String,
    },

    /// Converting a value to or from its serialized form failed.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The process-wide mapper was bootstrapped twice.
    #[error("process-wide mapper is already initialized")]
    AlreadyInitialized,
}

impl MapError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    pub fn member_type(
        member: impl Into<String>,
        found: &'static str,
        reason: impl ToString,
    ) -> Self {
        Self::MemberType {
            member: member.into(),
            found,
            reason: reason.to_string(),
        }
    }

    pub fn extractor(msg: impl Into<String>) -> Self {
        Self::Extractor(msg.into())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
