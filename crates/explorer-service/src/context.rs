//! The acting identity of a request.

use std::fmt;

use serde::{Deserialize, Serialize};

use explorer_core::error::AppError;

/// Free-text identity supplied by the caller and trusted as-is.
///
/// There is no authentication; authorization is plain string equality
/// against an item's `created_by`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Actor(String);

impl Actor {
    /// Parse an identity, rejecting missing or blank values. `field` names
    /// the request field in the error message.
    pub fn parse(value: Option<&str>, field: &str) -> Result<Self, AppError> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Ok(Self(v.to_string())),
            _ => Err(AppError::validation(format!("{field} is required"))),
        }
    }

    /// The identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let actor = Actor::parse(Some("  alice "), "createdBy").unwrap();
        assert_eq!(actor.as_str(), "alice");
    }

    #[test]
    fn test_parse_rejects_blank() {
        let err = Actor::parse(Some("   "), "updatedBy").unwrap_err();
        assert_eq!(err.message, "updatedBy is required");
        assert!(Actor::parse(None, "deletedBy").is_err());
    }
}
