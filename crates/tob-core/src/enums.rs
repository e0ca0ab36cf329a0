//! SDK and node-type enums for learning content.
//!
//! Both enums are closed: every match over them is exhaustive, so adding a
//! variant forces every key derivation and decode site to be updated.
//! Serialization uses lowercase names via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Sdk
// ---------------------------------------------------------------------------

/// A programming-language target for the example code of a learning path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Sdk {
    Go,
    Python,
    Java,
    Scio,
}

impl Sdk {
    /// Every supported SDK, in declaration order.
    pub const ALL: [Self; 4] = [Self::Go, Self::Python, Self::Java, Self::Scio];

    /// Return the string representation used in JSON and CLI arguments.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::Python => "python",
            Self::Java => "java",
            Self::Scio => "scio",
        }
    }

    /// Human-readable title, stored on the learning-path root entity.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Python => "Python",
            Self::Java => "Java",
            Self::Scio => "SCIO",
        }
    }
}

impl fmt::Display for Sdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sdk {
    type Err = CoreError;

    /// Parse an SDK name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sdk| sdk.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownSdk(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// NodeType
// ---------------------------------------------------------------------------

/// Discriminant of a learning-path node.
///
/// Persisted as an integer code; `0` is reserved for "undefined" and is never
/// produced or accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Unit,
    Group,
}

impl NodeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Group => "group",
        }
    }

    /// Integer code stored in the node entity's `type` property.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Unit => 1,
            Self::Group => 2,
        }
    }
}

impl TryFrom<i64> for NodeType {
    type Error = CoreError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Unit),
            2 => Ok(Self::Group),
            other => Err(CoreError::UnknownNodeType(other)),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
