use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A (group, artifact, version) triple identifying a module or its parent.
///
/// Fields are opaque: empty values are kept as-is and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// True when all three fields are empty
    pub fn is_empty(&self) -> bool {
        self.group_id.is_empty() && self.artifact_id.is_empty() && self.version.is_empty()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group_id, artifact_id, version] => Ok(Self::new(*group_id, *artifact_id, *version)),
            _ => Err(Error::InvalidCoordinate(s.to_string())),
        }
    }
}

/// Joined form of an optional coordinate.
///
/// Absent and all-empty coordinates both become `""`, so the two cannot be
/// told apart downstream.
pub fn gav_string(coordinate: Option<&Coordinate>) -> String {
    coordinate
        .filter(|c| !c.is_empty())
        .map(Coordinate::to_string)
        .unwrap_or_default()
}
