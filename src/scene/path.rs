//! Absolute paden naar prims in het scènedocument.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DocumentError;

/// Absoluut pad zoals `/World/Vis/Cube_0`.
///
/// Elk segment is een identifier: een letter of `_`, gevolgd door letters,
/// cijfers of `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PrimPath(pub(super) String);

impl PrimPath {
    pub fn new(path: impl Into<String>) -> Result<Self, DocumentError> {
        let path = path.into();
        validate(&path)?;
        Ok(Self(path))
    }

    /// Voegt één segment toe aan het pad.
    pub fn child(&self, name: &str) -> Result<Self, DocumentError> {
        if !is_identifier(name) {
            return Err(DocumentError::InvalidPath(format!("{}/{name}", self.0)));
        }
        Ok(Self(format!("{}/{name}", self.0)))
    }

    /// Ouderpad, of `None` voor een prim direct onder de root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (parent, _) = self.0.rsplit_once('/')?;
        if parent.is_empty() {
            None
        } else {
            Some(Self(parent.to_owned()))
        }
    }

    /// Laatste segment van het pad.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Geeft terug of `self` gelijk is aan `ancestor` of eronder valt.
    #[must_use]
    pub fn has_prefix(&self, ancestor: &PrimPath) -> bool {
        self.0 == ancestor.0
            || self
                .0
                .strip_prefix(ancestor.0.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PrimPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PrimPath {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn validate(path: &str) -> Result<(), DocumentError> {
    let Some(rest) = path.strip_prefix('/') else {
        return Err(DocumentError::InvalidPath(path.to_owned()));
    };
    if rest.split('/').all(is_identifier) {
        Ok(())
    } else {
        Err(DocumentError::InvalidPath(path.to_owned()))
    }
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
