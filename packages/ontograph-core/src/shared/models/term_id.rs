//! Concept identifier (CURIE)
//!
//! A `TermId` is a prefix plus a local code (`HP:0001250`). The value is
//! stored once as `PREFIX:ID` in a shared `Arc<str>`, so cloning is a
//! reference-count bump and identifiers are cheap to use as map keys.
//!
//! Ordering is by `(prefix, id)`, not by the joined string.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error raised when a CURIE cannot be split into prefix and local id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermIdError {
    #[error("no ':' or '_' delimiter in {0:?}")]
    MissingDelimiter(String),

    #[error("empty prefix in {0:?}")]
    EmptyPrefix(String),

    #[error("empty local id in {0:?}")]
    EmptyId(String),

    #[error("prefix {0:?} must not contain ':'")]
    InvalidPrefix(String),
}

/// Canonical concept identifier
#[derive(Clone)]
pub struct TermId {
    /// Always `PREFIX:ID`
    value: Arc<str>,
    /// Byte offset of the ':' delimiter in `value`
    split: usize,
}

impl TermId {
    /// Parse a CURIE.
    ///
    /// The delimiter is the first `:`; when there is none, the first `_`
    /// (`NCIT_C3117` becomes `NCIT:C3117`).
    pub fn from_curie(curie: &str) -> Result<Self, TermIdError> {
        let split = curie
            .find(':')
            .or_else(|| curie.find('_'))
            .ok_or_else(|| TermIdError::MissingDelimiter(curie.to_string()))?;

        let (prefix, rest) = curie.split_at(split);
        Self::new(prefix, &rest[1..]).map_err(|err| match err {
            TermIdError::EmptyPrefix(_) => TermIdError::EmptyPrefix(curie.to_string()),
            TermIdError::EmptyId(_) => TermIdError::EmptyId(curie.to_string()),
            other => other,
        })
    }

    /// Build from separate prefix and local id
    pub fn new(prefix: &str, id: &str) -> Result<Self, TermIdError> {
        if prefix.is_empty() {
            return Err(TermIdError::EmptyPrefix(format!("{prefix}:{id}")));
        }
        if id.is_empty() {
            return Err(TermIdError::EmptyId(format!("{prefix}:{id}")));
        }
        if prefix.contains(':') {
            return Err(TermIdError::InvalidPrefix(prefix.to_string()));
        }
        Ok(Self::known(prefix, id))
    }

    /// Build without validation. Callers guarantee a non-empty,
    /// colon-free prefix and a non-empty id.
    pub(crate) fn known(prefix: &str, id: &str) -> Self {
        let mut value = String::with_capacity(prefix.len() + id.len() + 1);
        value.push_str(prefix);
        value.push(':');
        value.push_str(id);
        Self {
            value: Arc::from(value),
            split: prefix.len(),
        }
    }

    /// Namespace part (`HP`)
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.value[..self.split]
    }

    /// Local part (`0001250`)
    #[inline]
    pub fn id(&self) -> &str {
        &self.value[self.split + 1..]
    }

    /// Full CURIE (`HP:0001250`)
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl PartialEq for TermId {
    fn eq(&self, other: &Self) -> bool {
        // prefix never contains ':', so the joined value decides both parts
        Arc::ptr_eq(&self.value, &other.value) || self.value == other.value
    }
}

impl Eq for TermId {}

impl Hash for TermId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Ord for TermId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.prefix()
            .cmp(other.prefix())
            .then_with(|| self.id().cmp(other.id()))
    }
}

impl PartialOrd for TermId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermId({})", self.value)
    }
}

impl FromStr for TermId {
    type Err = TermIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_curie(s)
    }
}

impl TryFrom<&str> for TermId {
    type Error = TermIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_curie(value)
    }
}

impl AsRef<str> for TermId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for TermId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for TermId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TermId::from_curie(&raw).map_err(serde::de::Error::custom)
    }
}
