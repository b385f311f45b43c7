//! Credential records as returned by the record-provider API

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A credential record. Identity is `id`; everything else is display data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credential {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    /// Fields this crate does not interpret
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Credential {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Same record, compared by id only.
    pub fn same_record(&self, other: &Credential) -> bool {
        self.id == other.id
    }
}

/// Opaque credential type filter, passed to the API verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CredentialTypeId(String);

impl CredentialTypeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CredentialTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for CredentialTypeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CredentialTypeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CredentialTypeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One page of a list query. `count` is the server-side total, not `results.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    pub count: u64,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: u64) -> Self {
        Self { results, count }
    }

    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            count: 0,
        }
    }

    /// True when exactly one record matched and it is on this page.
    pub fn is_singleton(&self) -> bool {
        self.count == 1 && self.results.len() == 1
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
