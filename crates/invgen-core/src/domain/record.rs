//! Server records.
//!
//! A [`RawRecord`] is what a loader hands over: a bag of named string
//! fields with no guarantees. A [`ServerRecord`] is the validated form the
//! inventory builder works with.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Fields every record must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 3] = ["ip", "hostname", "group"];

/// An unvalidated record as produced by a loader.
///
/// Keys are case-sensitive. Absent keys are simply not present in the map;
/// an empty string value still counts as present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<ServerRecord> for RawRecord {
    fn from(record: ServerRecord) -> Self {
        Self::new()
            .with("ip", record.ip)
            .with("hostname", record.hostname)
            .with("group", record.group)
    }
}

/// A record with all required fields present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerRecord {
    ip: String,
    hostname: String,
    group: String,
}

impl ServerRecord {
    pub fn new(
        ip: impl Into<String>,
        hostname: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            hostname: hostname.into(),
            group: group.into(),
        }
    }

    /// Validate a raw record found at `index` in the loaded sequence.
    pub fn from_raw(raw: &RawRecord, index: usize) -> Result<Self, DomainError> {
        let [ip, hostname, group] = REQUIRED_FIELDS;
        let field = |name: &'static str| {
            raw.get(name)
                .map(str::to_owned)
                .ok_or(DomainError::MissingField { field: name, index })
        };

        Ok(Self {
            ip: field(ip)?,
            hostname: field(hostname)?,
            group: field(group)?,
        })
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn group(&self) -> &str {
        &self.group
    }
}

impl fmt::Display for ServerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) in {}", self.hostname, self.ip, self.group)
    }
}
