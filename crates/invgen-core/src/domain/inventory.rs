//! The inventory document and the builder that produces it.
//!
//! Shape on the wire:
//!
//! ```yaml
//! all:
//!   children:
//!     web_servers:
//!       hosts:
//!         serverA.example.com:
//!           ansible_host: 10.0.1.5
//! ```
//!
//! Groups and hosts live in `BTreeMap`s, so iteration and serialized output
//! are lexicographic regardless of input order.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::error::DomainError;
use super::record::{RawRecord, ServerRecord};

/// Root of an inventory: a single `all` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryDocument {
    pub all: InventoryRoot,
}

/// Contents of the `all` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRoot {
    #[serde(default)]
    pub children: BTreeMap<String, HostGroup>,
}

/// One named group of hosts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostGroup {
    #[serde(default)]
    pub hosts: BTreeMap<String, HostVars>,
}

/// Per-host variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostVars {
    pub ansible_host: String,
}

impl InventoryDocument {
    /// Build an inventory from loaded records.
    ///
    /// Every record is validated before any group is created, so a
    /// [`DomainError::MissingField`] leaves nothing half-built. Within a
    /// group a repeated hostname is overwritten by the later record.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn from_records(records: &[RawRecord]) -> Result<Self, DomainError> {
        let servers = records
            .iter()
            .enumerate()
            .map(|(index, raw)| ServerRecord::from_raw(raw, index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_servers(&servers))
    }

    /// Build an inventory from already-validated records.
    pub fn from_servers(servers: &[ServerRecord]) -> Self {
        let groups: BTreeSet<&str> = servers.iter().map(ServerRecord::group).collect();

        let mut children: BTreeMap<String, HostGroup> = groups
            .into_iter()
            .map(|name| (name.to_owned(), HostGroup::default()))
            .collect();

        for server in servers {
            let Some(group) = children.get_mut(server.group()) else {
                continue;
            };
            let previous = group.hosts.insert(
                server.hostname().to_owned(),
                HostVars {
                    ansible_host: server.ip().to_owned(),
                },
            );
            if let Some(previous) = previous {
                debug!(
                    hostname = server.hostname(),
                    group = server.group(),
                    replaced = %previous.ansible_host,
                    "Duplicate hostname, later record wins"
                );
            }
        }

        Self {
            all: InventoryRoot { children },
        }
    }

    /// Iterate groups in name order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &HostGroup)> {
        self.all.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn group(&self, name: &str) -> Option<&HostGroup> {
        self.all.children.get(name)
    }

    /// The `ansible_host` recorded for `host` under `group`.
    pub fn ansible_host(&self, group: &str, host: &str) -> Option<&str> {
        self.group(group)?
            .hosts
            .get(host)
            .map(|vars| vars.ansible_host.as_str())
    }

    pub fn group_count(&self) -> usize {
        self.all.children.len()
    }

    /// Number of host entries summed over all groups.
    pub fn host_count(&self) -> usize {
        self.all.children.values().map(|g| g.hosts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.all.children.is_empty()
    }
}

impl HostGroup {
    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.hosts.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(ip: &str, hostname: &str, group: &str) -> RawRecord {
        ServerRecord::new(ip, hostname, group).into()
    }

    #[test]
    fn groups_records_by_group_name() {
        let doc = InventoryDocument::from_records(&[
            raw("10.0.1.5", "serverA.example.com", "web_servers"),
            raw("10.0.1.6", "serverC.example.com", "web_servers"),
            raw("10.0.1.20", "serverB.example.com", "db_servers"),
        ])
        .unwrap();

        assert_eq!(doc.group_count(), 2);
        assert_eq!(doc.host_count(), 3);
        let web: Vec<_> = doc.group("web_servers").unwrap().hostnames().collect();
        assert_eq!(web, ["serverA.example.com", "serverC.example.com"]);
        assert_eq!(
            doc.ansible_host("db_servers", "serverB.example.com"),
            Some("10.0.1.20")
        );
    }

    #[test]
    fn groups_iterate_lexicographically() {
        let doc = InventoryDocument::from_records(&[
            raw("1", "h1", "zeta"),
            raw("2", "h2", "alpha"),
            raw("3", "h3", "mid"),
        ])
        .unwrap();
        let names: Vec<_> = doc.groups().map(|(name, _)| name).collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn duplicate_hostname_in_group_keeps_last_ip() {
        let doc = InventoryDocument::from_records(&[
            raw("10.0.0.1", "dup", "web"),
            raw("10.0.0.2", "dup", "web"),
        ])
        .unwrap();
        assert_eq!(doc.host_count(), 1);
        assert_eq!(doc.ansible_host("web", "dup"), Some("10.0.0.2"));
    }

    #[test]
    fn same_hostname_in_two_groups_appears_in_both() {
        let doc = InventoryDocument::from_records(&[
            raw("10.0.0.1", "shared", "web"),
            raw("10.0.0.2", "shared", "db"),
        ])
        .unwrap();
        assert_eq!(doc.ansible_host("web", "shared"), Some("10.0.0.1"));
        assert_eq!(doc.ansible_host("db", "shared"), Some("10.0.0.2"));
    }

    #[test]
    fn missing_hostname_fails_with_record_index() {
        let records = [
            raw("10.0.0.1", "ok", "web"),
            RawRecord::new().with("ip", "10.0.0.2").with("group", "web"),
        ];
        let err = InventoryDocument::from_records(&records).unwrap_err();
        assert_eq!(
            err,
            DomainError::MissingField {
                field: "hostname",
                index: 1
            }
        );
    }

    #[test]
    fn empty_input_builds_empty_document() {
        let doc = InventoryDocument::from_records(&[]).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.host_count(), 0);
    }

    #[test]
    fn unknown_group_lookups_return_none() {
        let doc = InventoryDocument::from_records(&[raw("1", "h", "g")]).unwrap();
        assert!(doc.group("nope").is_none());
        assert!(doc.ansible_host("g", "nope").is_none());
    }

    fn server_strategy() -> impl Strategy<Value = ServerRecord> {
        ("[0-9]{1,3}\\.[0-9]{1,3}", "[a-e]{1,2}", "g[0-3]")
            .prop_map(|(ip, host, group)| ServerRecord::new(ip, host, group))
    }

    proptest! {
        #[test]
        fn group_keys_match_distinct_input_groups(
            servers in prop::collection::vec(server_strategy(), 0..40)
        ) {
            let doc = InventoryDocument::from_servers(&servers);
            let expected: BTreeSet<&str> = servers.iter().map(ServerRecord::group).collect();
            let actual: BTreeSet<&str> = doc.groups().map(|(name, _)| name).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn hosts_per_group_match_input(
            servers in prop::collection::vec(server_strategy(), 0..40)
        ) {
            let doc = InventoryDocument::from_servers(&servers);
            for (name, group) in doc.groups() {
                let expected: BTreeSet<&str> = servers
                    .iter()
                    .filter(|s| s.group() == name)
                    .map(ServerRecord::hostname)
                    .collect();
                let actual: BTreeSet<&str> = group.hostnames().collect();
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn ansible_host_is_last_ip_for_group_and_host(
            servers in prop::collection::vec(server_strategy(), 1..40)
        ) {
            let doc = InventoryDocument::from_servers(&servers);
            for server in &servers {
                let last = servers
                    .iter()
                    .rev()
                    .find(|s| s.group() == server.group() && s.hostname() == server.hostname())
                    .map(ServerRecord::ip);
                prop_assert_eq!(doc.ansible_host(server.group(), server.hostname()), last);
            }
        }
    }
}
