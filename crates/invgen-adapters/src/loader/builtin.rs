//! Built-in server list used when no input file is given.

use invgen_core::domain::{RawRecord, ServerRecord};

/// `(ip, hostname, group)` for each built-in server.
const DEFAULT_SERVERS: [(&str, &str, &str); 4] = [
    ("10.0.1.5", "serverA.example.com", "web_servers"),
    ("10.0.1.6", "serverC.example.com", "web_servers"),
    ("10.0.1.20", "serverB.example.com", "db_servers"),
    ("10.0.1.30", "serverD.example.com", "monitoring_servers"),
];

/// The four default records, in their fixed order.
pub fn default_records() -> Vec<RawRecord> {
    DEFAULT_SERVERS
        .iter()
        .map(|&(ip, hostname, group)| ServerRecord::new(ip, hostname, group).into())
        .collect()
}
