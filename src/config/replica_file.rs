//! Replica list files.
//!
//! One `host` or `host:port` per line. Blank lines and `#` comments are
//! ignored. A malformed line is a configuration error naming the file and
//! line; an empty list is rejected outright rather than silently routing
//! everything to the primary.

use std::fs;
use std::path::Path;

use crate::replica::ReplicaAddress;

use super::errors::{ConfigError, ConfigResult};

/// Load a replica list file into addresses, in file order.
pub fn load_replica_file(path: impl AsRef<Path>) -> ConfigResult<Vec<ReplicaAddress>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReplicaFile {
        path: path.display().to_string(),
        source,
    })?;

    let mut replicas = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let addr = line
            .parse::<ReplicaAddress>()
            .map_err(|source| ConfigError::ReplicaAddress {
                path: path.display().to_string(),
                line: idx + 1,
                source,
            })?;
        replicas.push(addr);
    }

    if replicas.is_empty() {
        return Err(ConfigError::EmptyReplicaList {
            path: path.display().to_string(),
        });
    }
    Ok(replicas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_conf(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("replicas.conf");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_addresses_in_order() {
        let (_dir, path) = write_conf("replica-a\nreplica-b:5433\n");
        let replicas = load_replica_file(&path).unwrap();
        assert_eq!(replicas.len(), 2);
        assert_eq!(replicas[0].host(), "replica-a");
        assert_eq!(replicas[1].host(), "replica-b");
        assert_eq!(replicas[1].port(), Some(5433));
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let (_dir, path) = write_conf("# primary fallback order\n\nreplica-a\n  # indented\n");
        let replicas = load_replica_file(&path).unwrap();
        assert_eq!(replicas.len(), 1);
    }

    #[test]
    fn test_malformed_line_names_location() {
        let (_dir, path) = write_conf("replica-a\nreplica-b:not-a-port\n");
        match load_replica_file(&path) {
            Err(ConfigError::ReplicaAddress { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected ReplicaAddress error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_rejected() {
        let (_dir, path) = write_conf("# nothing here\n");
        assert!(matches!(
            load_replica_file(&path),
            Err(ConfigError::EmptyReplicaList { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.conf");
        assert!(matches!(
            load_replica_file(&path),
            Err(ConfigError::ReplicaFile { .. })
        ));
    }
}
