//! Replica endpoint addresses.

use std::fmt;
use std::str::FromStr;

use super::errors::ReplicaAddressError;

/// A replica endpoint: a host with an optional port.
///
/// Parsed from `host` or `host:port`. The connection layer treats the
/// address as opaque apart from this split, which it needs to rewrite the
/// connection descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplicaAddress {
    host: String,
    port: Option<u16>,
}

impl ReplicaAddress {
    pub fn new(host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl FromStr for ReplicaAddress {
    type Err = ReplicaAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(':');
        let host = parts.next().unwrap_or("");
        let port = parts.next();
        if parts.next().is_some() {
            return Err(ReplicaAddressError::TooManySeparators(s.to_string()));
        }
        if host.is_empty() {
            return Err(ReplicaAddressError::EmptyHost(s.to_string()));
        }
        let port = match port {
            None => None,
            Some(raw) => Some(raw.parse::<u16>().map_err(|_| {
                ReplicaAddressError::InvalidPort {
                    addr: s.to_string(),
                    port: raw.to_string(),
                }
            })?),
        };
        Ok(Self::new(host, port))
    }
}

impl fmt::Display for ReplicaAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => write!(f, "{}", self.host),
        }
    }
}
