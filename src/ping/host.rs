//! Validated ping target.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr};

use super::PingError;

const MAX_HOSTNAME_LEN: usize = 253;

/// A hostname or IP literal that is safe to hand to the ping utility as a
/// single argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// Validate `input` as an IP address or hostname.
    ///
    /// The string is kept verbatim; nothing is trimmed or resolved.
    pub fn parse(input: &str) -> Result<Self, PingError> {
        if input.parse::<IpAddr>().is_ok() || is_scoped_ipv6(input) || is_valid_hostname(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(PingError::InvalidHost(input.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Link-local IPv6 with a zone index, e.g. `fe80::1%eth0`.
fn is_scoped_ipv6(s: &str) -> bool {
    let Some((addr, zone)) = s.split_once('%') else {
        return false;
    };
    addr.parse::<Ipv6Addr>().is_ok()
        && !zone.is_empty()
        && zone
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

/// Hostname grammar: ASCII alphanumerics, dots, hyphens and underscores.
/// A leading `-` would be read by ping as an option.
fn is_valid_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    if s.starts_with('-') || s.starts_with('.') {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ip_literals() {
        assert_eq!(Host::parse("8.8.8.8").unwrap().as_str(), "8.8.8.8");
        assert_eq!(Host::parse("2001:4860:4860::8888").unwrap().as_str(), "2001:4860:4860::8888");
    }

    #[test]
    fn test_accepts_scoped_ipv6() {
        assert_eq!(Host::parse("fe80::1%eth0").unwrap().as_str(), "fe80::1%eth0");
        assert!(Host::parse("fe80::1%3").is_ok());
        assert!(Host::parse("fe80::1%").is_err());
        assert!(Host::parse("fe80::1%eth0;id").is_err());
        assert!(Host::parse("8.8.8.8%eth0").is_err());
        assert!(Host::parse("example.com%eth0").is_err());
    }

    #[test]
    fn test_accepts_hostnames() {
        for name in ["google.com", "localhost", "my-host_01.internal", "example.com."] {
            assert!(Host::parse(name).is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_rejects_injection_and_options() {
        for bad in [
            "",
            "-c 100",
            "-f",
            ".example.com",
            "google.com; rm -rf /",
            "8.8.8.8 && reboot",
            "$(whoami)",
            "host name",
            "example.com\n",
        ] {
            assert!(Host::parse(bad).is_err(), "{:?} should be rejected", bad);
        }
    }

    #[test]
    fn test_rejects_overlong_hostname() {
        let long = "a".repeat(MAX_HOSTNAME_LEN + 1);
        assert!(Host::parse(&long).is_err());
        let max = "a".repeat(MAX_HOSTNAME_LEN);
        assert!(Host::parse(&max).is_ok());
    }

    #[test]
    fn test_display_is_verbatim() {
        let host = Host::parse("Example.COM").unwrap();
        assert_eq!(host.to_string(), "Example.COM");
    }
}
