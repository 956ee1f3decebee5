//! Line matchers for ping output.
//!
//! Each matcher handles one line shape and returns `None` when the line does
//! not fit, leaving the caller to pass it through unchanged.

use std::sync::OnceLock;

use regex::Regex;

/// One echo reply, e.g. `64 bytes from 8.8.8.8: icmp_seq=1 ttl=109 time=49 ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRecord {
    /// Everything between "bytes from " and the next colon.
    pub address: String,
    pub round_trip_ms: String,
}

/// Packet counts from the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsRecord {
    pub sent: i64,
    pub received: i64,
    pub loss_percent: i64,
}

impl StatsRecord {
    pub fn lost(&self) -> i64 {
        self.sent - self.received
    }
}

/// Round trip summary, numbers kept as printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RttRecord {
    pub min: String,
    pub avg: String,
    pub max: String,
}

/// Match a reply line (Linux iputils format).
pub fn match_reply(line: &str) -> Option<ReplyRecord> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"bytes from (?P<addr>[^:]+):.*time=(?P<time>[0-9.]+) ms").unwrap()
    });
    let caps = re.captures(line)?;
    Some(ReplyRecord {
        address: caps["addr"].to_string(),
        round_trip_ms: caps["time"].to_string(),
    })
}

/// Match the "N packets transmitted, M received, P% packet loss" line.
pub fn match_stats(line: &str) -> Option<StatsRecord> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r"(?P<sent>[0-9]+) packets transmitted, (?P<received>[0-9]+) received, (?P<loss>[0-9]+)% packet loss",
        )
        .unwrap()
    });

    let caps = re.captures(line)?;

    // Counts too large for i64 are treated as unparseable
    Some(StatsRecord {
        sent: caps["sent"].parse().ok()?,
        received: caps["received"].parse().ok()?,
        loss_percent: caps["loss"].parse().ok()?,
    })
}

/// Match the "rtt min/avg/max/mdev = a/b/c/d ms" line. `mdev` is dropped.
pub fn match_rtt(line: &str) -> Option<RttRecord> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(
            r"rtt min/avg/max/mdev = (?P<min>[0-9.]+)/(?P<avg>[0-9.]+)/(?P<max>[0-9.]+)/(?P<mdev>[0-9.]+) ms",
        )
        .unwrap()
    });

    let caps = re.captures(line)?;
    Some(RttRecord {
        min: caps["min"].to_string(),
        avg: caps["avg"].to_string(),
        max: caps["max"].to_string(),
    })
}
