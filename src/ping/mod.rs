//! Ping module: runs the system ping utility and turns its output into a report.
//!
//! Supports Linux-style `ping` output; unrecognised lines are passed through.

mod format;
mod host;
mod matchers;
mod runner;

pub use format::*;
pub use host::*;
pub use runner::*;

use std::time::Duration;
use thiserror::Error;

/// Ping error types.
#[derive(Error, Debug)]
pub enum PingError {
    #[error("invalid host: {0:?}")]
    InvalidHost(String),
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("ping exited with {status} before producing output: {stderr}")]
    Exited { status: String, stderr: String },
    #[error("ping timed out after {0:?}")]
    Timeout(Duration),
    #[error("failed to read ping output: {0}")]
    Io(#[from] std::io::Error),
}

impl PingError {
    /// True when the caller supplied a bad host, as opposed to the process failing.
    pub fn is_invalid_host(&self) -> bool {
        matches!(self, PingError::InvalidHost(_))
    }
}

/// Ping `host` and return the formatted report.
pub async fn ping(host: &str, runner: &PingRunner) -> Result<String, PingError> {
    let target = Host::parse(host)?;
    let lines = runner.run(&target).await?;

    tracing::debug!("Formatting {} lines of ping output for {}", lines.len(), target);
    Ok(format_report(&lines, target.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ping_rejects_option_like_host() {
        let runner = PingRunner::new("ping");
        let err = ping("-f", &runner).await.unwrap_err();
        assert!(err.is_invalid_host());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ping_formats_runner_output() {
        // `echo -c 4 8.8.8.8` prints a single line with none of the markers
        let runner = PingRunner::new("echo");
        let report = ping("8.8.8.8", &runner).await.unwrap();
        assert_eq!(report, "ping 8.8.8.8\n\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_ping_propagates_process_error() {
        let runner = PingRunner::new("false");
        let err = ping("example.com", &runner).await.unwrap_err();
        assert!(matches!(err, PingError::Exited { .. }));
        assert!(!err.is_invalid_host());
    }

    #[test]
    fn test_error_messages() {
        let err = PingError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "ping timed out after 30s");

        let err = PingError::InvalidHost("a b".to_string());
        assert_eq!(err.to_string(), "invalid host: \"a b\"");
    }
}
