//! Subprocess runner for the system ping utility.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, Command};

use super::{Host, PingError};

/// Echo requests sent per check.
pub const PING_COUNT: u32 = 4;

/// Upper bound on how long one ping run may take, output included.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

/// Runs the ping utility and collects its stdout lines.
#[derive(Debug, Clone)]
pub struct PingRunner {
    program: String,
    deadline: Duration,
}

impl PingRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            deadline: DEFAULT_DEADLINE,
        }
    }

    #[cfg(test)]
    fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `ping` against `host` and return every line it wrote to stdout.
    ///
    /// A non-zero exit is only an error when nothing was written to stdout;
    /// total loss still yields a summary worth reporting. The child is killed
    /// and reaped on every failure path.
    pub async fn run(&self, host: &Host) -> Result<Vec<String>, PingError> {
        let count = PING_COUNT.to_string();
        let count_flag = if cfg!(target_os = "windows") { "-n" } else { "-c" };

        tracing::info!("Running {} {} {} {}", self.program, count_flag, count, host);

        let mut child = Command::new(&self.program)
            .args([count_flag, count.as_str(), host.as_str()])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PingError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        let result = tokio::time::timeout(self.deadline, collect_output(&mut child)).await;

        match result {
            Ok(Ok(lines)) => Ok(lines),
            Ok(Err(e)) => {
                let _ = child.kill().await;
                Err(e)
            }
            Err(_) => {
                tracing::warn!("{} against {} exceeded {:?}, killing it", self.program, host, self.deadline);
                let _ = child.kill().await;
                Err(PingError::Timeout(self.deadline))
            }
        }
    }
}

/// Strip the line terminator and decode, replacing invalid UTF-8.
fn decode_line(mut raw: Vec<u8>) -> String {
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }
    String::from_utf8_lossy(&raw).into_owned()
}

/// Read stdout line by line and stderr in full, then reap the child.
async fn collect_output(child: &mut Child) -> Result<Vec<String>, PingError> {
    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| std::io::Error::other("stdout was not captured"))?;
    let mut stderr = child
        .stderr
        .take()
        .ok_or_else(|| std::io::Error::other("stderr was not captured"))?;

    // Both pipes are drained together so a full stderr pipe cannot stall the child
    let read_stdout = async {
        let mut segments = BufReader::new(stdout).split(b'\n');
        let mut out = Vec::new();
        while let Some(raw) = segments.next_segment().await? {
            out.push(decode_line(raw));
        }
        Ok::<_, std::io::Error>(out)
    };
    let read_stderr = async {
        let mut buf = Vec::new();
        stderr
            .read_to_end(&mut buf)
            .await
            .map(|_| String::from_utf8_lossy(&buf).into_owned())
    };

    let (lines, stderr_text) = tokio::join!(read_stdout, read_stderr);
    let lines = lines?;
    let stderr_text = stderr_text.unwrap_or_default();

    let status = child.wait().await?;

    if !status.success() {
        if lines.is_empty() {
            return Err(PingError::Exited {
                status: status.to_string(),
                stderr: stderr_text.trim().to_string(),
            });
        }
        tracing::warn!("ping exited with {}, formatting {} captured lines", status, lines.len());
    }

    Ok(lines)
}
