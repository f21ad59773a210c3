//! Subprocess execution for the rclone binary
//!
//! Two modes: captured (output collected, bounded by a deadline) for
//! listings and capability probes, and streamed (stdio inherited, no
//! timeout) for the long-running sync, where a fixed deadline would be
//! wrong given unbounded data volume.

use crate::types::BackupError;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Deadline for captured-mode commands
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// How often a running captured-mode child is polled for exit
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Result of a captured-mode invocation.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// Exit code; `None` when the process was killed by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Convention: zero exit code means success. The runner itself never
    /// interprets this; callers decide.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Executes the rclone binary with caller-supplied argument vectors.
///
/// The runner never retries and never inspects arguments; retry policy, if
/// any, belongs to rclone itself.
#[derive(Debug, Clone)]
pub struct RcloneRunner {
    binary: PathBuf,
    timeout: Duration,
}

impl RcloneRunner {
    /// Create a runner for a resolved binary path.
    pub fn new(binary: PathBuf) -> Self {
        Self {
            binary,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the captured-mode deadline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The binary this runner invokes.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Run to completion, collecting stdout and stderr.
    ///
    /// The child is polled against a deadline; on expiry it is killed and
    /// `CommandTimeout` is returned with no partial output.
    pub fn run_captured(&self, args: &[&str]) -> Result<CapturedOutput, BackupError> {
        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(map_spawn_error)?;

        // Drain both pipes on their own threads so a chatty child cannot
        // deadlock against a full pipe buffer while we poll for exit.
        let stdout_handle = spawn_drain(child.stdout.take());
        let stderr_handle = spawn_drain(child.stderr.take());

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait()? {
                Some(status) => break status,
                None => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        let _ = stdout_handle.join();
                        let _ = stderr_handle.join();
                        return Err(BackupError::CommandTimeout {
                            seconds: self.timeout.as_secs(),
                        });
                    }
                    std::thread::sleep(POLL_INTERVAL);
                }
            }
        };

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();

        Ok(CapturedOutput {
            status: status.code(),
            stdout,
            stderr,
        })
    }

    /// Run to completion with stdio inherited from this process.
    ///
    /// Output passes straight through to the terminal; no timeout applies.
    /// Returns the exit code (`None` when signal-terminated).
    pub fn run_streamed(&self, args: &[&str]) -> Result<Option<i32>, BackupError> {
        let status = Command::new(&self.binary)
            .args(args)
            .status()
            .map_err(map_spawn_error)?;
        Ok(status.code())
    }
}

fn map_spawn_error(err: std::io::Error) -> BackupError {
    if err.kind() == ErrorKind::NotFound {
        BackupError::BinaryNotFound
    } else {
        BackupError::Spawn(err)
    }
}

fn spawn_drain<R: Read + Send + 'static>(
    source: Option<R>,
) -> std::thread::JoinHandle<String> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut reader) = source {
            let _ = reader.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).into_owned()
    })
}
