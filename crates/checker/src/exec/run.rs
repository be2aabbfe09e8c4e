// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn the target, feed it the script and collect its merged output.

use std::fs::File;
use std::io::ErrorKind;
use std::os::fd::OwnedFd;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::unix::pipe;
use tokio::process::{Child, ChildStdin, Command};

use super::error::RunError;
use super::result::RunOutcome;

/// Run `executable` with `script` on stdin, bounded by `timeout`.
///
/// Stdout and stderr share the write end of one pipe, so the captured
/// output keeps the interleaving the child produced. The script is written
/// in full and stdin closed while the output is drained concurrently; the
/// child is then reaped. If all of that does not finish before `timeout`
/// the run is reported as [`RunOutcome::TimedOut`].
///
/// The child is killed before returning in every case.
pub async fn run_script(
    executable: &Path,
    script: &str,
    timeout: Duration,
) -> Result<RunOutcome, RunError> {
    let (reader, writer) = std::io::pipe().map_err(RunError::Pipe)?;
    let stderr_writer = writer.try_clone().map_err(RunError::Pipe)?;

    let mut command = Command::new(executable);
    command
        .stdin(Stdio::piped())
        .stdout(writer)
        .stderr(stderr_writer)
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(|source| RunError::SpawnFailed {
        executable: executable.to_path_buf(),
        source,
    })?;
    // The command still owns our copies of the write end; EOF only arrives
    // once they are closed.
    drop(command);
    tracing::debug!(pid = child.id(), "target spawned");

    let output = pipe::Receiver::from_file(File::from(OwnedFd::from(reader)))
        .map_err(RunError::Pipe)?;
    let stdin = child.stdin.take();

    let exchange = exchange(&mut child, executable, stdin, output, script);
    let result = match tokio::time::timeout(timeout, exchange).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout = ?timeout, "target timed out");
            Ok(RunOutcome::TimedOut)
        }
    };

    stop(&mut child).await;
    result
}

/// Feed stdin and drain output concurrently, then reap the child.
async fn exchange(
    child: &mut Child,
    executable: &Path,
    stdin: Option<ChildStdin>,
    mut output: pipe::Receiver,
    script: &str,
) -> Result<RunOutcome, RunError> {
    let feed = async {
        if let Some(mut stdin) = stdin {
            match stdin.write_all(script.as_bytes()).await {
                Ok(()) => {}
                // Target exited without reading all of its input.
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    tracing::debug!("target closed stdin early");
                }
                Err(e) => return Err(RunError::Stdin(e)),
            }
        }
        tracing::debug!(bytes = script.len(), "stdin closed");
        Ok::<(), RunError>(())
    };

    let drain = async {
        let mut bytes = Vec::new();
        output.read_to_end(&mut bytes).await.map_err(RunError::Output)?;
        Ok::<Vec<u8>, RunError>(bytes)
    };

    let ((), bytes) = tokio::try_join!(feed, drain)?;

    let status = child.wait().await.map_err(|source| RunError::Wait {
        executable: executable.to_path_buf(),
        source,
    })?;
    let exit_code = status.code().unwrap_or(-1);
    tracing::debug!(exit_code, output_bytes = bytes.len(), "target exited");

    Ok(RunOutcome::Completed {
        output: String::from_utf8_lossy(&bytes).into_owned(),
        exit_code,
    })
}

/// Kill the child if it is still running and reap it.
async fn stop(child: &mut Child) {
    match child.start_kill() {
        Ok(()) => match child.wait().await {
            Ok(status) => tracing::debug!(%status, "target killed"),
            Err(e) => tracing::debug!(error = %e, "failed to reap killed target"),
        },
        // Already reaped.
        Err(e) => tracing::debug!(error = %e, "target already exited"),
    }
}
