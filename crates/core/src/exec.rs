//! Subprocess plumbing for driving the qpdf binary.

use std::ffi::{OsStr, OsString};
use std::process::Stdio;
use tokio::process::Command;

use crate::error::{QpdfError, Result};

/// Environment variable naming the qpdf binary to run instead of the
/// `qpdf` found on `PATH`.
pub const QPDF_BIN_ENV: &str = "PDF_CRYPT_QPDF";

/// Resolves the qpdf binary to invoke.
pub fn qpdf_binary() -> OsString {
    std::env::var_os(QPDF_BIN_ENV).unwrap_or_else(|| OsString::from("qpdf"))
}

/// Runs qpdf with the given argument vector and returns its captured stdout.
///
/// The process is spawned directly, no shell in between, so arguments never
/// need quoting. A non-zero exit fails with qpdf's stderr verbatim; so does
/// a zero exit that still wrote to stderr, because qpdf reports some warning
/// conditions that way. Invocations carrying `--no-warn --warning-exit-0`
/// never reach that second case.
#[tracing::instrument(skip(args), fields(args = args.len()))]
pub async fn run_qpdf(args: &[OsString]) -> Result<Vec<u8>> {
    run_tool(&qpdf_binary(), args).await
}

// Argument values are never logged; they can carry passwords.
pub(crate) async fn run_tool(bin: &OsStr, args: &[OsString]) -> Result<Vec<u8>> {
    let output = Command::new(bin)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|source| QpdfError::Spawn {
            bin: bin.to_string_lossy().into_owned(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    tracing::debug!(
        status = ?output.status.code(),
        stdout_len = output.stdout.len(),
        stderr_len = stderr.len(),
        "tool exited"
    );

    if !output.status.success() || !stderr.is_empty() {
        return Err(QpdfError::Qpdf { stderr });
    }

    Ok(output.stdout)
}
