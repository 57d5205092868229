//! PDF decryption via qpdf's `--decrypt` mode.

use std::ffi::OsString;

use crate::error::Result;
use crate::exec::run_qpdf;
use crate::types::DecryptOptions;
use crate::util::{ensure_input_file, ensure_output_writable};

/// Removes encryption from a PDF.
///
/// Returns qpdf's captured stdout: the decrypted document when no output
/// path was given, typically empty when qpdf wrote to a file.
#[tracing::instrument(skip(options), fields(input = %options.input.display()))]
pub async fn decrypt(options: &DecryptOptions) -> Result<Vec<u8>> {
    let args = build_args(options)?;
    run_qpdf(&args).await
}

fn build_args(options: &DecryptOptions) -> Result<Vec<OsString>> {
    ensure_input_file(&options.input)?;
    ensure_output_writable(options.output.as_deref(), options.overwrite)?;

    let mut args: Vec<OsString> = vec!["--decrypt".into()];

    if let Some(password) = &options.password {
        args.push(format!("--password={password}").into());
    }

    args.push("--".into());
    args.push(options.input.clone().into_os_string());

    match &options.output {
        Some(output) => args.push(output.clone().into_os_string()),
        None => args.push("-".into()),
    }

    Ok(args)
}
