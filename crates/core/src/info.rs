//! Encryption metadata queries via qpdf's `--show-encryption`.

use std::ffi::OsString;

use crate::error::Result;
use crate::exec::run_qpdf;
use crate::types::InfoOptions;
use crate::util::ensure_input_file;

const NOT_ENCRYPTED: &str = "File is not encrypted";

/// Reports a PDF's encryption metadata.
///
/// Returns qpdf's report trimmed of surrounding whitespace. A file without
/// encryption always yields exactly `"File is not encrypted"`, whether qpdf
/// said so itself or printed nothing at all. Encrypted files yield the full
/// report, which callers probe for lines like `file encryption method:
/// AESv3`.
#[tracing::instrument(skip(options), fields(input = %options.input.display()))]
pub async fn info(options: &InfoOptions) -> Result<String> {
    let args = build_args(options)?;
    let stdout = run_qpdf(&args).await?;
    Ok(summarize(&stdout))
}

// --show-encryption takes the input as a positional, no -- separator.
fn build_args(options: &InfoOptions) -> Result<Vec<OsString>> {
    ensure_input_file(&options.input)?;

    let mut args: Vec<OsString> = vec!["--show-encryption".into()];

    if let Some(password) = &options.password {
        args.push(format!("--password={password}").into());
    }

    args.push(options.input.clone().into_os_string());
    Ok(args)
}

fn summarize(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        NOT_ENCRYPTED.to_string()
    } else {
        trimmed.to_string()
    }
}
