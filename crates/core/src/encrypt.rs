//! PDF encryption via qpdf's `--encrypt` mode.

use std::ffi::OsString;

use crate::error::Result;
use crate::exec::run_qpdf;
use crate::types::{EncryptOptions, KeyLength, Password};
use crate::util::{ensure_input_file, ensure_output_writable};

/// Encrypts a PDF according to `options`.
///
/// Returns qpdf's captured stdout: the encrypted document when no output
/// path was given, typically empty when qpdf wrote to a file.
///
/// Validation runs before qpdf is spawned, in a fixed order: empty input,
/// then missing input file, then an output that already exists while
/// overwriting is disallowed.
#[tracing::instrument(
    skip(options),
    fields(input = %options.input.display(), key_length = options.key_length.as_u16())
)]
pub async fn encrypt(options: &EncryptOptions) -> Result<Vec<u8>> {
    let args = build_args(options)?;
    run_qpdf(&args).await
}

/// Assembles the qpdf argument vector.
///
/// Order is load-bearing: qpdf only honors `--allow-weak-crypto` ahead of
/// `--encrypt`, and everything between `--encrypt` and `--` belongs to the
/// encryption sub-command.
fn build_args(options: &EncryptOptions) -> Result<Vec<OsString>> {
    ensure_input_file(&options.input)?;
    ensure_output_writable(options.output.as_deref(), options.overwrite)?;

    let mut args: Vec<OsString> = Vec::new();

    // qpdf 11+ refuses to write 40-bit keys without an explicit opt-in.
    if options.key_length == KeyLength::Bits40 {
        args.push("--allow-weak-crypto".into());
    }

    if options.ignore_warnings {
        args.push("--no-warn".into());
        args.push("--warning-exit-0".into());
    }

    args.push("--encrypt".into());

    // User then owner. An absent password still occupies both positions so
    // the key length lands where qpdf expects it.
    match &options.password {
        Some(Password::Pair { user, owner }) => {
            args.push(user.into());
            args.push(owner.into());
        }
        Some(Password::Single(password)) => {
            args.push(password.into());
            args.push(password.into());
        }
        None => {
            args.push("".into());
            args.push("".into());
        }
    }

    args.push(options.key_length.as_u16().to_string().into());

    if let Some(restrictions) = &options.restrictions {
        for flag in restrictions.cli_flags(options.key_length) {
            args.push(flag.into());
        }
    }

    args.push("--".into());
    args.push(options.input.clone().into_os_string());

    // Paths are compared as given; nothing is canonicalized.
    match &options.output {
        Some(output) if *output == options.input && options.overwrite => {
            args.push("--replace-input".into());
        }
        Some(output) => args.push(output.clone().into_os_string()),
        None => args.push("-".into()),
    }

    Ok(args)
}
