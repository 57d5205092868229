//! Encrypt, decrypt, and info command implementations.

use anyhow::{Context, Result, bail};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use pdf_crypt_core::{DecryptOptions, EncryptOptions, InfoOptions, KeyLength, Password};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::RestrictionArgs;
use crate::json::{DecryptJson, EncryptJson, InfoJson};
use crate::util::format_bytes;

#[allow(clippy::too_many_arguments)]
pub fn encrypt_pdf(
    input: PathBuf,
    output: Option<PathBuf>,
    password: Option<String>,
    user_password: Option<String>,
    owner_password: Option<String>,
    key_length: u16,
    no_overwrite: bool,
    ignore_warnings: bool,
    restrictions: RestrictionArgs,
    json: bool,
) -> Result<()> {
    if json && output.is_none() {
        bail!("--json requires --output; without it stdout carries the PDF itself");
    }

    eprintln!("{}", style("==> Encrypting PDF").cyan().bold());

    let key_length = KeyLength::try_from(key_length)?;
    let password = match (password, user_password, owner_password) {
        (Some(shared), _, _) => Some(Password::from(shared)),
        (None, None, None) => None,
        (None, user, owner) => Some(Password::pair(user, owner)?),
    };

    let options = EncryptOptions {
        input: input.clone(),
        output: output.clone(),
        overwrite: !no_overwrite,
        key_length,
        password,
        restrictions: restrictions.into_restrictions(),
        ignore_warnings,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Encrypting {}", style(input.display()).cyan()));

    let rt = tokio::runtime::Runtime::new()?;
    let bytes = rt.block_on(pdf_crypt_core::encrypt(&options))?;

    match &output {
        Some(path) => {
            spinner.finish_with_message(format!(
                "[OK] Wrote encrypted PDF to {}",
                style(path.display()).cyan()
            ));

            eprintln!(
                "\n{} {}",
                style("[SUCCESS]").green().bold(),
                style("Encrypted successfully").cyan()
            );

            if json {
                let payload = EncryptJson {
                    status: "ok",
                    command: "encrypt",
                    input: input.display().to_string(),
                    output: path.display().to_string(),
                    key_length: key_length.as_u16(),
                };
                println!("{}", serde_json::to_string(&payload)?);
            } else {
                println!("{}", path.display());
            }
        }
        None => {
            spinner.finish_with_message(format!(
                "[OK] Encrypted ({})",
                style(format_bytes(bytes.len())).cyan()
            ));

            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .context("Failed to write PDF to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub fn decrypt_pdf(
    input: PathBuf,
    output: Option<PathBuf>,
    password: Option<String>,
    no_overwrite: bool,
    json: bool,
) -> Result<()> {
    if json && output.is_none() {
        bail!("--json requires --output; without it stdout carries the PDF itself");
    }

    eprintln!("{}", style("==> Decrypting PDF").cyan().bold());

    let options = DecryptOptions {
        input: input.clone(),
        output: output.clone(),
        password,
        overwrite: !no_overwrite,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Decrypting {}", style(input.display()).cyan()));

    let rt = tokio::runtime::Runtime::new()?;
    let bytes = rt.block_on(pdf_crypt_core::decrypt(&options))?;

    match &output {
        Some(path) => {
            spinner.finish_with_message(format!(
                "[OK] Wrote decrypted PDF to {}",
                style(path.display()).cyan()
            ));

            eprintln!(
                "\n{} {}",
                style("[SUCCESS]").green().bold(),
                style("Decrypted successfully").cyan()
            );

            if json {
                let payload = DecryptJson {
                    status: "ok",
                    command: "decrypt",
                    input: input.display().to_string(),
                    output: path.display().to_string(),
                };
                println!("{}", serde_json::to_string(&payload)?);
            } else {
                println!("{}", path.display());
            }
        }
        None => {
            spinner.finish_with_message(format!(
                "[OK] Decrypted ({})",
                style(format_bytes(bytes.len())).cyan()
            ));

            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(&bytes)
                .context("Failed to write PDF to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

pub fn info_pdf(input: PathBuf, password: Option<String>, json: bool) -> Result<()> {
    eprintln!("{}", style("==> Reading encryption metadata").cyan().bold());

    let options = InfoOptions {
        input: input.clone(),
        password,
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Inspecting {}", style(input.display()).cyan()));

    let rt = tokio::runtime::Runtime::new()?;
    let report = rt.block_on(pdf_crypt_core::info(&options))?;

    spinner.finish_and_clear();

    if json {
        let payload = InfoJson {
            status: "ok",
            command: "info",
            input: input.display().to_string(),
            encryption: report,
        };
        println!("{}", serde_json::to_string(&payload)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
