use clap::{Args, Parser, Subcommand};
use pdf_crypt_core::{ModifyPermission, PrintPermission, YesNo};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdf-crypt",
    about = "Encrypt, decrypt, and inspect PDF files with qpdf",
    long_about = "Encrypt, decrypt, and inspect PDF encryption by driving the qpdf command-line tool. Without --output the resulting PDF is streamed to stdout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output machine-readable JSON to stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging (sets RUST_LOG=debug if not already set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a PDF file
    Encrypt {
        /// Path to the PDF file to encrypt
        input: PathBuf,

        /// Output path for the encrypted PDF (default: raw PDF bytes to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password for both the user and owner roles
        #[arg(
            short,
            long,
            conflicts_with_all = ["user_password", "owner_password"]
        )]
        password: Option<String>,

        /// User password (must be paired with --owner-password)
        #[arg(long)]
        user_password: Option<String>,

        /// Owner password (must be paired with --user-password)
        #[arg(long)]
        owner_password: Option<String>,

        /// Encryption key length in bits (40, 128, or 256)
        #[arg(short, long, default_value_t = 256)]
        key_length: u16,

        /// Fail if the output file already exists instead of replacing it
        #[arg(long)]
        no_overwrite: bool,

        /// Treat qpdf warnings as harmless instead of failing on them
        #[arg(long)]
        ignore_warnings: bool,

        #[command(flatten)]
        restrictions: RestrictionArgs,
    },

    /// Remove encryption from a PDF file
    Decrypt {
        /// Path to the encrypted PDF file
        input: PathBuf,

        /// Output path for the decrypted PDF (default: raw PDF bytes to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password the file was encrypted with
        #[arg(short, long)]
        password: Option<String>,

        /// Fail if the output file already exists instead of replacing it
        #[arg(long)]
        no_overwrite: bool,
    },

    /// Show a PDF's encryption metadata
    Info {
        /// Path to the PDF file to inspect
        input: PathBuf,

        /// Password, if the file is encrypted
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Viewer restrictions applied while encrypting, mirroring qpdf's own flags.
#[derive(Args)]
pub struct RestrictionArgs {
    /// Restrict text extraction for accessibility (y|n)
    #[arg(long, value_name = "y|n")]
    pub accessibility: Option<YesNo>,

    /// Restrict commenting and annotation (y|n)
    #[arg(long, value_name = "y|n")]
    pub annotate: Option<YesNo>,

    /// Restrict document assembly (y|n)
    #[arg(long, value_name = "y|n")]
    pub assemble: Option<YesNo>,

    /// Leave the metadata stream unencrypted
    #[arg(long)]
    pub cleartext_metadata: bool,

    /// Restrict text and graphics extraction (y|n)
    #[arg(long, value_name = "y|n")]
    pub extract: Option<YesNo>,

    /// Restrict form-field filling and signing (y|n)
    #[arg(long, value_name = "y|n")]
    pub form: Option<YesNo>,

    /// Restrict document modification (all|annotate|assembly|form|none|y|n)
    #[arg(long, value_name = "KIND")]
    pub modify: Option<ModifyPermission>,

    /// Restrict modifications not covered by the other flags (y|n)
    #[arg(long, value_name = "y|n")]
    pub modify_other: Option<YesNo>,

    /// Restrict printing (full|low|none|y|n)
    #[arg(long, value_name = "LEVEL")]
    pub print: Option<PrintPermission>,

    /// Force AES on or off for 40/128-bit keys (y|n); 256-bit is always AES
    #[arg(long, value_name = "y|n")]
    pub use_aes: Option<YesNo>,
}

impl RestrictionArgs {
    /// Collapses an all-unset flag block to `None`, so the encryption
    /// invocation carries no restriction section at all.
    pub fn into_restrictions(self) -> Option<pdf_crypt_core::Restrictions> {
        let restrictions = pdf_crypt_core::Restrictions {
            accessibility: self.accessibility,
            annotate: self.annotate,
            assemble: self.assemble,
            cleartext_metadata: self.cleartext_metadata,
            extract: self.extract,
            form: self.form,
            modify: self.modify,
            modify_other: self.modify_other,
            print: self.print,
            use_aes: self.use_aes,
        };
        (restrictions != pdf_crypt_core::Restrictions::default()).then_some(restrictions)
    }
}
