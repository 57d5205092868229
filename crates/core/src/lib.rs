//! Core qpdf invocation layer: typed options, argument assembly, and subprocess execution.
//!
//! This crate wraps the external `qpdf` binary for encrypting, decrypting, and
//! inspecting PDFs, with no CLI or UI dependencies.

pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod exec;
pub mod info;
pub mod types;
mod util;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use error::{QpdfError, Result};
pub use exec::{QPDF_BIN_ENV, qpdf_binary, run_qpdf};
pub use info::info;
pub use types::*;
