//! JSON output formats.

use serde::Serialize;

#[derive(Serialize)]
pub struct EncryptJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub output: String,
    pub key_length: u16,
}

#[derive(Serialize)]
pub struct DecryptJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub output: String,
}

#[derive(Serialize)]
pub struct InfoJson<'a> {
    pub status: &'a str,
    pub command: &'a str,
    pub input: String,
    pub encryption: String,
}

#[derive(Serialize)]
pub struct ErrorJson<'a> {
    pub status: &'a str,
    pub error: String,
    pub causes: Vec<String>,
}
