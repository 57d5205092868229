//! Option records and value vocabularies for qpdf invocations.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{QpdfError, Result};

/// Encryption key length, in bits.
///
/// qpdf accepts exactly these three. 40-bit keys additionally require the
/// weak-crypto opt-in flag, which [`encrypt`](crate::encrypt) emits on its
/// own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum KeyLength {
    Bits40,
    Bits128,
    #[default]
    Bits256,
}

impl KeyLength {
    /// Returns the length in bits.
    pub fn as_u16(self) -> u16 {
        match self {
            KeyLength::Bits40 => 40,
            KeyLength::Bits128 => 128,
            KeyLength::Bits256 => 256,
        }
    }
}

impl TryFrom<u16> for KeyLength {
    type Error = QpdfError;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            40 => Ok(KeyLength::Bits40),
            128 => Ok(KeyLength::Bits128),
            256 => Ok(KeyLength::Bits256),
            other => Err(QpdfError::UnsupportedKeyLength(other)),
        }
    }
}

impl From<KeyLength> for u16 {
    fn from(value: KeyLength) -> Self {
        value.as_u16()
    }
}

/// Password configuration for encryption.
///
/// Deserializes from either a bare string (one password for both roles) or
/// a `{"user": .., "owner": ..}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Password {
    /// One password used for both the user and owner roles.
    Single(String),
    /// Distinct user and owner passwords.
    Pair { user: String, owner: String },
}

impl Password {
    /// Builds a user/owner pair, rejecting anything but both-present.
    ///
    /// This is the check for callers that collect the two halves from
    /// independently optional sources, such as CLI flags.
    pub fn pair(user: Option<String>, owner: Option<String>) -> Result<Self> {
        match (user, owner) {
            (Some(user), Some(owner)) => Ok(Password::Pair { user, owner }),
            _ => Err(QpdfError::IncompletePasswordPair),
        }
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Password::Single(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Password::Single(password.to_string())
    }
}

/// Two-state restriction value, rendered as qpdf's `y`/`n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
}

impl YesNo {
    pub fn as_str(self) -> &'static str {
        match self {
            YesNo::Yes => "y",
            YesNo::No => "n",
        }
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "y" => Ok(YesNo::Yes),
            "n" => Ok(YesNo::No),
            other => Err(format!("expected 'y' or 'n', got '{other}'")),
        }
    }
}

/// Value for qpdf's `--print` restriction.
///
/// The `y`/`n` forms only have meaning for 40-bit encryption; they are
/// passed through for qpdf to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintPermission {
    Full,
    Low,
    None,
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
}

impl PrintPermission {
    pub fn as_str(self) -> &'static str {
        match self {
            PrintPermission::Full => "full",
            PrintPermission::Low => "low",
            PrintPermission::None => "none",
            PrintPermission::Yes => "y",
            PrintPermission::No => "n",
        }
    }
}

impl FromStr for PrintPermission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "full" => Ok(PrintPermission::Full),
            "low" => Ok(PrintPermission::Low),
            "none" => Ok(PrintPermission::None),
            "y" => Ok(PrintPermission::Yes),
            "n" => Ok(PrintPermission::No),
            other => Err(format!(
                "expected one of full, low, none, y, n; got '{other}'"
            )),
        }
    }
}

/// Value for qpdf's `--modify` restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModifyPermission {
    All,
    Annotate,
    Assembly,
    Form,
    None,
    #[serde(rename = "y")]
    Yes,
    #[serde(rename = "n")]
    No,
}

impl ModifyPermission {
    pub fn as_str(self) -> &'static str {
        match self {
            ModifyPermission::All => "all",
            ModifyPermission::Annotate => "annotate",
            ModifyPermission::Assembly => "assembly",
            ModifyPermission::Form => "form",
            ModifyPermission::None => "none",
            ModifyPermission::Yes => "y",
            ModifyPermission::No => "n",
        }
    }
}

impl FromStr for ModifyPermission {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(ModifyPermission::All),
            "annotate" => Ok(ModifyPermission::Annotate),
            "assembly" => Ok(ModifyPermission::Assembly),
            "form" => Ok(ModifyPermission::Form),
            "none" => Ok(ModifyPermission::None),
            "y" => Ok(ModifyPermission::Yes),
            "n" => Ok(ModifyPermission::No),
            other => Err(format!(
                "expected one of all, annotate, assembly, form, none, y, n; got '{other}'"
            )),
        }
    }
}

/// Restrictions applied to the encrypted document.
///
/// Rendering into the argument vector follows field declaration order, so
/// the vector is deterministic no matter how the struct was put together.
/// Field names map one to one onto qpdf flags (`modify_other` becomes
/// `--modify-other`, and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Restrictions {
    pub accessibility: Option<YesNo>,
    pub annotate: Option<YesNo>,
    pub assemble: Option<YesNo>,
    /// Leave the metadata stream unencrypted. Rendered as a bare
    /// `--cleartext-metadata`; the flag takes no value.
    pub cleartext_metadata: bool,
    pub extract: Option<YesNo>,
    pub form: Option<YesNo>,
    pub modify: Option<ModifyPermission>,
    pub modify_other: Option<YesNo>,
    pub print: Option<PrintPermission>,
    /// Choose RC4 or AES for 40/128-bit keys. Suppressed at 256 bits,
    /// where AES is already implied.
    pub use_aes: Option<YesNo>,
}

impl Restrictions {
    /// Renders the set restrictions as qpdf flags, in field order.
    pub(crate) fn cli_flags(&self, key_length: KeyLength) -> Vec<String> {
        let mut flags = Vec::new();
        if let Some(value) = self.accessibility {
            flags.push(format!("--accessibility={}", value.as_str()));
        }
        if let Some(value) = self.annotate {
            flags.push(format!("--annotate={}", value.as_str()));
        }
        if let Some(value) = self.assemble {
            flags.push(format!("--assemble={}", value.as_str()));
        }
        if self.cleartext_metadata {
            flags.push("--cleartext-metadata".to_string());
        }
        if let Some(value) = self.extract {
            flags.push(format!("--extract={}", value.as_str()));
        }
        if let Some(value) = self.form {
            flags.push(format!("--form={}", value.as_str()));
        }
        if let Some(value) = self.modify {
            flags.push(format!("--modify={}", value.as_str()));
        }
        if let Some(value) = self.modify_other {
            flags.push(format!("--modify-other={}", value.as_str()));
        }
        if let Some(value) = self.print {
            flags.push(format!("--print={}", value.as_str()));
        }
        if let Some(value) = self.use_aes
            && key_length != KeyLength::Bits256
        {
            flags.push(format!("--use-aes={}", value.as_str()));
        }
        flags
    }
}

/// Options for [`encrypt`](crate::encrypt).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EncryptOptions {
    /// The PDF to encrypt.
    pub input: PathBuf,
    /// Where the encrypted PDF is written. `None` returns the bytes
    /// instead.
    pub output: Option<PathBuf>,
    /// Allow replacing an existing file at `output`.
    pub overwrite: bool,
    pub key_length: KeyLength,
    /// `None` produces a file that opens without any password.
    pub password: Option<Password>,
    pub restrictions: Option<Restrictions>,
    /// Tell qpdf to suppress warnings and exit 0 on them, so warning
    /// conditions do not fail the invocation.
    pub ignore_warnings: bool,
}

impl Default for EncryptOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            overwrite: true,
            key_length: KeyLength::default(),
            password: None,
            restrictions: None,
            ignore_warnings: false,
        }
    }
}

impl EncryptOptions {
    /// Options for encrypting `input` with the defaults: 256-bit key, no
    /// password, no restrictions, overwrite allowed.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

/// Options for [`decrypt`](crate::decrypt).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecryptOptions {
    /// The PDF to decrypt.
    pub input: PathBuf,
    /// Where the decrypted PDF is written. `None` returns the bytes
    /// instead.
    pub output: Option<PathBuf>,
    /// Password the file was encrypted with, if any.
    pub password: Option<String>,
    /// Allow replacing an existing file at `output`.
    pub overwrite: bool,
}

impl Default for DecryptOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: None,
            password: None,
            overwrite: true,
        }
    }
}

impl DecryptOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

/// Options for [`info`](crate::info).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InfoOptions {
    /// The PDF to inspect.
    pub input: PathBuf,
    /// Password, if the file is encrypted.
    pub password: Option<String>,
}

impl InfoOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_length_accepts_the_three_qpdf_sizes() {
        assert_eq!(KeyLength::try_from(40).unwrap(), KeyLength::Bits40);
        assert_eq!(KeyLength::try_from(128).unwrap(), KeyLength::Bits128);
        assert_eq!(KeyLength::try_from(256).unwrap(), KeyLength::Bits256);
        assert_eq!(KeyLength::default(), KeyLength::Bits256);
    }

    #[test]
    fn key_length_rejects_other_sizes() {
        let err = KeyLength::try_from(64).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported key length: 64 (expected 40, 128, or 256)"
        );
    }

    #[test]
    fn key_length_serde_uses_bits() {
        let parsed: KeyLength = serde_json::from_str("128").unwrap();
        assert_eq!(parsed, KeyLength::Bits128);
        assert_eq!(serde_json::to_string(&KeyLength::Bits256).unwrap(), "256");
        assert!(serde_json::from_str::<KeyLength>("64").is_err());
    }

    #[test]
    fn password_deserializes_from_string_or_object() {
        let single: Password = serde_json::from_str(r#""hunter2""#).unwrap();
        assert_eq!(single, Password::Single("hunter2".to_string()));

        let pair: Password = serde_json::from_str(r#"{"user":"u","owner":"o"}"#).unwrap();
        assert_eq!(
            pair,
            Password::Pair {
                user: "u".to_string(),
                owner: "o".to_string()
            }
        );
    }

    #[test]
    fn password_pair_requires_both_halves() {
        let err = Password::pair(Some("u".to_string()), None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please specify both owner and user passwords"
        );
        assert!(Password::pair(None, Some("o".to_string())).is_err());
        assert!(Password::pair(None, None).is_err());

        let ok = Password::pair(Some("u".to_string()), Some("o".to_string())).unwrap();
        assert_eq!(
            ok,
            Password::Pair {
                user: "u".to_string(),
                owner: "o".to_string()
            }
        );
    }

    #[test]
    fn restriction_flags_follow_field_order() {
        let restrictions = Restrictions {
            print: Some(PrintPermission::None),
            accessibility: Some(YesNo::No),
            use_aes: Some(YesNo::Yes),
            ..Restrictions::default()
        };
        assert_eq!(
            restrictions.cli_flags(KeyLength::Bits128),
            vec!["--accessibility=n", "--print=none", "--use-aes=y"]
        );
    }

    #[test]
    fn use_aes_is_suppressed_at_256_bits() {
        let restrictions = Restrictions {
            use_aes: Some(YesNo::Yes),
            ..Restrictions::default()
        };
        assert!(restrictions.cli_flags(KeyLength::Bits256).is_empty());
        assert_eq!(
            restrictions.cli_flags(KeyLength::Bits40),
            vec!["--use-aes=y"]
        );
    }

    #[test]
    fn cleartext_metadata_renders_as_bare_flag() {
        let restrictions = Restrictions {
            cleartext_metadata: true,
            modify: Some(ModifyPermission::Assembly),
            ..Restrictions::default()
        };
        assert_eq!(
            restrictions.cli_flags(KeyLength::Bits256),
            vec!["--cleartext-metadata", "--modify=assembly"]
        );
    }

    #[test]
    fn permission_values_render_as_qpdf_tokens() {
        assert_eq!(PrintPermission::Full.as_str(), "full");
        assert_eq!(PrintPermission::Yes.as_str(), "y");
        assert_eq!(ModifyPermission::All.as_str(), "all");
        assert_eq!(ModifyPermission::Assembly.as_str(), "assembly");
        assert_eq!(
            "low".parse::<PrintPermission>().unwrap(),
            PrintPermission::Low
        );
        assert_eq!(
            "annotate".parse::<ModifyPermission>().unwrap(),
            ModifyPermission::Annotate
        );
        assert!("maybe".parse::<YesNo>().is_err());
    }

    #[test]
    fn encrypt_options_deserialize_from_camel_case() {
        let options: EncryptOptions = serde_json::from_str(
            r#"{
                "input": "a.pdf",
                "keyLength": 40,
                "password": {"user": "u", "owner": "o"},
                "restrictions": {"useAes": "y", "cleartextMetadata": true},
                "ignoreWarnings": true
            }"#,
        )
        .unwrap();

        assert_eq!(options.input, PathBuf::from("a.pdf"));
        assert_eq!(options.key_length, KeyLength::Bits40);
        assert!(options.overwrite, "overwrite defaults on");
        assert!(options.ignore_warnings);
        let restrictions = options.restrictions.unwrap();
        assert!(restrictions.cleartext_metadata);
        assert_eq!(restrictions.use_aes, Some(YesNo::Yes));
    }
}
