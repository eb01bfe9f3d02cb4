// SPDX-License-Identifier: MIT

//! The `errors` module defines `ignoreit`'s [`Error`] type, [`ErrorKind`] with their accompanying trait & method implementations.

use std::error::Error as StdErr;
use std::fmt::{Display, Formatter, Result};

/// `enum` containing the possible kinds of errors for `ignoreit`.
#[allow(dead_code)]
#[derive(Debug)]
pub enum ErrorKind {
    /// An empty string was supplied as the config file path.
    EmptyConfigPath,

    /// The loaded config document carries a schema version other than the supported one.
    SchemaMismatch {
        /// Schema version found in the loaded document.
        found: u32,

        /// Schema version supported by this build.
        expected: u32,
    },

    /// Unknown completion shell.
    UnknownCompletionShell,

    /// Error type for arbitrary (no fixed rule) errors.
    Other,
}

/// `struct` containing `ignoreit`'s error content.
#[derive(Debug)]
pub struct Error {
    /// The kind of error as enumerated in [`ErrorKind`].
    kind: ErrorKind,

    /// The message for an [`ErrorKind::Other`] error.
    other_message: String,

    /// Optional field containing error resulting in this error.
    error: Option<Box<dyn StdErr + Send + Sync>>,
}

/// Method implementations for [`Error`].
impl Error {
    /// Creates a new [`Error`] from a supplied [`ErrorKind`] & `Into<Box<dyn std::error::Error>>`
    /// (type that can be converted into a boxable error struct).
    #[allow(dead_code)]
    pub fn new<T>(error_kind: ErrorKind, error_source: T) -> Self
    where
        T: Into<Box<dyn StdErr + Send + Sync>>,
    {
        Self {
            kind: error_kind,
            other_message: "".to_owned(),
            error: Some(error_source.into()),
        }
    }

    /// Returns the error's [`ErrorKind`].
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self.kind() {
            ErrorKind::EmptyConfigPath => {
                write!(f, "Cannot specify an empty string for the config file path")
            }
            ErrorKind::SchemaMismatch { found, expected } => write!(
                f,
                "Schema version {} does not match expected version {}",
                found, expected
            ),
            ErrorKind::UnknownCompletionShell => write!(f, "Unknown completion shell"),
            ErrorKind::Other => {
                if self.other_message.is_empty() {
                    write!(f, "User defined error with no payload encountered")
                } else {
                    write!(f, "{}", self.other_message)
                }
            }
        }
    }
}

impl StdErr for Error {
    fn source(&self) -> Option<&(dyn StdErr + 'static)> {
        match &self.error {
            Some(err) => Some(&**err),
            None => None,
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self {
            kind: error_kind,
            other_message: "".to_owned(),
            error: None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self {
            kind: ErrorKind::Other,
            other_message: message,
            error: None,
        }
    }
}
