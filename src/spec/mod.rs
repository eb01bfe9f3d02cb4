// SPDX-License-Identifier: MIT

//! The `spec` module defines the declarative gitignore specification: template [`Source`]s,
//! custom patterns & the schema-versioned [`Config`] document holding them.

pub mod config;
pub mod source;

pub use config::Config;
pub use source::Source;

/// Schema version of the config document supported by this build.
///
/// Documents carrying any other version are rejected on load to enable forward & backward
/// compatibility.
pub const SCHEMA_VERSION: u32 = 1;
