// SPDX-License-Identifier: MIT

//! The `config` module defines the [`Config`] document: the ordered collection of [`Source`]s,
//! custom patterns & schema version persisted as YAML, with its load/save/clean operations.

use std::error::Error as StdErr;
use std::fs;
use std::io::ErrorKind as IoErrorKind;

use serde::{Deserialize, Serialize};

use super::source::Source;
use super::SCHEMA_VERSION;
use crate::errors::{Error, ErrorKind};

/// `struct` encapsulating a specification of gitignore entries & their sources.
///
/// It includes a list of custom strings usable as additional gitignore patterns. The schema is
/// versioned to enable forward & backward compatibility.
#[derive(Deserialize, Serialize, PartialEq, Debug, Clone)]
pub struct Config {
    /// Template sources, ordered by first creation until cleaned.
    pub sources: Vec<Source>,

    /// Free-form gitignore patterns, appended verbatim on generation.
    ///
    /// Users are responsible for proper maintenance of this list; it is never deduped nor
    /// reordered.
    pub custom: Vec<String>,

    /// Schema version of this document.
    pub schema_version: u32,
}

/// [`Default`] trait implementation for [`Config`].
impl Default for Config {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            custom: Vec::new(),
            schema_version: SCHEMA_VERSION,
        }
    }
}

/// Method implementations for [`Config`].
impl Config {
    /// Grabs a modifiable handle to a [`Source`] if it exists in this config.
    ///
    /// If a source of the repo & branch name doesn't exist, or either key part is empty, `None`
    /// is returned instead.
    pub fn get_source(&mut self, repo: &str, branch: &str) -> Option<&mut Source> {
        if repo.is_empty() || branch.is_empty() {
            return None;
        }

        self.sources
            .iter_mut()
            .find(|source| source.repo == repo && source.branch == branch)
    }

    /// Creates a modifiable handle to a [`Source`], appending it if it doesn't yet exist.
    ///
    /// Otherwise, the existing source's handle is returned without modifying this config. Empty
    /// key parts yield `None`.
    pub fn create_source(&mut self, repo: &str, branch: &str) -> Option<&mut Source> {
        if repo.is_empty() || branch.is_empty() {
            return None;
        }

        // A `get_source` hit cannot hold its borrow across the miss-path push, hence the index
        // scan.
        let index = match self
            .sources
            .iter()
            .position(|source| source.repo == repo && source.branch == branch)
        {
            Some(index) => index,
            None => {
                self.sources.push(Source::new(repo, branch));
                self.sources.len() - 1
            }
        };

        self.sources.get_mut(index)
    }

    /// Writes this config to disk in YAML format for readability.
    ///
    /// Prior to the write, the config is deduped & scrubbed; sources with no entries are removed.
    /// Serialization & I/O failures propagate to the caller.
    pub fn save(&mut self, config_filename: &str) -> Result<(), Box<dyn StdErr>> {
        self.clean();

        let document = serde_yaml::to_string(&self)?;
        fs::write(config_filename, document)?;
        debug!("Saved config to {}", config_filename);

        Ok(())
    }

    /// Deserializes a [`Config`] from the document at `config_filename`.
    ///
    /// A missing file yields the default (empty) config; this is not an error. A document whose
    /// schema version differs from the tool's [`SCHEMA_VERSION`](super::SCHEMA_VERSION) is
    /// rejected.
    pub fn load(config_filename: &str) -> Result<Config, Box<dyn StdErr>> {
        if config_filename.is_empty() {
            return Err(Box::new(Error::from(ErrorKind::EmptyConfigPath)));
        }

        let contents = match fs::read_to_string(config_filename) {
            Ok(contents) => contents,
            Err(err) if err.kind() == IoErrorKind::NotFound => {
                info!("No config file at {}, starting empty", config_filename);
                return Ok(Config::default());
            }
            Err(err) => return Err(Box::new(err)),
        };

        let config: Config = serde_yaml::from_str(&contents)?;
        config.check_schema()?;

        Ok(config)
    }

    /// Normalizes this config ahead of persistence.
    ///
    /// Sources are sorted by (repo, branch) & individually cleaned; any source left without
    /// entries is dropped, survivors keep their relative order.
    pub fn clean(&mut self) {
        self.sources.sort_by(|a, b| a.cmp_key(b));
        for source in &mut self.sources {
            source.clean();
        }
        self.sources.retain(|source| !source.entries.is_empty());
    }

    /// Validates this config's schema version against the supported one.
    fn check_schema(&self) -> Result<(), Box<dyn StdErr>> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(Box::new(Error::from(ErrorKind::SchemaMismatch {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            })));
        }

        Ok(())
    }
}
