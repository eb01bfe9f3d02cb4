// SPDX-License-Identifier: MIT

//! The `app` module defines the command dispatch: each operation is an explicit
//! load → mutate → save (or load → generate) transaction over the template config document.

use std::error::Error as StdErr;

use crate::config::{Operation, RuntimeConfig};
use crate::generate::inflate;
use crate::network::RawGitHubHost;
use crate::spec::Config;

/// Executes the operation selected by the user.
pub fn run(runtime_config: RuntimeConfig) -> Result<(), Box<dyn StdErr>> {
    match runtime_config.operation {
        Operation::AddEntries => add_entries(&runtime_config),
        Operation::RemoveEntries => remove_entries(&runtime_config),
        Operation::GenerateIgnoreFile => generate_ignore_file(&runtime_config),
        Operation::GenerateCompletions => runtime_config.generate_completions(),
        Operation::Else => Ok(()),
    }
}

/// Adds the requested entries to the (repo, branch) source, creating it on first use.
///
/// Entries the remote host does not serve are skipped without failing the command.
fn add_entries(runtime_config: &RuntimeConfig) -> Result<(), Box<dyn StdErr>> {
    let mut config = Config::load(&runtime_config.config_file)?;

    let host = RawGitHubHost;
    if let Some(source) = config.create_source(&runtime_config.repo, &runtime_config.branch) {
        for entry in &runtime_config.entries {
            source.add_entry(entry, &host);
        }

        return config.save(&runtime_config.config_file);
    }

    warn!(
        "Invalid source: {} - {}, nothing to add to",
        runtime_config.repo, runtime_config.branch
    );
    Ok(())
}

/// Removes the requested entries from the (repo, branch) source, should it exist.
fn remove_entries(runtime_config: &RuntimeConfig) -> Result<(), Box<dyn StdErr>> {
    let mut config = Config::load(&runtime_config.config_file)?;

    if let Some(source) = config.get_source(&runtime_config.repo, &runtime_config.branch) {
        for entry in &runtime_config.entries {
            source.remove_entry(entry);
        }

        return config.save(&runtime_config.config_file);
    }

    warn!(
        "No source: {} - {}, nothing to remove from",
        runtime_config.repo, runtime_config.branch
    );
    Ok(())
}

/// Generates the gitignore file from the current template config document.
fn generate_ignore_file(runtime_config: &RuntimeConfig) -> Result<(), Box<dyn StdErr>> {
    let config = Config::load(&runtime_config.config_file)?;

    inflate(&config, &runtime_config.output_file, &RawGitHubHost)
}
