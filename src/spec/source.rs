// SPDX-License-Identifier: MIT

//! The `source` module defines the [`Source`] struct: one remote (repository, branch) pair & its
//! gitignore template entries, with their accompanying trait & method implementations.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::network::TemplateHost;

/// Constant specifying the host serving raw gitignore template files.
const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";

/// `struct` containing a collection of gitignore template resources.
///
/// `repo` & `branch` uniquely identify a remote repository of gitignore templates. `entries` is a
/// list of template names to sync with, excluding the `.gitignore` suffix; `Go` is a valid entry.
#[derive(Deserialize, Serialize, PartialEq, Eq, Debug, Clone)]
pub struct Source {
    /// Repository hosting gitignore templates, in `owner/repo` form.
    pub repo: String,

    /// Git branch of `repo` to fetch templates from.
    pub branch: String,

    /// Template names within the (repo, branch) pair.
    pub entries: Vec<String>,
}

/// Method implementations for [`Source`].
impl Source {
    /// Creates a [`Source`] for the supplied (repo, branch) pair with no entries.
    pub fn new(repo: &str, branch: &str) -> Self {
        Self {
            repo: repo.to_owned(),
            branch: branch.to_owned(),
            entries: Vec::new(),
        }
    }

    /// Returns the link to download a raw form of the entry from this source.
    pub fn download_link(&self, entry: &str) -> String {
        format!(
            "{}/{}/{}/{}.gitignore",
            RAW_CONTENT_HOST, self.repo, self.branch, entry
        )
    }

    /// Adds the entry to this source's entry list.
    ///
    /// If the entry already exists, nothing is modified & this method returns early. A template
    /// the host cannot find is not appended; this degrades to a no-op with a logged diagnostic
    /// rather than an error.
    pub fn add_entry(&mut self, entry: &str, host: &dyn TemplateHost) {
        if self.entries.iter().any(|existing| existing == entry) {
            debug!("Entry {} already present, skipping", entry);
            return;
        }

        if host.exists(&self.download_link(entry)) {
            self.entries.push(entry.to_owned());
        } else {
            warn!(
                "Template {} not found under {} - {}, skipping",
                entry, self.repo, self.branch
            );
        }
    }

    /// Removes the first exact match of the entry from this source's entry list.
    ///
    /// The relative order of the remaining entries is preserved; removing an absent entry is a
    /// no-op.
    pub fn remove_entry(&mut self, entry: &str) {
        if let Some(index) = self.entries.iter().position(|existing| existing == entry) {
            self.entries.remove(index);
        }
    }

    /// Sorts & dedupes this source's entry list.
    ///
    /// The resulting list is a tightly packed, sorted & unique collection of entry names.
    pub fn clean(&mut self) {
        self.entries.sort();
        self.entries.dedup();
    }

    /// Compares two sources by their (repo, branch) identity for the config-level sort.
    pub fn cmp_key(&self, other: &Self) -> Ordering {
        self.repo
            .cmp(&other.repo)
            .then_with(|| self.branch.cmp(&other.branch))
    }
}
