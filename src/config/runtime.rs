// SPDX-License-Identifier: MIT

//! The `runtime` module defines elements necessary for the configuration of [`RuntimeConfig`]
//! (contains the runtime options).

use std::error::Error as StdErr;

use clap::ArgMatches;
use clap_complete::Shell;

use super::cli::{build_cli, APP_NAME};

/// `struct` containing runtime options gathered from the command arguments.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Exclusive operation specified by user.
    pub operation: Operation,

    /// Path to the template config document.
    pub config_file: String,

    /// Template repository targeted by a mutation.
    pub repo: String,

    /// Branch of the template repository targeted by a mutation.
    pub branch: String,

    /// Template entry names supplied to a mutation.
    pub entries: Vec<String>,

    /// Path to output generated gitignore.
    pub output_file: String,

    /// Shell to generate completions for.
    pub completion_shell: Shell,
}

/// `enum` containing exclusive operations that can be performed.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Option to add template entries to the config.
    AddEntries,
    /// Option to remove template entries from the config.
    RemoveEntries,
    /// Option to generate gitignore file.
    GenerateIgnoreFile,
    /// Option to generate shell completion scripts.
    GenerateCompletions,
    /// Option for unknown operations.
    Else,
}

/// Default implementation for [`RuntimeConfig`].
impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            operation: Operation::Else,
            config_file: "".to_owned(),
            repo: "".to_owned(),
            branch: "".to_owned(),
            entries: Vec::new(),
            output_file: "".to_owned(),
            completion_shell: Shell::Zsh,
        }
    }
}

/// Method implementations for [`RuntimeConfig`].
impl RuntimeConfig {
    /// Load options from the command arguments.
    pub fn load() -> Result<RuntimeConfig, Box<dyn StdErr>> {
        use super::logger::setup_logger;

        let matches = build_cli().get_matches();
        setup_logger(&matches)?;
        debug!("parsed command flags");

        let mut runtime_config = RuntimeConfig {
            config_file: matches
                .get_one::<String>("config")
                .expect("failed to use default config")
                .to_owned(),
            ..RuntimeConfig::default()
        };
        runtime_config.configure_operation(&matches);

        debug!("loaded command arguments, options: {:#?}", runtime_config);

        Ok(runtime_config)
    }

    /// Configures the `RuntimeConfig` to execute the subcommand selected by the user.
    ///
    /// This function checks for the presence of [`clap::Command`] subcommands & [`clap::Arg`]s as
    /// provided in the [`clap::ArgMatches`] struct.
    fn configure_operation(&mut self, matches: &ArgMatches) {
        use super::cli::{ADD_SUBCMD, COMPLETIONS_SUBCMD, GENERATE_SUBCMD, REMOVE_SUBCMD};

        match matches.subcommand() {
            Some((ADD_SUBCMD, sub_matches)) => {
                self.operation = Operation::AddEntries;
                self.configure_mutation(sub_matches);
            }
            Some((REMOVE_SUBCMD, sub_matches)) => {
                self.operation = Operation::RemoveEntries;
                self.configure_mutation(sub_matches);
            }
            Some((GENERATE_SUBCMD, sub_matches)) => {
                self.operation = Operation::GenerateIgnoreFile;
                self.output_file = sub_matches
                    .get_one::<String>("output")
                    .expect("failed to use default output")
                    .to_owned();
            }
            Some((COMPLETIONS_SUBCMD, sub_matches)) => {
                self.operation = Operation::GenerateCompletions;
                self.completion_shell = sub_matches
                    .get_one::<Shell>("shell")
                    .copied()
                    .unwrap_or(Shell::Zsh);
            }
            _ => self.operation = Operation::Else,
        }
    }

    /// Captures the (repo, branch) pair & entry list shared by the mutation subcommands.
    fn configure_mutation(&mut self, sub_matches: &ArgMatches) {
        self.repo = sub_matches
            .get_one::<String>("repo")
            .expect("failed to use default repo")
            .to_owned();
        self.branch = sub_matches
            .get_one::<String>("branch")
            .expect("failed to use default branch")
            .to_owned();
        if let Some(entries_arg) = sub_matches.get_many::<String>("entry") {
            self.entries = entries_arg
                .map(|entry| entry.to_owned())
                .collect::<Vec<String>>();
        }
    }

    /// Generates completions for shells defined in [`clap_complete::Shell`].
    pub fn generate_completions(&self) -> Result<(), Box<dyn StdErr>> {
        use clap_complete::generate;
        use std::io;

        generate(
            self.completion_shell,
            &mut build_cli(),
            APP_NAME,
            &mut io::stdout(),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configure(args: &[&str]) -> RuntimeConfig {
        let matches = build_cli().try_get_matches_from(args).unwrap();

        let mut runtime_config = RuntimeConfig {
            config_file: matches.get_one::<String>("config").unwrap().to_owned(),
            ..RuntimeConfig::default()
        };
        runtime_config.configure_operation(&matches);
        runtime_config
    }

    #[test]
    /// Assert an add invocation resolves its operation, key & entries.
    fn configure_add_operation_test() {
        let runtime_config = configure(&[
            "ignoreit", "add", "-r", "owner/repo", "-b", "dev", "Go", "Rust",
        ]);

        assert_eq!(runtime_config.operation, Operation::AddEntries);
        assert_eq!(runtime_config.config_file, ".ignoreit.yml");
        assert_eq!(runtime_config.repo, "owner/repo");
        assert_eq!(runtime_config.branch, "dev");
        assert_eq!(
            runtime_config.entries,
            vec!["Go".to_owned(), "Rust".to_owned()]
        );
    }

    #[test]
    /// Assert a remove invocation falls back to the default (repo, branch) pair.
    fn configure_remove_defaults_test() {
        let runtime_config = configure(&["ignoreit", "remove", "Go"]);

        assert_eq!(runtime_config.operation, Operation::RemoveEntries);
        assert_eq!(runtime_config.repo, "github/gitignore");
        assert_eq!(runtime_config.branch, "master");
    }

    #[test]
    /// Assert a generate invocation resolves the output file.
    fn configure_generate_operation_test() {
        let runtime_config = configure(&["ignoreit", "generate", "-o", "ignore.out"]);

        assert_eq!(runtime_config.operation, Operation::GenerateIgnoreFile);
        assert_eq!(runtime_config.output_file, "ignore.out");
    }
}
