// SPDX-License-Identifier: MIT

//! The `cli` module defines functions necessary for the setup of [`clap`].

use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub const APP_NAME: &str = "ignoreit";

/// Constant specifying the default template config document.
pub const DEFAULT_CONFIG_FILE: &str = ".ignoreit.yml";

/// Constant specifying the default generation output file.
pub const DEFAULT_OUTPUT_FILE: &str = ".gitignore";

/// Constant specifying the default gitignore template repository.
pub const DEFAULT_REPO: &str = "github/gitignore";

/// Constant specifying the default branch of the template repository.
pub const DEFAULT_BRANCH: &str = "master";

pub const ADD_SUBCMD: &str = "add";
pub const REMOVE_SUBCMD: &str = "remove";
pub const GENERATE_SUBCMD: &str = "generate";
pub const COMPLETIONS_SUBCMD: &str = "completions";

/// Builds a [`clap::Command`].
pub fn build_cli() -> Command {
    Command::new(APP_NAME)
        .arg_required_else_help(true)
        .version(crate_version!())
        .about("Manage .gitignore templates declaratively")
        .author("fisherprime")
        .arg(
            Arg::new("config")
                .help("Load template config from FILE")
                .short('c')
                .long("config")
                .value_name("FILE")
                .default_value(DEFAULT_CONFIG_FILE)
                .global(true),
        )
        .arg(
            Arg::new("verbosity")
                .help("Set the level of verbosity: -v or -vv")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new(ADD_SUBCMD)
                .visible_alias("a")
                .arg_required_else_help(true)
                .about("Add template entries to the config")
                .args(source_args())
                .arg(entry_arg("Case sensitive (space-separated) list of template ENTRY name(s) to add")),
        )
        .subcommand(
            Command::new(REMOVE_SUBCMD)
                .visible_alias("rm")
                .arg_required_else_help(true)
                .about("Remove template entries from the config")
                .args(source_args())
                .arg(entry_arg("Case sensitive (space-separated) list of template ENTRY name(s) to remove")),
        )
        .subcommand(
            Command::new(GENERATE_SUBCMD)
                .visible_alias("g")
                .about("Generate a gitignore file from the config")
                .arg(
                    Arg::new("output")
                        .help("Specify output FILE")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .default_value(DEFAULT_OUTPUT_FILE),
                ),
        )
        .subcommand(
            Command::new(COMPLETIONS_SUBCMD)
                .arg_required_else_help(true)
                .about("Generate tab completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Specify shell to generate completion script for")
                        .value_name("SHELL")
                        .value_parser(value_parser!(Shell)),
                ),
        )
}

/// Builds the (repo, branch) arguments shared by the `add` & `remove` subcommands.
fn source_args() -> [Arg; 2] {
    [
        Arg::new("repo")
            .help("Use .gitignore templates from https://github.com/REPO")
            .short('r')
            .long("repo")
            .value_name("REPO")
            .default_value(DEFAULT_REPO),
        Arg::new("branch")
            .help("Git BRANCH of the REPO")
            .short('b')
            .long("branch")
            .value_name("BRANCH")
            .default_value(DEFAULT_BRANCH),
    ]
}

/// Builds the positional template entry list argument.
fn entry_arg(help: &'static str) -> Arg {
    Arg::new("entry")
        .help(help)
        .value_name("ENTRY")
        .num_args(1..)
        .required(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Assert the command definition holds together (debug_assert catches conflicts).
    fn build_cli_test() {
        build_cli().debug_assert();
    }

    #[test]
    /// Assert the add subcommand parses its defaults & entry list.
    fn add_defaults_test() {
        let matches = build_cli()
            .try_get_matches_from(["ignoreit", "add", "Go", "Rust"])
            .unwrap();

        let (name, sub_matches) = matches.subcommand().unwrap();
        assert_eq!(name, ADD_SUBCMD);
        assert_eq!(
            sub_matches.get_one::<String>("repo").unwrap(),
            DEFAULT_REPO
        );
        assert_eq!(
            sub_matches.get_one::<String>("branch").unwrap(),
            DEFAULT_BRANCH
        );
        assert_eq!(
            sub_matches
                .get_many::<String>("entry")
                .unwrap()
                .cloned()
                .collect::<Vec<String>>(),
            vec!["Go".to_owned(), "Rust".to_owned()]
        );
    }

    #[test]
    /// Assert an entry-less add invocation is rejected.
    fn add_requires_entries_test() {
        assert!(build_cli().try_get_matches_from(["ignoreit", "add"]).is_err());
    }
}
