// SPDX-License-Identifier: MIT

#![warn(missing_docs)]

// NOTE: unneeded, this is not a library.
// #![warn(missing_doc_code_examples)]

//! The ignoreit crate manages gitignore templates declaratively.
//!
//! This crate maintains a versioned configuration of remote gitignore template sources &
//! consolidates the referenced templates into a gitignore file.

// Loading macros must be done at the crate root.
#[macro_use]
extern crate log;

#[macro_use]
extern crate clap;

#[macro_use]
extern crate lazy_static;

mod app;
mod config;
mod errors;
mod generate;
mod network;
mod spec;

use app::run;
use config::RuntimeConfig;

/// This is the entry point for the crate's binary.
///
/// This function initiates the setting up of the running environment then calls the function to
/// run the underlying logic.
fn main() {
    RuntimeConfig::load().and_then(run).unwrap_or_else(|err| {
        eprintln!("Application error: {}", err);
        std::process::exit(1);
    });
}
