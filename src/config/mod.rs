// SPDX-License-Identifier: MIT

//! The `config` module defines elements necessary for the configuration of the runtime
//! environment.

pub mod cli;
pub mod logger;
pub mod runtime;

pub use runtime::{Operation, RuntimeConfig};
