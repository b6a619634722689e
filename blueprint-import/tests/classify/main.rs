//! Classification and import tests over realistic node trees.
//!
//! Rust does not discover tests in subdirectories on its own, so the modules are
//! listed here.

mod import;
mod scenarios;
