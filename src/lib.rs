//! Locgen - typed accessors for translation catalogs
//!
//! Locgen reads translation catalogs exported from a localization platform
//! and generates Rust source with one function per translation key. Each
//! function takes the key's placeholders as typed arguments plus a `Locale`
//! and returns the translated text, selecting plural forms at run time and
//! falling back to the baseline locale where a translation is missing.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, reports)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, plural rules, model builder and renderer
//! - `issues`: Errors and warnings raised while building the model
//! - `logging`: `tracing` subscriber setup

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
