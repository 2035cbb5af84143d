//! ibcheck core library.
//!
//! This crate finds mismatches between `@IBOutlet`/`@IBAction` declarations
//! in Swift sources and the connections wired in Interface Builder files.
//!
//! High-level modules:
//! - `structure`: Declaration tree read from an external structure dump.
//! - `position`: Byte offset to line/column conversion.
//! - `type_model`: Per-type outlets, actions and supertypes, merged across extensions.
//! - `builtins`: Implicit outlets of framework base classes.
//! - `nib`: Scanner for `.xib`/`.storyboard` connections.
//! - `analyzer`: Inheritance-aware reconciliation producing issues.
//! - `check`: Repository runner tying the above together.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `models`: Connection records, issues and summaries.
//! - `output`: Human/JSON printers.
//! - `error`: Load errors.
//! - `utils`: Supporting helpers.
pub mod analyzer;
pub mod builtins;
pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod nib;
pub mod output;
pub mod position;
pub mod structure;
pub mod type_model;
pub mod utils;
