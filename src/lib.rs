//! rname - batch file renaming.
//!
//! This library provides the core functionality for rname, including:
//! - Rule configuration and validation
//! - Name rewriting (zero padding, serial numbers, space filling, erasing,
//!   regex substitution) applied to the stem of each file name
//! - File pattern expansion and renaming
//! - Batch execution with a preview mode
//!
//! # Example
//!
//! ```no_run
//! use rname::config::RuleConfig;
//! use rname::exec::{Mode, run_batch};
//! use rname::fs::{StdRenamer, collect_files};
//! use rname::rules::compile_rule;
//!
//! let mut rule = compile_rule(&RuleConfig::Serial { width: 3, start: 1 }).unwrap();
//! let paths = collect_files("*.jpg").unwrap();
//!
//! let report = run_batch(
//!     &mut rule,
//!     &paths,
//!     Mode::Preview,
//!     &mut StdRenamer,
//!     &mut std::io::stdout(),
//! )
//! .unwrap();
//! println!("{} files would be renamed", report.changed);
//! ```

pub mod config;
pub mod error;
pub mod exec;
pub mod fs;
pub mod rules;

pub use error::{Result, RnameError};
