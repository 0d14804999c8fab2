//! Rule configuration for rname.
//!
//! This module holds the option values for each rewrite rule and their
//! defaults, and validates them before any rule is compiled.

pub mod types;

pub use types::{
	DEFAULT_PADDING, DEFAULT_PATTERN, DEFAULT_START, DEFAULT_WIDTH, MAX_WIDTH, RuleConfig,
};
