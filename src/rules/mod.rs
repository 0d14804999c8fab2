//! Name transformation for rname.
//!
//! This module handles:
//! - Compiling a validated rule configuration into a rewrite rule
//! - Rewriting file stems (zero padding, serial numbers, space filling,
//!   substring erasing and regex substitution)

pub mod compiler;
pub mod rewriter;

pub use compiler::compile_rule;
pub use rewriter::{
	RegexRewrite, RewriteRule, SerialCounter, erase_all, fill_spaces, prepend_zeros,
	serial_number,
};
