use crate::error::Result;
use crate::fs::split_filepath;
use regex::Regex;
use std::path::{Path, PathBuf};

/// A compiled rewrite rule, applied to the stem of each file in turn.
///
/// Only the `Serial` variant carries state between calls, so a rule must be
/// applied by a single owner in list order.
#[derive(Debug)]
pub enum RewriteRule {
	Prepend { width: usize },
	Serial(SerialCounter),
	Fillin { padding: String },
	Erase { target: String },
	Regex(RegexRewrite),
}

impl RewriteRule {
	/// Compute the new stem for `stem`.
	pub fn rewrite_stem(&mut self, stem: &str) -> String {
		match self {
			RewriteRule::Prepend { width } => prepend_zeros(stem, *width),
			RewriteRule::Serial(counter) => counter.next_name(),
			RewriteRule::Fillin { padding } => fill_spaces(stem, padding),
			RewriteRule::Erase { target } => erase_all(stem, target),
			RewriteRule::Regex(regex) => regex.apply(stem),
		}
	}

	/// Compute the new path for `path`; directory and extension are kept.
	///
	/// Fails without touching any rule state when the base name is not
	/// valid UTF-8.
	pub fn rewrite_path(&mut self, path: &Path) -> Result<PathBuf> {
		let split = split_filepath(path)?;
		let stem = self.rewrite_stem(&split.stem);
		Ok(split.with_stem(&stem))
	}
}

/// Running counter for the `serial` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialCounter {
	/// Minimum digit count of each number.
	pub width: usize,

	/// The number the next call hands out.
	pub current: u64,
}

impl SerialCounter {
	pub fn new(width: usize, start: u64) -> Self {
		SerialCounter {
			width,
			current: start,
		}
	}

	/// Render the current number and advance by one.
	///
	/// After `u64::MAX` the counter wraps around to 0.
	pub fn next_name(&mut self) -> String {
		let name = serial_number(self.current, self.width);
		self.current = self.current.wrapping_add(1);
		name
	}
}

/// Regex substitution for the `regex` rule.
#[derive(Debug)]
pub struct RegexRewrite {
	/// The pattern to match.
	pub pattern: Regex,

	/// Replacement template; `$1`, `${name}` expand capture groups.
	pub replace: String,
}

impl RegexRewrite {
	/// Replace every non-overlapping match in `input`.
	pub fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, self.replace.as_str())
			.into_owned()
	}
}

/// Zero-pad the rightmost run of digits in `stem` to `width` digits.
///
/// Runs already `width` long or longer are left alone. Leading zeros of the
/// run are not counted toward the padded value, so `007` pads as `7`.
pub fn prepend_zeros(stem: &str, width: usize) -> String {
	let bytes = stem.as_bytes();
	let Some(last) = bytes.iter().rposition(u8::is_ascii_digit) else {
		return stem.to_string();
	};
	let first = bytes[..last]
		.iter()
		.rposition(|b| !b.is_ascii_digit())
		.map_or(0, |i| i + 1);

	let run = &stem[first..=last];
	if run.len() >= width {
		return stem.to_string();
	}

	let digits = match run.trim_start_matches('0') {
		"" => "0",
		trimmed => trimmed,
	};

	format!(
		"{}{}{}",
		&stem[..first],
		pad_zeros(digits, width),
		&stem[last + 1..]
	)
}

/// Render `number` zero-padded to at least `width` digits.
pub fn serial_number(number: u64, width: usize) -> String {
	pad_zeros(&number.to_string(), width)
}

/// Left-pad `digits` with zeros up to `width` characters.
fn pad_zeros(digits: &str, width: usize) -> String {
	let mut padded = "0".repeat(width.saturating_sub(digits.len()));
	padded.push_str(digits);
	padded
}

/// Replace every space in `stem` with `padding`.
pub fn fill_spaces(stem: &str, padding: &str) -> String {
	stem.replace(' ', padding)
}

/// Remove every non-overlapping occurrence of `target`, scanning left to right.
pub fn erase_all(stem: &str, target: &str) -> String {
	stem.replace(target, "")
}
