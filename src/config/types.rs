use crate::error::{Result, RnameError};

/// Default digit count for `prepend` and `serial`.
pub const DEFAULT_WIDTH: usize = 5;

/// Largest accepted `--width`; no file name can be longer than this.
pub const MAX_WIDTH: usize = 255;

/// Default first number handed out by `serial`.
pub const DEFAULT_START: u64 = 1;

/// Default replacement for spaces in `fillin`.
pub const DEFAULT_PADDING: &str = "_";

/// File pattern used when none is given.
pub const DEFAULT_PATTERN: &str = "*";

/// Options for one rewrite rule, as parsed from the command line.
///
/// A `RuleConfig` is not yet usable: it must pass [`RuleConfig::validate`]
/// and be compiled into a [`crate::rules::RewriteRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleConfig {
	/// Zero-pad the rightmost number in the stem.
	Prepend { width: usize },

	/// Replace the stem with a running, zero-padded number.
	Serial { width: usize, start: u64 },

	/// Replace every space in the stem.
	Fillin { padding: String },

	/// Remove every occurrence of a literal substring.
	Erase { target: String },

	/// Substitute every regex match. An empty `replace` erases matches.
	Regex { pattern: String, replace: String },
}

impl RuleConfig {
	/// Name of the subcommand selecting this rule.
	pub fn name(&self) -> &'static str {
		match self {
			RuleConfig::Prepend { .. } => "prepend",
			RuleConfig::Serial { .. } => "serial",
			RuleConfig::Fillin { .. } => "fillin",
			RuleConfig::Erase { .. } => "erase",
			RuleConfig::Regex { .. } => "regex",
		}
	}

	/// Reject options that would make the rule meaningless.
	pub fn validate(&self) -> Result<()> {
		match self {
			RuleConfig::Prepend { width } | RuleConfig::Serial { width, .. }
				if *width > MAX_WIDTH =>
			{
				Err(RnameError::WidthTooLarge {
					width: *width,
					max: MAX_WIDTH,
				})
			}
			RuleConfig::Erase { target } if target.is_empty() => Err(RnameError::EmptyTarget),
			RuleConfig::Regex { pattern, .. } if pattern.is_empty() => {
				Err(RnameError::EmptyPattern)
			}
			_ => Ok(()),
		}
	}
}
