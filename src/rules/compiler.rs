use crate::config::RuleConfig;
use crate::error::{Result, RnameError};
use crate::rules::rewriter::{RegexRewrite, RewriteRule, SerialCounter};
use regex::Regex;

/// Validate a rule configuration and compile it into a rule ready to apply.
///
/// This is the only place a regex is compiled, so a bad pattern is reported
/// before any file is looked at.
pub fn compile_rule(config: &RuleConfig) -> Result<RewriteRule> {
	config.validate()?;

	let rule = match config {
		RuleConfig::Prepend { width } => RewriteRule::Prepend { width: *width },
		RuleConfig::Serial { width, start } => {
			RewriteRule::Serial(SerialCounter::new(*width, *start))
		}
		RuleConfig::Fillin { padding } => RewriteRule::Fillin {
			padding: padding.clone(),
		},
		RuleConfig::Erase { target } => RewriteRule::Erase {
			target: target.clone(),
		},
		RuleConfig::Regex { pattern, replace } => RewriteRule::Regex(RegexRewrite {
			pattern: compile_regex(pattern)?,
			replace: replace.clone(),
		}),
	};

	tracing::debug!(rule = config.name(), "Compiled rewrite rule");
	Ok(rule)
}

/// Compile a regex pattern string.
fn compile_regex(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| RnameError::InvalidRegex {
		pattern: pattern.to_string(),
		source,
	})
}
