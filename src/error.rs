use std::path::PathBuf;

/// Library-level structured errors for rname.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum RnameError {
	#[error("Erase target must not be empty")]
	EmptyTarget,

	#[error("Regex pattern must not be empty")]
	EmptyPattern,

	#[error("Width {width} is larger than the maximum of {max}")]
	WidthTooLarge { width: usize, max: usize },

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Invalid file pattern: {pattern}")]
	InvalidGlob {
		pattern: String,
		#[source]
		source: glob::PatternError,
	},

	#[error("Failed to read entry while expanding file pattern")]
	GlobRead {
		#[source]
		source: glob::GlobError,
	},

	#[error("Failed to stat {path}")]
	Stat {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("File name is not valid UTF-8: {path}")]
	NonUtf8Name { path: PathBuf },

	#[error("Failed to rename {from} to {to}")]
	RenameFailed {
		from: PathBuf,
		to: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Broad category of a failure, used to decide whether a run can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// Bad rule options; reported before any path is touched.
	Configuration,
	/// The file pattern could not be expanded.
	Enumeration,
	/// A single path failed; the batch carries on.
	Item,
}

impl RnameError {
	pub fn kind(&self) -> ErrorKind {
		match self {
			RnameError::EmptyTarget
			| RnameError::EmptyPattern
			| RnameError::WidthTooLarge { .. }
			| RnameError::InvalidRegex { .. } => ErrorKind::Configuration,
			RnameError::InvalidGlob { .. } | RnameError::GlobRead { .. } | RnameError::Stat { .. } => {
				ErrorKind::Enumeration
			}
			RnameError::NonUtf8Name { .. } | RnameError::RenameFailed { .. } => ErrorKind::Item,
		}
	}
}

/// Result type alias using RnameError.
pub type Result<T> = std::result::Result<T, RnameError>;
