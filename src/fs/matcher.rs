use crate::error::{Result, RnameError};
use std::path::{Path, PathBuf};

/// Expand a glob pattern into the files it matches.
///
/// Directories are dropped; symlinks are followed when deciding. The
/// returned order is the glob crate's, which is sorted and stable.
pub fn collect_files(pattern: &str) -> Result<Vec<PathBuf>> {
	let entries = glob::glob(pattern).map_err(|source| RnameError::InvalidGlob {
		pattern: pattern.to_string(),
		source,
	})?;

	let mut files = Vec::new();
	for entry in entries {
		let path = entry.map_err(|source| RnameError::GlobRead { source })?;
		if !is_dir(&path)? {
			files.push(path);
		}
	}

	tracing::debug!(pattern, matched = files.len(), "Expanded file pattern");
	Ok(files)
}

fn is_dir(path: &Path) -> Result<bool> {
	let metadata = std::fs::metadata(path).map_err(|source| RnameError::Stat {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(metadata.is_dir())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn pattern_in(dir: &Path, tail: &str) -> String {
		format!("{}/{}", glob::Pattern::escape(&dir.to_string_lossy()), tail)
	}

	#[test]
	fn test_collect_files_skips_directories() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("b.jpg"), "").unwrap();
		fs::write(temp_dir.path().join("a.jpg"), "").unwrap();
		fs::create_dir(temp_dir.path().join("sub.jpg")).unwrap();

		let files = collect_files(&pattern_in(temp_dir.path(), "*.jpg")).unwrap();
		assert_eq!(
			files,
			vec![temp_dir.path().join("a.jpg"), temp_dir.path().join("b.jpg")]
		);
	}

	#[test]
	fn test_collect_files_filters_by_pattern() {
		let temp_dir = tempfile::tempdir().unwrap();
		fs::write(temp_dir.path().join("a.jpg"), "").unwrap();
		fs::write(temp_dir.path().join("a.png"), "").unwrap();

		let files = collect_files(&pattern_in(temp_dir.path(), "*.png")).unwrap();
		assert_eq!(files, vec![temp_dir.path().join("a.png")]);
	}

	#[test]
	fn test_collect_files_no_match_is_empty() {
		let temp_dir = tempfile::tempdir().unwrap();
		let files = collect_files(&pattern_in(temp_dir.path(), "*.gif")).unwrap();
		assert!(files.is_empty());
	}

	#[test]
	fn test_collect_files_invalid_pattern() {
		let result = collect_files("[");
		match result.unwrap_err() {
			RnameError::InvalidGlob { pattern, .. } => assert_eq!(pattern, "["),
			other => panic!("Expected InvalidGlob error, got {other:?}"),
		}
	}
}
