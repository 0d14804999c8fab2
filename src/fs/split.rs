use crate::error::{Result, RnameError};
use std::path::{Path, PathBuf};

/// A path broken into the pieces the rewrite rules work on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPath {
	/// Everything but the last component, `"."` when there is none.
	pub dir: PathBuf,

	/// The base name up to (not including) its last `.`.
	pub stem: String,

	/// The base name from its last `.` on, dot included; empty if no dot.
	pub ext: String,
}

impl SplitPath {
	/// Put the path back together with a new stem, keeping dir and extension.
	pub fn with_stem(&self, stem: &str) -> PathBuf {
		join_filepath(&self.dir, &format!("{}{}", stem, self.ext))
	}
}

/// Split a path into directory, stem and extension.
///
/// A base name such as `.jpg` yields an empty stem. A base name that is not
/// valid UTF-8 is refused rather than rewritten lossily; the directory part
/// may be any bytes.
pub fn split_filepath(path: &Path) -> Result<SplitPath> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
		_ => PathBuf::from("."),
	};

	let base = path
		.file_name()
		.unwrap_or(path.as_os_str())
		.to_str()
		.ok_or_else(|| RnameError::NonUtf8Name {
			path: path.to_path_buf(),
		})?;

	let (stem, ext) = match base.rfind('.') {
		Some(dot) => (base[..dot].to_string(), base[dot..].to_string()),
		None => (base.to_string(), String::new()),
	};

	Ok(SplitPath { dir, stem, ext })
}

/// Join a directory and a file name.
///
/// A `"."` directory is dropped, so `a.jpg` rewrites to `b.jpg` rather than
/// `./b.jpg`.
pub fn join_filepath(dir: &Path, name: &str) -> PathBuf {
	if dir == Path::new(".") {
		PathBuf::from(name)
	} else {
		dir.join(name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn split(path: &str) -> (String, String, String) {
		let s = split_filepath(Path::new(path)).unwrap();
		(s.dir.to_string_lossy().into_owned(), s.stem, s.ext)
	}

	#[test]
	fn test_split_plain_file() {
		assert_eq!(
			split("abc.jpg"),
			(".".to_string(), "abc".to_string(), ".jpg".to_string())
		);
	}

	#[test]
	fn test_split_uses_last_dot() {
		assert_eq!(
			split("photos/abc.tar.gz"),
			(
				"photos".to_string(),
				"abc.tar".to_string(),
				".gz".to_string()
			)
		);
	}

	#[test]
	fn test_split_no_extension() {
		assert_eq!(
			split("dir/sub/README"),
			("dir/sub".to_string(), "README".to_string(), String::new())
		);
	}

	#[test]
	fn test_split_dotfile_has_empty_stem() {
		assert_eq!(
			split(".jpg"),
			(".".to_string(), String::new(), ".jpg".to_string())
		);
	}

	#[test]
	fn test_split_absolute_path() {
		assert_eq!(
			split("/tmp/a b.png"),
			("/tmp".to_string(), "a b".to_string(), ".png".to_string())
		);
	}

	#[test]
	fn test_split_round_trip() {
		for path in ["a.jpg", "x/y/z.txt", "/abs/no_ext", "dir/.hidden", "a.b.c"] {
			let s = split_filepath(Path::new(path)).unwrap();
			assert_eq!(s.with_stem(&s.stem), PathBuf::from(path), "{path}");
		}
	}

	#[test]
	fn test_round_trip_drops_current_dir_prefix() {
		let s = split_filepath(Path::new("./a.jpg")).unwrap();
		assert_eq!(s.dir, PathBuf::from("."));
		assert_eq!(s.with_stem("a"), PathBuf::from("a.jpg"));
	}

	#[cfg(unix)]
	#[test]
	fn test_split_rejects_non_utf8_base_name() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		let path = Path::new(OsStr::from_bytes(b"dir/a\xFF.jpg"));
		match split_filepath(path).unwrap_err() {
			RnameError::NonUtf8Name { path: rejected } => assert_eq!(rejected, path),
			other => panic!("Expected NonUtf8Name error, got {other:?}"),
		}
	}

	#[cfg(unix)]
	#[test]
	fn test_split_allows_non_utf8_directory() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		let path = Path::new(OsStr::from_bytes(b"d\xFFir/a b.jpg"));
		let s = split_filepath(path).unwrap();
		assert_eq!(s.stem, "a b");
		assert_eq!(s.dir, Path::new(OsStr::from_bytes(b"d\xFFir")));
	}
}
