//! Filesystem access for rname.
//!
//! This module handles:
//! - Splitting paths into directory, stem and extension
//! - Expanding file patterns into the list of files to rename
//! - Performing renames behind the [`Renamer`] trait

pub mod matcher;
pub mod split;

pub use matcher::collect_files;
pub use split::{SplitPath, join_filepath, split_filepath};

use std::path::Path;

/// Something that can move a file from one path to another.
pub trait Renamer {
	fn rename(&mut self, from: &Path, to: &Path) -> std::io::Result<()>;
}

/// Renames on the real filesystem.
///
/// An existing file at the destination is replaced where the platform
/// allows it; no collision check is made.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdRenamer;

impl Renamer for StdRenamer {
	fn rename(&mut self, from: &Path, to: &Path) -> std::io::Result<()> {
		std::fs::rename(from, to)
	}
}
