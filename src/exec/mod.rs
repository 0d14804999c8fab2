//! Batch execution for rname.
//!
//! This module handles:
//! - Applying one rewrite rule to every matched path, in list order
//! - Printing before/after pairs in preview mode
//! - Renaming through a [`Renamer`] and collecting per-file failures

use crate::error::RnameError;
use crate::fs::Renamer;
use crate::rules::RewriteRule;
use std::io::Write;
use std::path::PathBuf;

/// Whether a batch only shows its renames or performs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Print each rename; touch nothing.
	Preview,
	/// Perform each rename.
	Apply,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
	/// Paths whose name changed (renamed, or shown in preview mode).
	pub changed: usize,

	/// Paths the rule left as they were.
	pub unchanged: usize,

	/// Paths that could not be rewritten or renamed. The batch carries on
	/// past each of these.
	pub failures: Vec<RnameError>,
}

impl BatchReport {
	pub fn is_success(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Apply `rule` to each path in order.
///
/// Paths whose rewritten form equals the original are skipped. In preview
/// mode each change is written to `out` as `   <old>` / `=> <new>`. A path
/// whose file name is not valid UTF-8, or whose rename fails, is recorded in
/// the report and does not stop the batch; only a failure to write to `out`
/// is returned as an error.
pub fn run_batch<R: Renamer, W: Write>(
	rule: &mut RewriteRule,
	paths: &[PathBuf],
	mode: Mode,
	renamer: &mut R,
	out: &mut W,
) -> std::io::Result<BatchReport> {
	let mut report = BatchReport::default();

	for path in paths {
		let new_path = match rule.rewrite_path(path) {
			Ok(new_path) => new_path,
			Err(e) => {
				tracing::debug!(path = %path.display(), error = %e, "Skipped");
				report.failures.push(e);
				continue;
			}
		};

		if new_path == *path {
			report.unchanged += 1;
			continue;
		}
		report.changed += 1;

		match mode {
			Mode::Preview => {
				writeln!(out, "   {}", path.display())?;
				writeln!(out, "=> {}", new_path.display())?;
			}
			Mode::Apply => match renamer.rename(path, &new_path) {
				Ok(()) => {
					tracing::debug!(from = %path.display(), to = %new_path.display(), "Renamed");
				}
				Err(source) => {
					tracing::debug!(from = %path.display(), error = %source, "Rename failed");
					report.failures.push(RnameError::RenameFailed {
						from: path.clone(),
						to: new_path,
						source,
					});
				}
			},
		}
	}

	Ok(report)
}
