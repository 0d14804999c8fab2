use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use rname::config::{DEFAULT_PADDING, DEFAULT_PATTERN, DEFAULT_START, DEFAULT_WIDTH, RuleConfig};
use rname::error::{ErrorKind, RnameError};
use rname::exec::{Mode, run_batch};
use rname::fs::{StdRenamer, collect_files};
use rname::rules::compile_rule;

/// Exit status for usage and configuration errors.
const EXIT_USAGE: u8 = 1;

/// Exit status when the file pattern cannot be expanded.
const EXIT_ENUMERATION: u8 = 2;

#[derive(Parser)]
#[command(name = "rname")]
#[command(author, version, about = "Rename files in batches by rewriting their names")]
#[command(arg_required_else_help = true)]
#[command(after_help = "Wildcards can be used for FILE_PATTERN, like '*.jpg' (quote it).\n\
When FILE_PATTERN is omitted, '*' is used.")]
struct Cli {
	/// Log every rename to stderr
	#[arg(short, long, global = true)]
	verbose: bool,

	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Show what would be renamed without renaming anything
	Test {
		#[command(subcommand)]
		rule: RuleCommand,
	},

	#[command(flatten)]
	Rule(RuleCommand),
}

#[derive(Subcommand)]
enum RuleCommand {
	/// Prepend zeros to the number in each file name
	#[command(args_override_self = true, after_help = "Example: abc-1.jpg => abc-00001.jpg")]
	Prepend {
		/// Number of digits to pad to (at most 255)
		#[arg(short, long, default_value_t = DEFAULT_WIDTH)]
		width: usize,

		#[command(flatten)]
		files: FilePattern,
	},

	/// Replace each file name with a serial number
	#[command(args_override_self = true, after_help = "Example: abc.jpg => 00001.jpg")]
	Serial {
		/// Number of digits to pad to (at most 255)
		#[arg(short, long, default_value_t = DEFAULT_WIDTH)]
		width: usize,

		/// First number to hand out
		#[arg(short, long, default_value_t = DEFAULT_START)]
		start: u64,

		#[command(flatten)]
		files: FilePattern,
	},

	/// Fill padding in place of spaces
	#[command(args_override_self = true, after_help = "Example: abc def.jpg => abc_def.jpg")]
	Fillin {
		/// Text to put in place of each space
		#[arg(short, long, default_value = DEFAULT_PADDING, allow_hyphen_values = true)]
		padding: String,

		#[command(flatten)]
		files: FilePattern,
	},

	/// Erase every occurrence of a string
	#[command(
		args_override_self = true,
		after_help = "Example: erase -t=-demo : abc-demo.jpg => abc.jpg"
	)]
	Erase {
		/// String to erase
		#[arg(short, long, allow_hyphen_values = true)]
		target: String,

		#[command(flatten)]
		files: FilePattern,
	},

	/// Substitute regex matches with replacement text
	#[command(
		args_override_self = true,
		after_help = "When the replacement is omitted, matches are erased.\n\
Example: regex -p '^(.)(.)' -r '$2$1' : abc.jpg => bac.jpg"
	)]
	Regex {
		/// Regex pattern to search for
		#[arg(short, long, allow_hyphen_values = true)]
		pattern: String,

		/// Replacement text; $1, $2, ... refer to capture groups
		#[arg(short, long, allow_hyphen_values = true)]
		replace: Option<String>,

		#[command(flatten)]
		files: FilePattern,
	},
}

#[derive(Args)]
struct FilePattern {
	/// Files to rename
	#[arg(id = "file_pattern", value_name = "FILE_PATTERN", default_value = DEFAULT_PATTERN)]
	pattern: String,
}

impl RuleCommand {
	/// Split into the rule options and the file pattern.
	fn into_parts(self) -> (RuleConfig, String) {
		match self {
			RuleCommand::Prepend { width, files } => (RuleConfig::Prepend { width }, files.pattern),
			RuleCommand::Serial {
				width,
				start,
				files,
			} => (RuleConfig::Serial { width, start }, files.pattern),
			RuleCommand::Fillin { padding, files } => {
				(RuleConfig::Fillin { padding }, files.pattern)
			}
			RuleCommand::Erase { target, files } => (RuleConfig::Erase { target }, files.pattern),
			RuleCommand::Regex {
				pattern,
				replace,
				files,
			} => (
				RuleConfig::Regex {
					pattern,
					replace: replace.unwrap_or_default(),
				},
				files.pattern,
			),
		}
	}
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let printed = e.print().is_ok();
			return ExitCode::from(parse_error_status(e.use_stderr(), printed));
		}
	};

	init_tracing(cli.verbose);

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			exit_code_for(&e)
		}
	}
}

/// Exit status after clap stops parsing.
///
/// --help and --version go to stdout and are not failures, unless they could
/// not be written.
fn parse_error_status(is_error: bool, printed: bool) -> u8 {
	if is_error || !printed { EXIT_USAGE } else { 0 }
}

/// --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
fn init_tracing(verbose: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
	match error.downcast_ref::<RnameError>().map(RnameError::kind) {
		Some(ErrorKind::Enumeration) => ExitCode::from(EXIT_ENUMERATION),
		_ => ExitCode::from(EXIT_USAGE),
	}
}

fn run(cli: Cli) -> Result<ExitCode> {
	let (mode, command) = match cli.command {
		Commands::Test { rule } => (Mode::Preview, rule),
		Commands::Rule(rule) => (Mode::Apply, rule),
	};
	let (config, pattern) = command.into_parts();

	// Compile before touching the filesystem
	let mut rule = compile_rule(&config)
		.with_context(|| format!("Invalid options for {}", config.name()))?;

	let paths = collect_files(&pattern)
		.with_context(|| format!("Failed to expand file pattern: {}", pattern))?;

	let stdout = std::io::stdout();
	let report = run_batch(&mut rule, &paths, mode, &mut StdRenamer, &mut stdout.lock())
		.context("Failed to write preview")?;

	// Per-file failures are reported but don't change the exit status
	for failure in report.failures {
		eprintln!("error: {:?}", anyhow::Error::from(failure));
	}

	tracing::debug!(
		changed = report.changed,
		unchanged = report.unchanged,
		"Batch finished"
	);

	Ok(ExitCode::SUCCESS)
}
