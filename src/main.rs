use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use srcpatch_cli::rules::{PipelineOptions, apply_pipeline, build_pipeline};
use srcpatch_cli::source::{read_source, write_stdout};

#[derive(Parser)]
#[command(name = "srcpatch")]
#[command(
	author,
	version,
	about = "Build-time patcher that rewrites third-party signing library sources to stdout"
)]
struct Cli {
	/// Source file to rewrite ("-" reads from stdin)
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Leave debug/sensitive log statements untouched
	#[arg(long)]
	keep_debug_logs: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	let options = PipelineOptions {
		keep_debug_logs: cli.keep_debug_logs,
	};
	let rules = build_pipeline(&options).context("Failed to build rewrite pipeline")?;

	// Fail before producing any output: the caller redirects stdout into the
	// compiled source location, so a partial buffer must never be emitted.
	let buffer = read_source(&cli.file)
		.with_context(|| format!("Failed to load {}", cli.file.display()))?;

	let patched = apply_pipeline(&rules, &buffer);

	write_stdout(&patched).context("Failed to write patched source")?;
	Ok(ExitCode::SUCCESS)
}
