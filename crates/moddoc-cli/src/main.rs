//! CLI entrypoint.

use std::error::Error;
use std::iter;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use moddoc_core::{Moddoc, RenderFormat};
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the moddoc CLI.
struct Cli {
	/// JSON documentation files, or directories containing them
	#[arg(required = true, value_name = "INPUT")]
	inputs: Vec<PathBuf>,

	/// Folder receiving one page per module plus the index
	#[arg(short = 'o', long, env = "MODDOC_OUTPUT", default_value = "docs")]
	output: PathBuf,

	/// Select the output format
	#[arg(
		short = 'f',
		long,
		value_enum,
		env = "MODDOC_FORMAT",
		default_value = "markdown"
	)]
	format: OutputFormat,

	/// Folder of `<name>.<format>` files replacing the built-in templates
	#[arg(short = 't', long, env = "MODDOC_TEMPLATES", value_name = "DIR")]
	templates: Option<PathBuf>,

	/// Enable verbose mode, logging every written file
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,

	/// Only report errors
	#[arg(short = 'q', long, default_value_t = false, conflicts_with = "verbose")]
	quiet: bool,
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over the verbosity flags.
fn init_logging(cli: &Cli) {
	let default_level = if cli.verbose {
		"debug"
	} else if cli.quiet {
		"error"
	} else {
		"warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

/// Render the inputs into the output folder.
fn run_cmdline(cli: &Cli) -> Result<(), Box<dyn Error>> {
	let mut moddoc = Moddoc::new()
		.with_format(cli.format.into())
		.with_silent(cli.quiet);
	if let Some(ref templates) = cli.templates {
		moddoc = moddoc.with_template_dir(templates);
	}

	let written = moddoc.generate(&cli.inputs, &cli.output)?;

	if !cli.quiet {
		let pages = written.len().saturating_sub(1);
		println!(
			"{} {pages} module page{} and the index to {}",
			"Wrote".green().bold(),
			if pages == 1 { "" } else { "s" },
			cli.output.display()
		);
	}

	Ok(())
}

/// Messages of `err` and each of its sources, outermost first.
fn error_chain(err: &(dyn Error + 'static)) -> Vec<String> {
	iter::successors(Some(err), |&e| e.source())
		.map(ToString::to_string)
		.collect()
}

fn main() {
	let cli = Cli::parse();
	init_logging(&cli);

	if let Err(e) = run_cmdline(&cli) {
		let mut chain = error_chain(e.as_ref()).into_iter();
		if let Some(message) = chain.next() {
			eprintln!("{} {message}", "error:".red().bold());
		}
		for cause in chain {
			eprintln!("  {} {cause}", "caused by:".red());
		}
		process::exit(1);
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
/// Output formats the CLI can emit.
enum OutputFormat {
	/// One Markdown page per module (default).
	Markdown,
	/// One HTML page per module.
	Html,
}

impl From<OutputFormat> for RenderFormat {
	fn from(format: OutputFormat) -> Self {
		match format {
			OutputFormat::Markdown => RenderFormat::Markdown,
			OutputFormat::Html => RenderFormat::Html,
		}
	}
}
