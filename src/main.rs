//! CLI entrypoint.

use std::error::Error;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use ifacedoc::{GeneratedFile, Ifacedoc};
use owo_colors::OwoColorize;

#[derive(Args, Clone)]
struct CommonArgs {
	/// Model JSON file describing the service schema
	model: PathBuf,

	/// Namespace used for fully-qualified labels and output paths
	#[arg(short = 'N', long)]
	namespace: Option<String>,

	/// Do not inject the generator banner into documents
	#[arg(long, default_value_t = false)]
	no_banner: bool,

	/// Disable ANSI colors in CLI output
	#[arg(long, default_value_t = false)]
	no_color: bool,
}

#[derive(Args, Clone)]
struct GenerateArgs {
	#[command(flatten)]
	common: CommonArgs,

	/// Output directory for generated documents
	#[arg(short = 'O', long, default_value = "docs")]
	output: PathBuf,
}

#[derive(Args, Clone)]
struct PrintArgs {
	#[command(flatten)]
	common: CommonArgs,

	/// Interface to print; prints every document when omitted
	#[arg(value_name = "INTERFACE")]
	interface: Option<String>,
}

#[derive(Args, Clone)]
struct ListArgs {
	#[command(flatten)]
	common: CommonArgs,
}

#[derive(Subcommand, Clone)]
enum Command {
	/// Generate documents and write them to the output directory (default).
	Generate(GenerateArgs),
	/// Print rendered documents to stdout.
	Print(PrintArgs),
	/// Produce a structured interface listing.
	List(ListArgs),
	/// Emit the parsed model as pretty-printed JSON.
	Raw(ListArgs),
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the ifacedoc CLI.
struct Cli {
	#[command(subcommand)]
	command: Command,
}

/// Build an Ifacedoc instance configured with common CLI knobs.
fn build_ifacedoc(common: &CommonArgs) -> Ifacedoc {
	let mut ifacedoc = Ifacedoc::new().with_banner(!common.no_banner);
	if let Some(namespace) = &common.namespace {
		ifacedoc = ifacedoc.with_namespace(namespace.clone());
	}
	ifacedoc
}

/// Determine whether stdout output should be colored.
fn should_color_output(common: &CommonArgs) -> bool {
	!common.no_color && std::io::stdout().is_terminal()
}

/// Generate documents and write them below the output directory.
fn run_generate(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
	let rs = build_ifacedoc(&args.common);
	let model = rs.load_model(&args.common.model)?;
	let written = rs.write(&model, &args.output)?;

	for path in &written {
		println!("wrote {}", path.display());
	}
	println!("{} document(s) generated.", written.len());

	Ok(())
}

/// Print one or all rendered documents to stdout.
fn run_print(args: &PrintArgs) -> Result<(), Box<dyn Error>> {
	let rs = build_ifacedoc(&args.common);
	let model = rs.load_model(&args.common.model)?;
	let files = rs.generate(&model);

	match &args.interface {
		Some(name) => {
			// Generated files are one per interface in model order.
			let index = model
				.interfaces
				.iter()
				.position(|interface| &interface.name == name)
				.ok_or_else(|| format!("no interface named \"{name}\" in the model"))?;
			print!("{}", files[index].content);
		}
		None => {
			let documents: Vec<&str> = files
				.iter()
				.map(|file| file.content.as_str())
				.collect();
			print!("{}", documents.join("\n---\n\n"));
		}
	}

	Ok(())
}

/// Print a structured interface listing with method counts and paths.
fn run_list(args: &ListArgs) -> Result<(), Box<dyn Error>> {
	let rs = build_ifacedoc(&args.common);
	let model = rs.load_model(&args.common.model)?;

	if model.interfaces.is_empty() {
		println!("No interfaces found.");
		return Ok(());
	}

	let files: Vec<GeneratedFile> = rs.generate(&model);
	let colored = should_color_output(&args.common);
	for (interface, file) in model.interfaces.iter().zip(&files) {
		let methods = interface.methods.len();
		if colored {
			println!(
				"{}  {} method(s)  {}",
				interface.name.green().bold(),
				methods,
				file.path_string().dimmed()
			);
		} else {
			println!("{}  {} method(s)  {}", interface.name, methods, file.path_string());
		}
	}

	Ok(())
}

/// Output the parsed model as pretty-printed JSON.
fn run_raw(args: &ListArgs) -> Result<(), Box<dyn Error>> {
	let rs = build_ifacedoc(&args.common);
	let model = rs.load_model(&args.common.model)?;
	println!("{}", rs.raw_json(&model)?);
	Ok(())
}

fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(cli) {
		if std::io::stderr().is_terminal() {
			eprintln!("{}", e.to_string().red());
		} else {
			eprintln!("{e}");
		}
		process::exit(1);
	}
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
	match cli.command {
		Command::Generate(args) => run_generate(&args),
		Command::Print(args) => run_print(&args),
		Command::List(args) => run_list(&args),
		Command::Raw(args) => run_raw(&args),
	}
}
