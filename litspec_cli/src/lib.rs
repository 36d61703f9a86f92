use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use litspec_core::Overrides;
use litspec_core::Target;

#[derive(Parser)]
#[command(
	name = "litspec",
	author,
	version,
	about = "Convert a literate spec into numbered Markdown or HTML.",
	long_about = "litspec reads a literate specification (front matter, headings, prose and \
	              `.`-delimited examples) and writes a single document to stdout.\n\nHeadings are \
	              numbered, examples are laid out as side-by-side source and output columns, and \
	              `[label](@target)` definitions become link targets.\n\nQuick start:\n  litspec \
	              markdown > spec.md\n  litspec html > spec.html"
)]
pub struct LitspecCli {
	/// The kind of document to write to stdout.
	#[arg(value_enum)]
	pub format: Format,

	/// Path to the project root directory. Relative input and template paths
	/// are resolved against it.
	#[arg(long, short)]
	pub path: Option<PathBuf>,

	/// The spec to convert. Defaults to `spec.txt`.
	#[arg(long, short)]
	pub input: Option<PathBuf>,

	/// Page template for html output. Defaults to `tools/template.html`.
	#[arg(long, short)]
	pub template: Option<PathBuf>,

	/// Markdown to HTML renderer: a command that reads Markdown on stdin and
	/// writes HTML to stdout, or `builtin`. Defaults to `cmark --smart`.
	#[arg(long, short)]
	pub renderer: Option<String>,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl LitspecCli {
	/// The command line values that take precedence over `litspec.toml`.
	pub fn overrides(&self) -> Overrides {
		Overrides {
			input: self.input.clone(),
			template: self.template.clone(),
			renderer: self.renderer.clone(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	/// Markdown with numbered headings, example blocks and a reference list.
	Markdown,
	/// A complete HTML page with a table of contents.
	Html,
}

impl From<Format> for Target {
	fn from(format: Format) -> Self {
		match format {
			Format::Markdown => Self::Markdown,
			Format::Html => Self::Html,
		}
	}
}
