use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::LitspecError;
use crate::LitspecResult;

/// Default input file, relative to the project root.
pub const DEFAULT_INPUT: &str = "spec.txt";

/// Default page template, relative to the project root.
pub const DEFAULT_TEMPLATE: &str = "tools/template.html";

/// Default external renderer command.
pub const DEFAULT_RENDERER: &str = "cmark --smart";

/// Renderer value that selects the in-process renderer.
pub const BUILTIN_RENDERER: &str = "builtin";

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = [
	"litspec.toml",
	".litspec.toml",
	".config/litspec.toml",
];

/// The kind of document to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
	Markdown,
	Html,
}

impl fmt::Display for Target {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Markdown => f.write_str("markdown"),
			Self::Html => f.write_str("html"),
		}
	}
}

/// Configuration loaded from a `litspec.toml` file. Every key is optional.
///
/// ```toml
/// input = "spec.txt"
/// template = "tools/template.html"
/// renderer = "cmark --smart"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LitspecConfig {
	/// The literate spec to convert.
	#[serde(default)]
	pub input: Option<PathBuf>,
	/// Page template used for HTML output.
	#[serde(default)]
	pub template: Option<PathBuf>,
	/// Markdown to HTML renderer: a command line, or `builtin`.
	#[serde(default)]
	pub renderer: Option<String>,
}

impl LitspecConfig {
	/// Load the first config file found under `root`, if any.
	pub fn load(root: &Path) -> LitspecResult<Option<Self>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config: Self =
			toml::from_str(&content).map_err(|e| LitspecError::ConfigParse(e.to_string()))?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	/// Path of the config file that [`LitspecConfig::load`] would read.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}
}

/// Which Markdown to HTML renderer to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererChoice {
	/// Pipe through an external program.
	Command { program: String, args: Vec<String> },
	/// Render in process with the `markdown` crate.
	Builtin,
}

impl RendererChoice {
	/// Parse a renderer setting. `builtin` selects the in-process renderer;
	/// anything else is split on whitespace into a program and its arguments.
	pub fn parse(value: &str) -> LitspecResult<Self> {
		if value.trim() == BUILTIN_RENDERER {
			return Ok(Self::Builtin);
		}

		let mut parts = value.split_whitespace().map(ToString::to_string);
		let Some(program) = parts.next() else {
			return Err(LitspecError::InvalidRenderer(value.to_string()));
		};

		Ok(Self::Command {
			program,
			args: parts.collect(),
		})
	}
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub target: Target,
	pub input: PathBuf,
	pub template: PathBuf,
	pub renderer: RendererChoice,
}

/// Values given on the command line. They win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub input: Option<PathBuf>,
	pub template: Option<PathBuf>,
	pub renderer: Option<String>,
}

impl Settings {
	/// Combine defaults, the config file under `root` and `overrides`.
	/// Relative paths are resolved against `root`.
	pub fn resolve(root: &Path, target: Target, overrides: Overrides) -> LitspecResult<Self> {
		let config = LitspecConfig::load(root)?.unwrap_or_default();

		let input = overrides
			.input
			.or(config.input)
			.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
		let template = overrides
			.template
			.or(config.template)
			.unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE));
		let renderer = overrides
			.renderer
			.or(config.renderer)
			.unwrap_or_else(|| DEFAULT_RENDERER.to_string());

		Ok(Self {
			target,
			input: root.join(input),
			template: root.join(template),
			renderer: RendererChoice::parse(&renderer)?,
		})
	}
}
