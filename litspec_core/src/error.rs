use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum LitspecError {
	#[error(transparent)]
	#[diagnostic(code(litspec::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to render markdown: {0}")]
	#[diagnostic(code(litspec::markdown))]
	Markdown(String),

	#[error("input file not found: `{0}`")]
	#[diagnostic(
		code(litspec::missing_input),
		help("run litspec from the directory containing the spec or pass `--input <FILE>`")
	)]
	MissingInput(String),

	#[error("page template not found: `{0}`")]
	#[diagnostic(
		code(litspec::missing_template),
		help("html output needs a page template; pass `--template <FILE>` or set `template` in litspec.toml")
	)]
	MissingTemplate(String),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(litspec::config_parse),
		help("check that litspec.toml is valid TOML with `input`, `template` and `renderer` keys")
	)]
	ConfigParse(String),

	#[error("invalid renderer command: `{0}`")]
	#[diagnostic(
		code(litspec::invalid_renderer),
		help("use a command such as `cmark --smart` or the value `builtin`")
	)]
	InvalidRenderer(String),

	#[error("failed to start renderer `{program}`: {reason}")]
	#[diagnostic(
		code(litspec::renderer_spawn),
		help("make sure the renderer is installed and on your PATH, or use `--renderer builtin`")
	)]
	RendererSpawn { program: String, reason: String },

	#[error("renderer `{program}` failed: {reason}")]
	#[diagnostic(code(litspec::renderer_failed))]
	RendererFailed { program: String, reason: String },

	#[error("error converting markdown version of spec to HTML")]
	#[diagnostic(
		code(litspec::empty_render),
		help("renderer `{renderer}` produced no output")
	)]
	EmptyRender { renderer: String },

	#[error("page template rendering failed: {0}")]
	#[diagnostic(
		code(litspec::template_render),
		help("every `$name` in the template must be a front matter key or `body`; write `$$` for a literal `$`")
	)]
	TemplateRender(String),
}

pub type LitspecResult<T> = Result<T, LitspecError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
