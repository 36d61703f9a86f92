use std::io::Write;
use std::process::Command;
use std::process::Stdio;

use markdown::CompileOptions;
use markdown::Options;

use crate::LitspecError;
use crate::LitspecResult;
use crate::RendererChoice;

/// Converts Markdown text to HTML.
///
/// Implementations signal failure through the returned error; an empty
/// result is handled by the caller.
pub trait MarkdownRenderer {
	/// Short name used in diagnostics.
	fn name(&self) -> &str;

	fn render(&self, markdown: &str) -> LitspecResult<String>;
}

/// Pipes Markdown through an external program on stdin and reads HTML back
/// from its stdout.
#[derive(Debug, Clone)]
pub struct CommandRenderer {
	program: String,
	args: Vec<String>,
}

impl CommandRenderer {
	pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
		Self {
			program: program.into(),
			args,
		}
	}
}

impl MarkdownRenderer for CommandRenderer {
	fn name(&self) -> &str {
		&self.program
	}

	fn render(&self, markdown: &str) -> LitspecResult<String> {
		tracing::debug!(program = %self.program, args = ?self.args, "spawning renderer");

		let mut child = Command::new(&self.program)
			.args(&self.args)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped())
			.spawn()
			.map_err(|e| {
				LitspecError::RendererSpawn {
					program: self.program.clone(),
					reason: e.to_string(),
				}
			})?;

		// Feed stdin from another thread so a renderer that writes before it
		// finishes reading can't fill the stdout pipe and block us.
		let mut stdin = child.stdin.take().ok_or_else(|| {
			LitspecError::RendererFailed {
				program: self.program.clone(),
				reason: "stdin was not captured".to_string(),
			}
		})?;
		let input = markdown.to_string();
		let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

		let output = child.wait_with_output()?;

		match writer.join() {
			Ok(Ok(())) => {}
			// The renderer may exit without reading everything; its exit
			// status below is what decides success.
			Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
			Ok(Err(e)) => return Err(e.into()),
			Err(_) => {
				return Err(LitspecError::RendererFailed {
					program: self.program.clone(),
					reason: "stdin writer panicked".to_string(),
				});
			}
		}

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
			let reason = if stderr.is_empty() {
				format!(
					"command exited with status {}",
					output
						.status
						.code()
						.map_or_else(|| "unknown".to_string(), |code| code.to_string())
				)
			} else {
				stderr
			};

			return Err(LitspecError::RendererFailed {
				program: self.program.clone(),
				reason,
			});
		}

		Ok(String::from_utf8_lossy(&output.stdout).to_string())
	}
}

/// Renders in process with the `markdown` crate. Raw HTML in the input is
/// passed through, since example containers and anchors are written as HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl MarkdownRenderer for BuiltinRenderer {
	fn name(&self) -> &str {
		"builtin"
	}

	fn render(&self, markdown: &str) -> LitspecResult<String> {
		let options = Options {
			compile: CompileOptions {
				allow_dangerous_html: true,
				..CompileOptions::default()
			},
			..Options::default()
		};

		markdown::to_html_with_options(markdown, &options)
			.map_err(|e| LitspecError::Markdown(e.to_string()))
	}
}

/// Build the renderer selected by `choice`.
pub fn renderer_for(choice: &RendererChoice) -> Box<dyn MarkdownRenderer> {
	match choice {
		RendererChoice::Builtin => Box::new(BuiltinRenderer),
		RendererChoice::Command { program, args } => {
			Box::new(CommandRenderer::new(program.clone(), args.clone()))
		}
	}
}
