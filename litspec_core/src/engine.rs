use std::path::Path;

use crate::LitspecError;
use crate::LitspecResult;
use crate::MarkdownRenderer;
use crate::Output;
use crate::Settings;
use crate::convert;
use crate::emit;
use crate::renderer_for;

/// Read the spec at `settings.input`, convert it and assemble the output.
pub fn build(settings: &Settings) -> LitspecResult<Output> {
	let renderer = renderer_for(&settings.renderer);
	build_with_renderer(settings, renderer.as_ref())
}

/// Like [`build`], with an explicit renderer in place of the configured one.
pub fn build_with_renderer(
	settings: &Settings,
	renderer: &dyn MarkdownRenderer,
) -> LitspecResult<Output> {
	let input = read_file(&settings.input, LitspecError::MissingInput)?;
	tracing::debug!(input = %settings.input.display(), target = %settings.target, "converting");

	let document = convert(&input, settings.target);
	emit(&document, renderer, || {
		read_file(&settings.template, LitspecError::MissingTemplate)
	})
}

fn read_file(path: &Path, missing: fn(String) -> LitspecError) -> LitspecResult<String> {
	std::fs::read_to_string(path).map_err(|e| {
		if e.kind() == std::io::ErrorKind::NotFound {
			missing(path.display().to_string())
		} else {
			LitspecError::Io(e)
		}
	})
}
