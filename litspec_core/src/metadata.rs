use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::patterns::FIELD_RE;

/// The line that terminates the front matter block.
pub const FRONT_MATTER_TERMINATOR: &str = "...";

/// Key/value pairs parsed from the front matter.
pub type Metadata = BTreeMap<String, String>;

/// The front matter of a spec split off from the rest of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
	/// Raw front matter text including the `...` terminator line.
	pub raw: &'a str,
	/// Everything after the terminator line.
	pub rest: &'a str,
	/// Whether a terminator line was seen. When it is missing the whole input
	/// is treated as front matter and `rest` is empty.
	pub terminated: bool,
}

/// Split `input` after the first line consisting solely of `...`.
pub fn split_front_matter(input: &str) -> FrontMatter<'_> {
	let mut offset = 0;

	for line in input.split_inclusive('\n') {
		offset += line.len();

		if trim_line_ending(line) == FRONT_MATTER_TERMINATOR {
			return FrontMatter {
				raw: &input[..offset],
				rest: &input[offset..],
				terminated: true,
			};
		}
	}

	tracing::warn!("front matter has no `...` terminator, treating the whole input as metadata");

	FrontMatter {
		raw: input,
		rest: "",
		terminated: false,
	}
}

/// Parse `key: value` lines into a [`Metadata`] map. Lines that don't match
/// are skipped. Values are trimmed and surrounding quotes removed. A later
/// duplicate key overwrites the earlier one.
pub fn parse_metadata(front_matter: &str) -> Metadata {
	let mut metadata = Metadata::new();

	for captures in FIELD_RE.captures_iter(front_matter) {
		let value = unquote(captures[2].trim());
		metadata.insert(captures[1].to_string(), value.to_string());
	}

	metadata
}

/// Extract the metadata from the front matter of a complete document.
pub fn extract_metadata(input: &str) -> Metadata {
	parse_metadata(split_front_matter(input).raw)
}

fn unquote(value: &str) -> &str {
	for quote in ['\'', '"'] {
		if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
			return &value[1..value.len() - 1];
		}
	}

	value
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(input: &str) -> Cow<'_, str> {
	if input.contains('\r') {
		Cow::Owned(input.replace("\r\n", "\n").replace('\r', "\n"))
	} else {
		Cow::Borrowed(input)
	}
}

/// Strip a trailing `\n` or `\r\n`.
pub(crate) fn trim_line_ending(line: &str) -> &str {
	let line = line.strip_suffix('\n').unwrap_or(line);
	line.strip_suffix('\r').unwrap_or(line)
}
