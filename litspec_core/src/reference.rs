use std::fmt;

use regex::Captures;
use serde::Serialize;

use crate::Target;
use crate::patterns::DEFINITION_RE;

/// A link target collected during the pass. Rendered as a Markdown reference
/// definition `[label]: #target` at the end of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
	pub label: String,
	pub target: String,
}

impl Reference {
	pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			target: target.into(),
		}
	}

	/// The label used to detect duplicates: the text of the bracketed
	/// `[label]` part of the definition line, uppercased. A label containing
	/// `]` is cut at the first one.
	pub fn normalized_label(&self) -> String {
		self.label
			.split(']')
			.next()
			.unwrap_or_default()
			.to_uppercase()
	}
}

impl fmt::Display for Reference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[{}]: #{}", self.label, self.target)
	}
}

/// Resolve `[label](@target)` definition links in a prose line.
///
/// Every match is pushed onto `references`. For HTML output the match is
/// replaced by a self-linking `definition` anchor; Markdown output keeps the
/// text as written since the reference list resolves it.
pub fn resolve_definitions(line: &str, target: Target, references: &mut Vec<Reference>) -> String {
	DEFINITION_RE
		.replace_all(line, |captures: &Captures<'_>| {
			let label = &captures[1];
			let id = &captures[2];
			references.push(Reference::new(label, id));

			match target {
				Target::Html => {
					format!("<a id=\"{id}\" href=\"#{id}\" class=\"definition\">{label}</a>")
				}
				Target::Markdown => captures[0].to_string(),
			}
		})
		.into_owned()
}
