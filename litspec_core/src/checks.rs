use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::patterns::ID_ATTR_RE;
use crate::patterns::INTERNAL_HREF_RE;
use crate::reference::Reference;

/// A non-fatal problem with the converted document. Warnings never change
/// the exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Warning {
	/// The same `id` appears more than once in the rendered HTML.
	DuplicateIdentifier { id: String },
	/// An internal `href="#x"` has no element with `id="x"`.
	DanglingLink { href: String },
	/// Two references share a label (compared case-insensitively).
	DuplicateReference { label: String },
	/// The input ended while an example was still open.
	UnterminatedExample { number: usize },
}

impl fmt::Display for Warning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateIdentifier { id } => write!(f, "duplicate identifier '{id}'"),
			Self::DanglingLink { href } => write!(f, "internal link with no anchor '{href}'"),
			Self::DuplicateReference { label } => {
				write!(f, "duplicate reference link '[{label}]'")
			}
			Self::UnterminatedExample { number } => {
				write!(f, "example {number} is not closed before the end of input")
			}
		}
	}
}

/// Check rendered HTML for duplicate identifiers and internal links without
/// a matching anchor. Each duplicate occurrence is reported once per repeat.
pub fn check_html(html: &str) -> Vec<Warning> {
	let mut warnings = Vec::new();
	let mut ids = HashSet::new();

	for captures in ID_ATTR_RE.captures_iter(html) {
		let Some(id) = captures.get(1).map(|m| m.as_str()) else {
			continue;
		};
		if !ids.insert(id) {
			warnings.push(Warning::DuplicateIdentifier { id: id.to_string() });
		}
	}

	for captures in INTERNAL_HREF_RE.captures_iter(html) {
		let Some(href) = captures.get(1).map(|m| m.as_str()) else {
			continue;
		};
		if !ids.contains(href) {
			warnings.push(Warning::DanglingLink {
				href: href.to_string(),
			});
		}
	}

	warnings
}

/// Report reference labels that occur more than once.
pub fn check_references(references: &[Reference]) -> Vec<Warning> {
	let mut seen = HashSet::new();

	references
		.iter()
		.map(Reference::normalized_label)
		.filter(|label| !seen.insert(label.clone()))
		.map(|label| Warning::DuplicateReference { label })
		.collect()
}
