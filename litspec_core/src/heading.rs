use regex::NoExpand;
use serde::Serialize;

use crate::patterns::HEADING_ANCHOR_RE;
use crate::patterns::HEADING_RE;
use crate::patterns::NON_WORD_RE;
use crate::patterns::UNNUMBERED_RE;
use crate::patterns::WHITESPACE_RE;

/// One heading occurrence, recorded in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
	/// Nesting level, `1` to `6`.
	pub level: usize,
	/// Heading text without the `#` markers or the `{-}` tag.
	pub text: String,
	/// Identifier derived from `text`, see [`slugify`].
	pub slug: String,
	/// Dotted section number such as `2.1.3`. Empty for unnumbered headings.
	pub number: String,
}

impl Section {
	pub fn is_numbered(&self) -> bool {
		!self.number.is_empty()
	}
}

/// A heading line split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine<'a> {
	pub level: usize,
	/// Heading text with the `{-}` tag removed.
	pub text: &'a str,
	pub unnumbered: bool,
}

/// Parse a line (without its line ending) as an ATX heading.
pub fn parse_heading(line: &str) -> Option<HeadingLine<'_>> {
	let captures = HEADING_RE.captures(line)?;
	let level = captures.get(1)?.as_str().len();
	let raw_text = captures.get(2)?.as_str();

	// `{-}` must be the very last thing on the line.
	let (text, unnumbered) = if raw_text.ends_with("{-}") {
		let stripped = UNNUMBERED_RE
			.find(raw_text)
			.map_or(raw_text, |m| &raw_text[..m.start()]);
		(stripped, true)
	} else {
		(raw_text, false)
	};

	Some(HeadingLine {
		level,
		text,
		unnumbered,
	})
}

/// Hierarchical heading counter. Holds one component per active level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingCounter {
	stack: Vec<usize>,
}

impl HeadingCounter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Advance the counter for a numbered heading at `level` and return the
	/// dotted number.
	///
	/// - same level: the last component is incremented.
	/// - deeper: the stack is extended with `1`s.
	/// - shallower: the stack is truncated and the new last component is
	///   incremented, so siblings resume after deeper subtrees.
	pub fn advance(&mut self, level: usize) -> String {
		let level = level.max(1);
		let last_level = self.stack.len();

		if level == last_level {
			self.increment_last();
		} else if level > last_level {
			self.stack.resize(level, 1);
		} else {
			self.stack.truncate(level);
			self.increment_last();
		}

		self.number()
	}

	/// The current dotted number.
	pub fn number(&self) -> String {
		self.stack
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join(".")
	}

	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	fn increment_last(&mut self) {
		if let Some(last) = self.stack.last_mut() {
			*last += 1;
		}
	}
}

/// Derive an identifier from heading text: trim, lowercase, collapse runs of
/// non-word characters to a single space, then collapse whitespace runs to
/// `-`.
///
/// ```
/// use litspec_core::slugify;
///
/// assert_eq!(slugify("Tabs and Spaces"), "tabs-and-spaces");
/// assert_eq!(slugify("  ATX headings  "), "atx-headings");
/// assert_eq!(slugify("Links (and images)"), "links-and-images-");
/// ```
pub fn slugify(text: &str) -> String {
	let lowered = text.trim().to_lowercase();
	let spaced = NON_WORD_RE.replace_all(&lowered, " ");
	WHITESPACE_RE.replace_all(&spaced, "-").into_owned()
}

/// Rewrite a heading line for output: the first space becomes a number span
/// and the first `#` followed by spaces gets an empty anchor carrying `slug`.
pub fn decorate_heading(line: &str, slug: &str, number: &str) -> String {
	let span = format!(" <span class=\"number\">{number}</span> ");
	let numbered = line.replacen(' ', &span, 1);
	let anchor = format!("# <a id=\"{slug}\"></a>");
	HEADING_ANCHOR_RE
		.replacen(&numbered, 1, NoExpand(&anchor))
		.into_owned()
}

/// Remove the trailing `{-}` tag from a raw heading line.
pub fn strip_unnumbered_tag(line: &str) -> String {
	UNNUMBERED_RE.replace(line, "").into_owned()
}
