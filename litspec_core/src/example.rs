use crate::Target;

/// Fence used around both halves of an example. Long enough that fences
/// inside example content never close it.
pub const EXAMPLE_FENCE: &str = "`````````````````````````````````````````````````````````";

/// The glyph that stands in for a space inside examples.
pub const SPACE_GLYPH: char = '\u{2423}';

/// Where the pass currently is relative to example blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
	/// Outside any example.
	#[default]
	Prose,
	/// Between the first and second `.` line: Markdown source.
	ExampleInput,
	/// Between the second and third `.` line: expected HTML.
	ExampleOutput,
}

impl Stage {
	/// The stage that follows a `.` line.
	pub fn next(self) -> Self {
		match self {
			Self::Prose => Self::ExampleInput,
			Self::ExampleInput => Self::ExampleOutput,
			Self::ExampleOutput => Self::Prose,
		}
	}

	pub fn in_example(self) -> bool {
		!matches!(self, Self::Prose)
	}
}

/// Markup emitted when a `.` line moves the pass out of `from`.
///
/// `number` is the number of the example being opened or closed and
/// `section` the text of the most recent heading.
pub fn transition_markup(from: Stage, number: usize, section: &str, target: Target) -> String {
	match from {
		Stage::Prose => open_example(number, section, target),
		Stage::ExampleInput => {
			format!(
				"{EXAMPLE_FENCE}\n\n\n</div>\n\n<div class=\"column\">\n\n{EXAMPLE_FENCE} html\n"
			)
		}
		Stage::ExampleOutput => format!("{EXAMPLE_FENCE}\n\n</div>\n</div>\n"),
	}
}

fn open_example(number: usize, section: &str, target: Target) -> String {
	let mut markup = format!(
		"\n<div class=\"example\" id=\"example-{number}\" data-section=\"{section}\">\n<div \
		 class=\"examplenum\"><a href=\"#example-{number}\">Example {number}</a>"
	);

	if target == Target::Html {
		markup.push_str(
			"&nbsp;&nbsp;<a class=\"dingus\" title=\"open in interactive dingus\">(interact)</a>",
		);
	}

	markup.push_str("</div>\n<div class=\"column\">\n\n");
	markup.push_str(EXAMPLE_FENCE);
	markup.push_str(" markdown\n");
	markup
}

/// Make spaces visible inside example content.
pub fn mark_spaces(line: &str) -> String {
	line.replace(' ', &SPACE_GLYPH.to_string())
}
