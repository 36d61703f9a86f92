use crate::Target;
use crate::Warning;
use crate::example::Stage;
use crate::example::mark_spaces;
use crate::example::transition_markup;
use crate::heading::HeadingCounter;
use crate::heading::HeadingLine;
use crate::heading::Section;
use crate::heading::decorate_heading;
use crate::heading::parse_heading;
use crate::heading::slugify;
use crate::heading::strip_unnumbered_tag;
use crate::metadata::Metadata;
use crate::metadata::normalize_line_endings;
use crate::metadata::parse_metadata;
use crate::metadata::split_front_matter;
use crate::metadata::trim_line_ending;
use crate::reference::Reference;
use crate::reference::resolve_definitions;

/// The line that moves the pass from one example stage to the next.
pub const EXAMPLE_DELIMITER: &str = ".";

/// A content line classified against the current [`Stage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
	/// A lone `.` line.
	ExampleDelimiter,
	/// A heading outside any example.
	Heading(HeadingLine<'a>),
	/// Any other line outside an example.
	Prose(&'a str),
	/// A line inside an example, emitted with visible spaces.
	RawExample(&'a str),
}

/// Classify `line` (without its line ending).
pub fn classify(line: &str, stage: Stage) -> Line<'_> {
	if line == EXAMPLE_DELIMITER {
		return Line::ExampleDelimiter;
	}

	if stage.in_example() {
		return Line::RawExample(line);
	}

	match parse_heading(line) {
		Some(heading) => Line::Heading(heading),
		None => Line::Prose(line),
	}
}

/// The result of one conversion pass, before output assembly.
#[derive(Debug, Clone)]
pub struct Document {
	pub target: Target,
	/// The front matter exactly as it appeared in the input.
	pub front_matter: String,
	pub metadata: Metadata,
	/// Headings in document order.
	pub sections: Vec<Section>,
	/// References in discovery order, duplicates included.
	pub references: Vec<Reference>,
	/// Transformed content.
	pub body: String,
	/// Number of examples opened.
	pub examples: usize,
	/// Problems found during the pass.
	pub warnings: Vec<Warning>,
}

/// All state for one conversion pass.
#[derive(Debug)]
pub struct RenderSession {
	target: Target,
	stage: Stage,
	examples: usize,
	section: String,
	counter: HeadingCounter,
	sections: Vec<Section>,
	references: Vec<Reference>,
	buffer: Vec<String>,
}

impl RenderSession {
	pub fn new(target: Target) -> Self {
		Self {
			target,
			stage: Stage::default(),
			examples: 0,
			section: String::new(),
			counter: HeadingCounter::new(),
			sections: Vec::new(),
			references: Vec::new(),
			buffer: Vec::new(),
		}
	}

	pub fn stage(&self) -> Stage {
		self.stage
	}

	/// Feed one line, including its line ending if it has one.
	pub fn push_line(&mut self, line: &str) {
		let content = trim_line_ending(line);
		let ending = &line[content.len()..];

		match classify(content, self.stage) {
			Line::ExampleDelimiter => self.on_delimiter(),
			Line::Heading(heading) => {
				let emitted = self.on_heading(content, &heading);
				self.emit(emitted, ending);
			}
			Line::Prose(text) => {
				let emitted = resolve_definitions(text, self.target, &mut self.references);
				self.emit(emitted, ending);
			}
			Line::RawExample(text) => self.emit(mark_spaces(text), ending),
		}
	}

	fn on_delimiter(&mut self) {
		if self.stage == Stage::Prose {
			self.examples += 1;
			tracing::debug!(example = self.examples, section = %self.section, "opening example");
		}

		let markup = transition_markup(self.stage, self.examples, &self.section, self.target);
		self.buffer.push(markup);
		self.stage = self.stage.next();
	}

	fn on_heading(&mut self, line: &str, heading: &HeadingLine<'_>) -> String {
		let number = if heading.unnumbered {
			String::new()
		} else {
			self.counter.advance(heading.level)
		};
		let slug = slugify(heading.text);

		let line = if heading.unnumbered && self.target == Target::Html {
			strip_unnumbered_tag(line)
		} else {
			line.to_string()
		};
		let decorated = decorate_heading(&line, &slug, &number);

		tracing::debug!(level = heading.level, %number, %slug, "heading");

		self.section = heading.text.to_string();
		self.references.push(Reference::new(heading.text, &slug));
		self.sections.push(Section {
			level: heading.level,
			text: heading.text.to_string(),
			slug,
			number,
		});

		decorated
	}

	fn emit(&mut self, mut text: String, ending: &str) {
		text.push_str(ending);
		self.buffer.push(text);
	}

	/// End the pass. Consumes the session and returns its collected state.
	pub fn finish(self, front_matter: &str) -> Document {
		let mut warnings = Vec::new();

		if self.stage.in_example() {
			tracing::debug!(example = self.examples, "input ended inside an example");
			warnings.push(Warning::UnterminatedExample {
				number: self.examples,
			});
		}

		Document {
			target: self.target,
			front_matter: front_matter.to_string(),
			metadata: parse_metadata(front_matter),
			sections: self.sections,
			references: self.references,
			body: self.buffer.concat(),
			examples: self.examples,
			warnings,
		}
	}
}

/// Run the conversion pass over a complete spec. Line endings are
/// normalized to `\n` first.
pub fn convert(input: &str, target: Target) -> Document {
	let input = normalize_line_endings(input);
	let front_matter = split_front_matter(&input);
	let mut session = RenderSession::new(target);

	for line in front_matter.rest.split_inclusive('\n') {
		session.push_line(line);
	}

	let document = session.finish(front_matter.raw);
	tracing::debug!(
		sections = document.sections.len(),
		examples = document.examples,
		references = document.references.len(),
		"conversion pass complete"
	);

	document
}
