use regex::NoExpand;

use crate::Document;
use crate::LitspecError;
use crate::LitspecResult;
use crate::MarkdownRenderer;
use crate::Target;
use crate::Warning;
use crate::checks::check_html;
use crate::checks::check_references;
use crate::example::SPACE_GLYPH;
use crate::heading::Section;
use crate::metadata::Metadata;
use crate::patterns::PLURAL_LINK_RE;
use crate::patterns::RENDERED_HEADING_RE;
use crate::patterns::TEMPLATE_PLACEHOLDER_RE;

/// What a visible space turns into in the final HTML.
pub const SPACE_MARKUP: &str = "<span class=\"space\"> </span>";

impl Document {
	/// One `[label]: #target` line per reference, in discovery order.
	pub fn reference_definitions(&self) -> String {
		self.references
			.iter()
			.map(ToString::to_string)
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// The transformed content followed by the reference definitions.
	pub fn markdown_body(&self) -> String {
		format!("{}\n\n{}\n", self.body, self.reference_definitions())
	}

	/// The complete Markdown document: front matter, content, references.
	pub fn to_markdown(&self) -> String {
		format!("{}\n\n{}", self.front_matter, self.markdown_body())
	}

	/// A nested Markdown list linking to every section.
	pub fn table_of_contents(&self) -> String {
		let entries = self
			.sections
			.iter()
			.map(toc_entry)
			.collect::<Vec<_>>()
			.join("\n");

		format!("<div id=\"TOC\">\n\n{entries}\n\n</div>\n\n")
	}
}

fn toc_entry(section: &Section) -> String {
	let indent = "    ".repeat(section.level.saturating_sub(1));

	if section.is_numbered() {
		format!(
			"{indent}* [{} {}](#{})",
			section.number, section.text, section.slug
		)
	} else {
		format!("{indent}* [{}](#{})", section.text, section.slug)
	}
}

/// Clean up renderer output: visible spaces become styled spans, heading
/// anchors fold into the heading's own `id`, and a plural `s` right after a
/// link moves inside it.
pub fn postprocess_html(html: &str) -> String {
	let spaced = html.replace(SPACE_GLYPH, SPACE_MARKUP);
	let headings = RENDERED_HEADING_RE.replace_all(&spaced, "<h${1} id=\"${2}\">");
	PLURAL_LINK_RE
		.replace_all(&headings, NoExpand("s</a>"))
		.into_owned()
}

/// Substitute `metadata` and `body` into the page template.
///
/// `$name` and `${name}` are replaced by the value of `name`, with `body`
/// taking precedence over a metadata key of the same name. `$$` becomes a
/// literal `$`. An unknown name or a stray `$` is an error.
pub fn render_page(template: &str, metadata: &Metadata, body: &str) -> LitspecResult<String> {
	let mut page = String::with_capacity(template.len() + body.len());
	let mut last = 0;

	for captures in TEMPLATE_PLACEHOLDER_RE.captures_iter(template) {
		let Some(placeholder) = captures.get(0) else {
			continue;
		};
		page.push_str(&template[last..placeholder.start()]);
		last = placeholder.end();

		if captures.get(1).is_some() {
			page.push('$');
			continue;
		}

		let line = template[..placeholder.start()].matches('\n').count() + 1;
		let Some(name) = captures.get(2).or_else(|| captures.get(3)) else {
			return Err(LitspecError::TemplateRender(format!(
				"invalid placeholder on line {line}"
			)));
		};

		let value = match name.as_str() {
			"body" => body,
			key => {
				metadata.get(key).map(String::as_str).ok_or_else(|| {
					LitspecError::TemplateRender(format!("unknown key `{key}` on line {line}"))
				})?
			}
		};
		page.push_str(value);
	}

	page.push_str(&template[last..]);

	Ok(page)
}

/// The result of rendering a document to HTML.
#[derive(Debug, Clone)]
pub struct HtmlOutput {
	/// The full page after template substitution.
	pub page: String,
	/// The post-processed renderer output that was substituted as `body`.
	pub body: String,
	/// Consistency problems found in `body`.
	pub warnings: Vec<Warning>,
}

/// Render `document` to an HTML page.
pub fn render_html(
	document: &Document,
	renderer: &dyn MarkdownRenderer,
	template: &str,
) -> LitspecResult<HtmlOutput> {
	let markdown = format!("{}{}", document.table_of_contents(), document.markdown_body());
	tracing::debug!(renderer = renderer.name(), bytes = markdown.len(), "rendering html");
	let rendered = renderer.render(&markdown)?;

	if rendered.is_empty() {
		return Err(LitspecError::EmptyRender {
			renderer: renderer.name().to_string(),
		});
	}

	let body = postprocess_html(&rendered);
	let page = render_page(template, &document.metadata, &body)?;
	let warnings = check_html(&body);

	Ok(HtmlOutput {
		page,
		body,
		warnings,
	})
}

/// The final text of a conversion together with every warning raised.
#[derive(Debug, Clone)]
pub struct Output {
	pub text: String,
	pub warnings: Vec<Warning>,
}

/// Produce the final document for `document.target`. `template` is only read
/// for HTML output.
pub fn emit(
	document: &Document,
	renderer: &dyn MarkdownRenderer,
	template: impl FnOnce() -> LitspecResult<String>,
) -> LitspecResult<Output> {
	let mut warnings = document.warnings.clone();

	let text = match document.target {
		Target::Markdown => document.to_markdown(),
		Target::Html => {
			let template = template()?;
			let html = render_html(document, renderer, &template)?;
			warnings.extend(html.warnings);
			html.page
		}
	};

	warnings.extend(check_references(&document.references));

	Ok(Output { text, warnings })
}
