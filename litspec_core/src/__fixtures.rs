use crate::LitspecError;
use crate::LitspecResult;
use crate::MarkdownRenderer;

pub const FENCE: &str = crate::example::EXAMPLE_FENCE;

/// The smallest spec with one heading and one example.
pub const DEMO_SPEC: &str = "title: Demo\n...\n# Intro\n.\n*hi*\n.\n<em>hi</em>\n.\n";

/// A spec exercising nesting, unnumbered headings, definitions and an
/// example containing spaces.
pub const NESTED_SPEC: &str = "---
title: 'Nested Spec'
author: \"Jane Doe\"
version: 0.2
...

# Introduction

A [block](@block) is a structural element.

## What is Markdown?

### Background

## Why a spec?

# Blocks

Each [block] is one of several kinds.

.
  indented code
.
<pre><code>indented code
</code></pre>
.

# Appendix {-}
";

/// Passes the Markdown straight through, optionally wrapping it so tests can
/// see the renderer ran.
#[derive(Debug, Default)]
pub struct EchoRenderer {
	pub wrap: bool,
}

impl MarkdownRenderer for EchoRenderer {
	fn name(&self) -> &str {
		"echo"
	}

	fn render(&self, markdown: &str) -> LitspecResult<String> {
		if self.wrap {
			Ok(format!("<main>{markdown}</main>"))
		} else {
			Ok(markdown.to_string())
		}
	}
}

/// Returns a fixed string regardless of input.
#[derive(Debug)]
pub struct FixedRenderer(pub &'static str);

impl MarkdownRenderer for FixedRenderer {
	fn name(&self) -> &str {
		"fixed"
	}

	fn render(&self, _markdown: &str) -> LitspecResult<String> {
		Ok(self.0.to_string())
	}
}

/// Always fails.
#[derive(Debug)]
pub struct FailingRenderer;

impl MarkdownRenderer for FailingRenderer {
	fn name(&self) -> &str {
		"failing"
	}

	fn render(&self, _markdown: &str) -> LitspecResult<String> {
		Err(LitspecError::RendererFailed {
			program: "failing".to_string(),
			reason: "boom".to_string(),
		})
	}
}

pub fn demo_markdown_body() -> String {
	format!(
		"# <a id=\"intro\"></a><span class=\"number\">1</span> Intro\n\n<div class=\"example\" \
		 id=\"example-1\" data-section=\"Intro\">\n<div class=\"examplenum\"><a \
		 href=\"#example-1\">Example 1</a></div>\n<div \
		 class=\"column\">\n\n{FENCE} markdown\n*hi*\n{FENCE}\n\n\n</div>\n\n<div \
		 class=\"column\">\n\n{FENCE} html\n<em>hi</em>\n{FENCE}\n\n</div>\n</div>\n"
	)
}
