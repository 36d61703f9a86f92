//! `litspec_core` turns a literate specification into a numbered Markdown or
//! HTML document. A spec is a Markdown file with front matter, headings,
//! prose, and examples written as `.`-delimited input/output pairs.
//!
//! ## Processing Pipeline
//!
//! ```text
//! spec.txt
//!   → Front matter (everything up to the `...` line, parsed into key/value metadata)
//!   → Conversion pass (classifies each line, numbers headings, wraps examples, collects references)
//!   → Emitter (markdown: front matter + content + reference list;
//!              html: table of contents → renderer → post-processing → page template)
//!   → Checks (duplicate ids, dangling links, duplicate reference labels)
//! ```
//!
//! ## Input Format
//!
//! ```text
//! ---
//! title: Demo Spec
//! version: '0.1'
//! ...
//!
//! # Introduction
//!
//! A [paragraph](@paragraph) is a run of lines.
//!
//! ## Appendix {-}
//!
//! .
//! *hi*
//! .
//! <p><em>hi</em></p>
//! .
//! ```
//!
//! Headings are numbered hierarchically unless they end in `{-}`. Each
//! `[label](@target)` registers a definition that other parts of the spec can
//! link to with `[label]`.
//!
//! ## Quick Start
//!
//! ```rust
//! use litspec_core::Target;
//! use litspec_core::convert;
//!
//! let spec = "title: Demo\n...\n# Intro\n.\n*hi*\n.\n<em>hi</em>\n.\n";
//! let document = convert(spec, Target::Markdown);
//!
//! assert_eq!(document.sections[0].number, "1");
//! assert_eq!(document.examples, 1);
//! assert_eq!(document.metadata["title"], "Demo");
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `litspec.toml` loading and resolution of the input, template
//!   and renderer settings.
//! - [`renderer`]: the [`MarkdownRenderer`] seam with subprocess and in-process
//!   implementations.

pub use checks::*;
pub use config::*;
pub use emit::*;
pub use engine::*;
pub use error::*;
pub use example::Stage;
pub use heading::*;
pub use metadata::*;
pub use reference::*;
pub use renderer::*;
pub use session::*;

mod checks;
pub mod config;
mod emit;
mod engine;
#[allow(unused_assignments)]
mod error;
pub mod example;
mod heading;
mod metadata;
pub(crate) mod patterns;
mod reference;
pub mod renderer;
mod session;

#[cfg(test)]
mod __fixtures;
