//! Cached regex patterns used by the conversion pass and the HTML checks.

use std::sync::LazyLock;

use regex::Regex;

// === Front matter ===

/// Matches `key: value` lines in the front matter.
pub static FIELD_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?m)^(\w+):(.*)$").unwrap());

// === Prose ===

/// Matches an ATX heading: the `#` run and the heading text.
pub static HEADING_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(#{1,6}) *(.*)").unwrap());

/// Matches the trailing `{-}` tag that marks a heading as unnumbered.
pub static UNNUMBERED_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r" *\{-\} *$").unwrap());

/// Matches the first `#` followed by spaces, where the heading anchor goes.
pub static HEADING_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"# +").unwrap());

/// Matches `[label](@target)` definition links.
pub static DEFINITION_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(@([^)]*)\)").unwrap());

// === Slugs ===

pub static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

pub static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

// === Rendered HTML ===

/// Matches `<hN><a id="x"></a>` as produced for anchored headings.
pub static RENDERED_HEADING_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r#"<h([1-6])><a id="([^"]*)"></a> ?"#).unwrap());

/// Matches an `s` directly after a closing link tag.
pub static PLURAL_LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</a>s").unwrap());

/// Matches `id="..."` attributes.
pub static ID_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"id="([^"]*)""#).unwrap());

/// Matches internal `href="#..."` links.
pub static INTERNAL_HREF_RE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r##"href="#([^"]*)""##).unwrap());

// === Page template ===

/// Matches a template placeholder: `$$`, `$name`, `${name}`, or a lone `$`
/// that starts none of those.
pub static TEMPLATE_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\}|())").unwrap()
});
