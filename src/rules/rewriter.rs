use crate::error::{Result, SrcpatchError};
use regex::bytes::Regex;

/// One deterministic transformation step in the rewrite pipeline.
///
/// Rules operate on raw bytes, never decoded text: the patched sources may
/// contain non-ASCII string literals, and escape sequences must be matched
/// as the bytes they are written as.
#[derive(Debug)]
pub enum RewriteRule {
	/// Exact byte-sequence find-and-replace, every occurrence.
	Literal {
		find: &'static [u8],
		replace: &'static [u8],
	},

	/// Regex substitution; the replacement template may carry capture-group
	/// references like `${1}`.
	Pattern {
		regex: Regex,
		replacement: &'static [u8],
	},

	/// Regex deletion; every non-overlapping match is removed entirely.
	Delete { regex: Regex },
}

impl RewriteRule {
	/// Build a literal substitution rule.
	pub fn literal(find: &'static [u8], replace: &'static [u8]) -> Self {
		RewriteRule::Literal { find, replace }
	}

	/// Build a pattern substitution rule from a regex pattern string.
	pub fn pattern(pattern: &str, replacement: &'static [u8]) -> Result<Self> {
		Ok(RewriteRule::Pattern {
			regex: compile_pattern(pattern)?,
			replacement,
		})
	}

	/// Build a pattern deletion rule from a regex pattern string.
	pub fn delete(pattern: &str) -> Result<Self> {
		Ok(RewriteRule::Delete {
			regex: compile_pattern(pattern)?,
		})
	}

	/// Apply this rule to a buffer, producing the rewritten buffer.
	///
	/// A rule whose target text is absent is a silent no-op; the rules are
	/// best-effort patches against a specific upstream source snapshot.
	pub fn apply(&self, input: &[u8]) -> Vec<u8> {
		match self {
			RewriteRule::Literal { find, replace } => replace_literal(input, find, replace),
			RewriteRule::Pattern { regex, replacement } => {
				regex.replace_all(input, *replacement).into_owned()
			}
			RewriteRule::Delete { regex } => regex.replace_all(input, &b""[..]).into_owned(),
		}
	}
}

/// Compile a byte-oriented regex pattern string.
fn compile_pattern(pattern: &str) -> Result<Regex> {
	Regex::new(pattern).map_err(|source| SrcpatchError::InvalidPattern {
		pattern: pattern.to_string(),
		source,
	})
}

/// Replace every occurrence of `find` in `haystack` with `replace`.
///
/// Occurrences are found left to right and do not overlap; replaced text is
/// never rescanned, so a replacement containing `find` cannot loop.
fn replace_literal(haystack: &[u8], find: &[u8], replace: &[u8]) -> Vec<u8> {
	if find.is_empty() {
		return haystack.to_vec();
	}

	let mut out = Vec::with_capacity(haystack.len());
	let mut rest = haystack;

	while let Some(offset) = find_subslice(rest, find) {
		out.extend_from_slice(&rest[..offset]);
		out.extend_from_slice(replace);
		rest = &rest[offset + find.len()..];
	}

	out.extend_from_slice(rest);
	out
}

/// Find the byte offset of the first occurrence of `needle` in `haystack`.
fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}
