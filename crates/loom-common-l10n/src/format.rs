// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Placeholder rewriting for exported resource strings.
//!
//! Resource values use composite-format placeholders (`{0}`, `{1,-8}`,
//! `{0:D2}`). Clients written against other templating conventions get the
//! values with each placeholder rewritten to `prefix + index + postfix`.

use std::collections::HashSet;
use std::iter::Peekable;
use std::str::CharIndices;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FormatError;

static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("placeholder pattern is valid"));

/// Upper bound (exclusive) on a placeholder index or alignment.
const MAX_ITEM_NUMBER: usize = 1_000_000;

/// Rewrite every composite-format placeholder of `template` as
/// `prefix + n + postfix`.
///
/// One replacement is generated per distinct placeholder *text*: `{0}` and
/// `{0:D2}` count as two, `{0}` twice counts as one. The template is then
/// formatted positionally against those replacements, so an index that
/// reaches past the distinct count is an error.
///
/// # Example
///
/// ```
/// use loom_common_l10n::convert_format;
///
/// let angular = convert_format("Ticket {0} to counter {1}", "{{n", "}}").unwrap();
/// assert_eq!(angular, "Ticket {{n0}} to counter {{n1}}");
/// ```
pub fn convert_format(template: &str, prefix: &str, postfix: &str) -> Result<String, FormatError> {
	let distinct: HashSet<&str> = PLACEHOLDER
		.find_iter(template)
		.map(|m| m.as_str())
		.collect();

	let args: Vec<String> = (0..distinct.len())
		.map(|idx| format!("{prefix}{idx}{postfix}"))
		.collect();

	format_composite(template, &args)
}

/// Expand `{index[,alignment][:format]}` items of `template` with `args`.
///
/// `{{` and `}}` are literal braces. Arguments are strings, so the format
/// component is accepted and ignored.
pub fn format_composite<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String, FormatError> {
	let mut out = String::with_capacity(template.len());
	let mut chars = template.char_indices().peekable();

	while let Some((pos, c)) = chars.next() {
		match c {
			'{' => {
				if matches!(chars.peek(), Some((_, '{'))) {
					chars.next();
					out.push('{');
					continue;
				}

				let item = parse_item(pos, &mut chars)?;
				let arg = args.get(item.index).ok_or(FormatError::IndexOutOfRange {
					index: item.index,
					count: args.len(),
				})?;
				push_aligned(&mut out, arg.as_ref(), item.alignment);
			}
			'}' => {
				if matches!(chars.peek(), Some((_, '}'))) {
					chars.next();
					out.push('}');
				} else {
					return Err(FormatError::UnexpectedBrace(pos));
				}
			}
			_ => out.push(c),
		}
	}

	Ok(out)
}

struct FormatItem {
	index: usize,
	alignment: i64,
}

/// Parse the remainder of a format item whose `{` sits at `start`.
fn parse_item(start: usize, chars: &mut Peekable<CharIndices<'_>>) -> Result<FormatItem, FormatError> {
	let malformed = || FormatError::MalformedItem(start);

	let index = parse_number(chars).ok_or_else(malformed)?;
	skip_spaces(chars);

	let mut alignment = 0i64;
	if matches!(chars.peek(), Some((_, ','))) {
		chars.next();
		skip_spaces(chars);
		let negative = matches!(chars.peek(), Some((_, '-')));
		if negative {
			chars.next();
		}
		let width = parse_number(chars).ok_or_else(malformed)? as i64;
		alignment = if negative { -width } else { width };
		skip_spaces(chars);
	}

	if matches!(chars.peek(), Some((_, ':'))) {
		chars.next();
		loop {
			match chars.peek() {
				Some((_, '}')) => break,
				Some((_, '{')) | None => return Err(malformed()),
				Some(_) => {
					chars.next();
				}
			}
		}
	}

	match chars.next() {
		Some((_, '}')) => Ok(FormatItem { index, alignment }),
		_ => Err(malformed()),
	}
}

fn parse_number(chars: &mut Peekable<CharIndices<'_>>) -> Option<usize> {
	let mut value: Option<usize> = None;
	while let Some(digit) = chars.peek().and_then(|(_, c)| c.to_digit(10)) {
		chars.next();
		let next = value.unwrap_or(0) * 10 + digit as usize;
		if next >= MAX_ITEM_NUMBER {
			return None;
		}
		value = Some(next);
	}
	value
}

fn skip_spaces(chars: &mut Peekable<CharIndices<'_>>) {
	while matches!(chars.peek(), Some((_, ' '))) {
		chars.next();
	}
}

fn push_aligned(out: &mut String, value: &str, alignment: i64) {
	let width = alignment.unsigned_abs() as usize;
	let len = value.chars().count();
	let pad = width.saturating_sub(len);

	if alignment > 0 {
		out.extend(std::iter::repeat(' ').take(pad));
		out.push_str(value);
	} else {
		out.push_str(value);
		out.extend(std::iter::repeat(' ').take(pad));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_objective_c_placeholders() {
		assert_eq!(convert_format("{0}{1}", "%@", "").unwrap(), "%@0%@1");
	}

	#[test]
	fn test_repeated_placeholder_counts_once() {
		assert_eq!(
			convert_format("{0}{0}", "{{n", "}}").unwrap(),
			"{{n0}}{{n0}}"
		);
	}

	#[test]
	fn test_angular_sentence() {
		assert_eq!(
			convert_format("Ticket {0} please go to counter {1}.", "{{n", "}}").unwrap(),
			"Ticket {{n0}} please go to counter {{n1}}."
		);
	}

	#[test]
	fn test_no_placeholders_is_unchanged() {
		assert_eq!(convert_format("Good morning", "%@", "").unwrap(), "Good morning");
		assert_eq!(convert_format("", "%@", "").unwrap(), "");
	}

	#[test]
	fn test_distinct_text_not_distinct_index() {
		// `{0}` and `{0:D2}` are two distinct texts, both resolve to slot 0.
		assert_eq!(convert_format("{0} {0:D2}", "%@", "").unwrap(), "%@0 %@0");
	}

	#[test]
	fn test_slot_index_kept_not_occurrence_order() {
		assert_eq!(convert_format("{1} {0}", "{{n", "}}").unwrap(), "{{n1}} {{n0}}");
		assert_eq!(convert_format("{1} {0}", "%@", "").unwrap(), "%@1 %@0");
	}

	#[test]
	fn test_index_beyond_distinct_count_fails() {
		assert_eq!(
			convert_format("{1}", "%@", ""),
			Err(FormatError::IndexOutOfRange { index: 1, count: 1 })
		);
	}

	#[test]
	fn test_escaped_braces() {
		assert_eq!(convert_format("{{literal}}", "%@", "").unwrap(), "{literal}");
	}

	#[test]
	fn test_unbalanced_closing_brace() {
		assert_eq!(
			format_composite::<&str>("a } b", &[]),
			Err(FormatError::UnexpectedBrace(2))
		);
	}

	#[test]
	fn test_malformed_items() {
		assert_eq!(
			format_composite("{x}", &["a"]),
			Err(FormatError::MalformedItem(0))
		);
		assert_eq!(
			format_composite("ab{0", &["a"]),
			Err(FormatError::MalformedItem(2))
		);
		assert_eq!(
			format_composite("{0:a{b}", &["a"]),
			Err(FormatError::MalformedItem(0))
		);
	}

	#[test]
	fn test_alignment() {
		assert_eq!(format_composite("[{0,5}]", &["ab"]).unwrap(), "[   ab]");
		assert_eq!(format_composite("[{0,-4}]", &["ab"]).unwrap(), "[ab  ]");
		assert_eq!(format_composite("[{0,1}]", &["abc"]).unwrap(), "[abc]");
		assert_eq!(format_composite("[{0 , 3:x}]", &["a"]).unwrap(), "[  a]");
	}

	proptest! {
		/// Each of n sequential placeholders gets its own generated token.
		#[test]
		fn sequential_placeholders_map_to_themselves(n in 1usize..20) {
			let template: String = (0..n).map(|i| format!("<{{{i}}}>")).collect();
			let converted = convert_format(&template, "%@", "").unwrap();
			let expected: String = (0..n).map(|i| format!("<%@{i}>")).collect();
			prop_assert_eq!(converted, expected);
		}

		/// Text without braces passes through untouched.
		#[test]
		fn brace_free_text_is_unchanged(text in "[^{}]*") {
			prop_assert_eq!(convert_format(&text, "{{n", "}}").unwrap(), text);
		}
	}
}
