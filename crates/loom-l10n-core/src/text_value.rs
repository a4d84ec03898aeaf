// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use serde::{Deserialize, Serialize};

use crate::Enumeration;

/// One entry of a selection list.
///
/// `value` is the member's numeric value rendered as a string and `text` the
/// localized label. `tag` normally carries the member itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue<T> {
	pub value: String,
	pub text: String,
	pub tag: T,
}

impl<T> TextValue<T> {
	pub fn new(value: impl Into<String>, text: impl Into<String>, tag: T) -> Self {
		Self {
			value: value.into(),
			text: text.into(),
			tag,
		}
	}
}

impl<E: Enumeration> TextValue<E> {
	/// Item for `member` with its numeric value and the given label.
	pub fn from_member(member: E, text: impl Into<String>) -> Self {
		Self::new(member.value().to_string(), text, member)
	}
}

enumeration! {
	/// Placeholder convention used when exporting a resource table to a client.
	pub enum TextResourceFormat as "text resource format" {
		/// Values are copied unchanged.
		Raw = 0,
		/// `{0}` becomes `{{n0}}`.
		Angular = 1,
		/// `{0}` becomes `%@0`.
		ObjectC = 2,
	}
}

impl TextResourceFormat {
	/// Prefix and postfix wrapped around each placeholder index, or `None`
	/// when values are exported as-is.
	pub fn placeholder_affixes(self) -> Option<(&'static str, &'static str)> {
		match self {
			TextResourceFormat::Raw => None,
			TextResourceFormat::Angular => Some(("{{n", "}}")),
			TextResourceFormat::ObjectC => Some(("%@", "")),
		}
	}
}
