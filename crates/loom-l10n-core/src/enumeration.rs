// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Declaration-ordered enumerations.

use std::fmt::Debug;
use std::hash::Hash;

/// An enumeration whose members can be walked in declaration order.
///
/// Every member carries the numeric value used on the wire and in selection
/// lists, and a canonical name that doubles as its resource code.
pub trait Enumeration: Copy + Eq + Hash + Debug + Send + Sync + 'static {
	/// Human readable kind, used in parse errors.
	const KIND: &'static str;

	/// All members in declaration order.
	fn members() -> &'static [Self];

	fn value(self) -> i16;

	fn name(self) -> &'static str;

	/// Control members such as `All` that stand for every other member and
	/// are never displayed.
	fn is_sentinel(self) -> bool {
		false
	}

	/// Case-insensitive lookup by canonical name.
	fn from_name(name: &str) -> Option<Self> {
		Self::members()
			.iter()
			.copied()
			.find(|m| m.name().eq_ignore_ascii_case(name))
	}

	fn from_value(value: i16) -> Option<Self> {
		Self::members().iter().copied().find(|m| m.value() == value)
	}
}

/// Marker for enumerations whose values are single bits (or unions of bits,
/// for sentinels) and may be combined into a [`crate::FlagSet`].
pub trait FlagEnumeration: Enumeration {}

/// Declares a `repr(i16)` enum and implements [`Enumeration`], `Display` and
/// `FromStr` for it.
macro_rules! enumeration {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident as $kind:literal $(, sentinel $sentinel:ident)? {
			$( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
		#[repr(i16)]
		$vis enum $name {
			$( $(#[$vmeta])* $variant = $value ),+
		}

		impl $crate::Enumeration for $name {
			const KIND: &'static str = $kind;

			fn members() -> &'static [Self] {
				&[ $( $name::$variant ),+ ]
			}

			fn value(self) -> i16 {
				self as i16
			}

			fn name(self) -> &'static str {
				match self {
					$( $name::$variant => stringify!($variant) ),+
				}
			}

			$(
				fn is_sentinel(self) -> bool {
					self == $name::$sentinel
				}
			)?
		}

		impl ::std::fmt::Display for $name {
			fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
				f.write_str($crate::Enumeration::name(*self))
			}
		}

		impl ::std::str::FromStr for $name {
			type Err = $crate::ParseEnumError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				<Self as $crate::Enumeration>::from_name(s.trim())
					.ok_or_else(|| $crate::ParseEnumError::new($kind, s))
			}
		}
	};
}
