// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Typed bit masks over flag enumerations.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::FlagEnumeration;

/// A set of members of a flag enumeration, stored as the union of their bits.
///
/// Iteration always yields members in declaration order, never in bit order,
/// and never yields sentinel members.
pub struct FlagSet<T> {
	bits: i16,
	marker: PhantomData<fn() -> T>,
}

impl<T: FlagEnumeration> FlagSet<T> {
	pub const fn empty() -> Self {
		Self::from_bits(0)
	}

	pub const fn from_bits(bits: i16) -> Self {
		Self {
			bits,
			marker: PhantomData,
		}
	}

	/// The union of every member, sentinels included.
	pub fn all() -> Self {
		T::members().iter().copied().collect()
	}

	pub fn bits(self) -> i16 {
		self.bits
	}

	pub fn is_empty(self) -> bool {
		self.bits == 0
	}

	/// True if `member` shares at least one bit with this set.
	pub fn intersects(self, member: T) -> bool {
		self.bits & member.value() != 0
	}

	/// True if every bit of `member` is in this set.
	pub fn contains(self, member: T) -> bool {
		self.bits & member.value() == member.value()
	}

	pub fn insert(&mut self, member: T) {
		self.bits |= member.value();
	}

	pub fn remove(&mut self, member: T) {
		self.bits &= !member.value();
	}

	/// Non-sentinel members intersecting this set, in declaration order.
	pub fn iter(self) -> impl Iterator<Item = T> {
		T::members()
			.iter()
			.copied()
			.filter(move |m| !m.is_sentinel() && self.intersects(*m))
	}
}

impl<T> Clone for FlagSet<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for FlagSet<T> {}

impl<T> PartialEq for FlagSet<T> {
	fn eq(&self, other: &Self) -> bool {
		self.bits == other.bits
	}
}

impl<T> Eq for FlagSet<T> {}

impl<T> Hash for FlagSet<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.bits.hash(state);
	}
}

impl<T: FlagEnumeration> Default for FlagSet<T> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<T: FlagEnumeration> fmt::Debug for FlagSet<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("FlagSet")
			.field(&format_args!("{:#06x}", self.bits))
			.field(&self.iter().map(|m| m.name()).collect::<Vec<_>>())
			.finish()
	}
}

impl<T: FlagEnumeration> From<T> for FlagSet<T> {
	fn from(member: T) -> Self {
		Self::from_bits(member.value())
	}
}

impl<T: FlagEnumeration> FromIterator<T> for FlagSet<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut set = Self::empty();
		for member in iter {
			set.insert(member);
		}
		set
	}
}

impl<T: FlagEnumeration> BitOr for FlagSet<T> {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self::from_bits(self.bits | rhs.bits)
	}
}

impl<T: FlagEnumeration> BitOr<T> for FlagSet<T> {
	type Output = Self;

	fn bitor(self, rhs: T) -> Self {
		Self::from_bits(self.bits | rhs.value())
	}
}

impl<T: FlagEnumeration> BitOrAssign<T> for FlagSet<T> {
	fn bitor_assign(&mut self, rhs: T) {
		self.insert(rhs);
	}
}

impl<T: FlagEnumeration> BitAnd for FlagSet<T> {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self {
		Self::from_bits(self.bits & rhs.bits)
	}
}

impl<T> Serialize for FlagSet<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		self.bits.serialize(serializer)
	}
}

impl<'de, T: FlagEnumeration> Deserialize<'de> for FlagSet<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		i16::deserialize(deserializer).map(Self::from_bits)
	}
}
