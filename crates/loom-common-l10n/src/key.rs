// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource codes for enumeration members.

use loom_l10n_core::{
	ApiStatusCode, DayOfWeek, Enumeration, Gender, OrgType, SysLanguage, TicketNoRestartType,
	TicketStatus, UserRoles, UserStatus, UserType,
};

/// A localizable enumeration member.
///
/// Most members are stored under their canonical name. Genders, language
/// names and short day names share a table with other codes and carry a
/// prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
	ApiStatus(ApiStatusCode),
	Gender(Gender),
	OrgType(OrgType),
	UserType(UserType),
	UserStatus(UserStatus),
	UserRole(UserRoles),
	TicketStatus(TicketStatus),
	TicketNoRestart(TicketNoRestartType),
	Language(SysLanguage),
	DayOfWeek(DayOfWeek),
	DayOfWeekShort(DayOfWeek),
}

impl TextKey {
	fn prefix(&self) -> &'static str {
		match self {
			TextKey::Gender(_) => "gender",
			TextKey::Language(_) => "lang.",
			TextKey::DayOfWeekShort(_) => "short",
			_ => "",
		}
	}

	fn member_name(&self) -> &'static str {
		match *self {
			TextKey::ApiStatus(v) => v.name(),
			TextKey::Gender(v) => v.name(),
			TextKey::OrgType(v) => v.name(),
			TextKey::UserType(v) => v.name(),
			TextKey::UserStatus(v) => v.name(),
			TextKey::UserRole(v) => v.name(),
			TextKey::TicketStatus(v) => v.name(),
			TextKey::TicketNoRestart(v) => v.name(),
			TextKey::Language(v) => v.name(),
			TextKey::DayOfWeek(v) | TextKey::DayOfWeekShort(v) => v.name(),
		}
	}

	/// The resource code looked up for this member.
	pub fn code(&self) -> String {
		format!("{}{}", self.prefix(), self.member_name())
	}
}

macro_rules! text_key_from {
	($($ty:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<$ty> for TextKey {
				fn from(value: $ty) -> Self {
					TextKey::$variant(value)
				}
			}
		)+
	};
}

text_key_from! {
	ApiStatusCode => ApiStatus,
	Gender => Gender,
	OrgType => OrgType,
	UserType => UserType,
	UserStatus => UserStatus,
	UserRoles => UserRole,
	TicketStatus => TicketStatus,
	TicketNoRestartType => TicketNoRestart,
	SysLanguage => Language,
	DayOfWeek => DayOfWeek,
}
