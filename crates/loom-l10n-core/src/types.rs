// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Domain enumerations that are rendered as localized text.
//!
//! Declaration order is significant: list builders and day-of-week joins walk
//! members in the order written here.

use crate::FlagEnumeration;

enumeration! {
	/// Languages the system can display.
	pub enum SysLanguage as "language" {
		English = 1,
		Vietnamese = 2,
		Japanese = 3,
	}
}

enumeration! {
	/// Status codes returned by the public API.
	pub enum ApiStatusCode as "API status code" {
		Success = 0,
		InvalidRequest = 1,
		Unauthorized = 2,
		Forbidden = 3,
		NotFound = 4,
		Conflict = 5,
		InternalError = 6,
	}
}

enumeration! {
	/// Identity providers a user can sign in with.
	pub enum ApiProviderId as "API provider" {
		Internal = 0,
		Google = 1,
		Facebook = 2,
		Apple = 3,
		Microsoft = 4,
	}
}

enumeration! {
	pub enum Gender as "gender" {
		Unknown = 0,
		Male = 1,
		Female = 2,
	}
}

enumeration! {
	/// Kind of organization; combinable.
	pub enum OrgType as "organization type" {
		Retail = 1,
		Healthcare = 2,
		Banking = 4,
		PublicService = 8,
		Education = 16,
	}
}

enumeration! {
	/// Kind of user account; combinable. `All` selects every type.
	pub enum UserType as "user type", sentinel All {
		Guest = 1,
		Member = 2,
		Operator = 4,
		Administrator = 8,
		All = 0x7FFF,
	}
}

enumeration! {
	/// Roles a user holds inside an organization; combinable. `All` selects
	/// every role.
	pub enum UserRoles as "user role", sentinel All {
		OrgViewer = 1,
		OrgOperator = 2,
		OrgAdmin = 4,
		SysAdmin = 8,
		All = 0x7FFF,
	}
}

enumeration! {
	pub enum UserStatus as "user status" {
		Pending = 0,
		Active = 1,
		Locked = 2,
		Deleted = 3,
	}
}

enumeration! {
	/// Days of the week; combinable into a schedule mask.
	pub enum DayOfWeek as "day of week" {
		Monday = 1,
		Tuesday = 2,
		Wednesday = 4,
		Thursday = 8,
		Friday = 16,
		Saturday = 32,
		Sunday = 64,
	}
}

enumeration! {
	/// When ticket numbering starts over; combinable.
	pub enum TicketNoRestartType as "ticket restart type" {
		Never = 1,
		Daily = 2,
		Weekly = 4,
		Monthly = 8,
		Yearly = 16,
	}
}

enumeration! {
	/// Lifecycle of a queue ticket.
	pub enum TicketStatus as "ticket status" {
		New = 0,
		Waiting = 1,
		Calling = 2,
		Serving = 3,
		Completed = 4,
		Skipped = 5,
		Cancelled = 6,
	}
}

impl FlagEnumeration for OrgType {}
impl FlagEnumeration for UserType {}
impl FlagEnumeration for UserRoles {}
impl FlagEnumeration for DayOfWeek {}
impl FlagEnumeration for TicketNoRestartType {}
