// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for Loom localization.
//!
//! This crate holds the enumerations that the localization service turns into
//! display text, together with the small value types used to hand that text
//! to a UI:
//!
//! - [`Enumeration`]: declaration-ordered members with a numeric value and a
//!   canonical name
//! - [`FlagSet`]: a typed bit mask over a flag enumeration
//! - [`TextValue`]: a `(value, text, tag)` item for selection lists
//! - [`TextResourceFormat`]: the placeholder convention used when exporting
//!   resource tables
//!
//! # Example
//!
//! ```
//! use loom_l10n_core::{DayOfWeek, Enumeration, FlagSet};
//!
//! let weekend = FlagSet::from(DayOfWeek::Saturday) | DayOfWeek::Sunday;
//! let days: Vec<_> = weekend.iter().map(|d| d.name()).collect();
//! assert_eq!(days, ["Saturday", "Sunday"]);
//! ```

#[macro_use]
mod enumeration;

pub mod error;
pub mod flags;
pub mod text_value;
pub mod types;

pub use enumeration::{Enumeration, FlagEnumeration};
pub use error::ParseEnumError;
pub use flags::FlagSet;
pub use text_value::{TextResourceFormat, TextValue};
pub use types::{
	ApiProviderId, ApiStatusCode, DayOfWeek, Gender, OrgType, SysLanguage, TicketNoRestartType,
	TicketStatus, UserRoles, UserStatus, UserType,
};
