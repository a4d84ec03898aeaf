// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization (l10n) support for Loom.
//!
//! This crate turns codes and enumeration members into localized text and
//! builds the selection lists shown by clients. Resources are plain string
//! tables per culture, looked up case-insensitively with fallback from a
//! specific culture (`vi-VN`) to its neutral culture (`vi`) and then to the
//! invariant resources.
//!
//! # Resource Codes
//!
//! Enumeration members are stored under their canonical name (`Active`,
//! `Monday`). Three kinds carry a prefix:
//!
//! - `gender` for genders: `genderFemale`
//! - `short` for short day names: `shortMonday`
//! - `lang.` for language names: `lang.Vietnamese`
//!
//! A code with no resource comes back as `"NA" + code`.
//!
//! # Example
//!
//! ```
//! use loom_common_l10n::LocalizationService;
//! use loom_l10n_core::{DayOfWeek, FlagSet, SysLanguage, UserStatus};
//!
//! let l10n = LocalizationService::builtin();
//!
//! // Simple lookup
//! assert_eq!(l10n.get_string(SysLanguage::Vietnamese, "Sunday"), "Chủ Nhật");
//!
//! // Enumeration member
//! assert_eq!(l10n.type2text(UserStatus::Locked, SysLanguage::English), "Locked");
//!
//! // Day schedule
//! let days = FlagSet::from(DayOfWeek::Monday) | DayOfWeek::Friday;
//! assert_eq!(l10n.days_text_short(Some(days), SysLanguage::English), "Mon-Fri");
//!
//! // Selection list
//! let statuses = l10n.list_ticket_statuses(SysLanguage::English);
//! assert_eq!(statuses[0].text, "Waiting");
//! ```

pub mod config;
pub mod error;
mod error_log;
mod format;
mod global;
mod key;
mod lists;
mod locale;
mod manager;
mod resolve;
mod resource;
mod service;

pub use config::{load_config, load_config_with_file, ConfigError, L10nConfig, DEFAULT_CHUNK_SIZE};
pub use error::{FormatError, L10nError, Result};
pub use error_log::{ErrorLog, TracingErrorLog};
pub use format::{convert_format, format_composite};
pub use global::{global, install};
pub use key::TextKey;
pub use locale::{
	available_languages, language_info, parse_language, Culture, CultureResolver, DefaultCultureResolver,
	LanguageInfo, DEFAULT_LANGUAGE, LANGUAGES,
};
pub use resolve::resolve_language;
pub use resource::{BuiltinStore, MemoryStore, ResourceSet, ResourceStore, TomlDirStore};
pub use service::{LocalizationService, LocalizationServiceBuilder, MISSING_PREFIX};
