// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The localization service.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use loom_l10n_core::{DayOfWeek, Enumeration, FlagSet, SysLanguage, TextResourceFormat};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::config::{load_config, L10nConfig, DEFAULT_CHUNK_SIZE};
use crate::error::{L10nError, Result};
use crate::error_log::{ErrorLog, TracingErrorLog};
use crate::format::convert_format;
use crate::key::TextKey;
use crate::locale::{Culture, CultureResolver, DefaultCultureResolver, DEFAULT_LANGUAGE};
use crate::manager::ResourceManager;
use crate::resolve;
use crate::resource::{BuiltinStore, ResourceStore, TomlDirStore};

/// Prefix of the text returned for codes without a resource.
pub const MISSING_PREFIX: &str = "NA";

/// Thread-safe access to localized resources.
///
/// Resource sets are loaded from the store the first time a culture is
/// used. Every lookup and every bulk load goes through one lock, so no
/// caller observes a half-loaded table.
pub struct LocalizationService {
	manager: Mutex<ResourceManager>,
	resolver: Box<dyn CultureResolver>,
	error_log: Box<dyn ErrorLog>,
	default_language: SysLanguage,
	chunk_size: usize,
}

/// Builder for [`LocalizationService`].
pub struct LocalizationServiceBuilder {
	store: Box<dyn ResourceStore>,
	resolver: Box<dyn CultureResolver>,
	error_log: Box<dyn ErrorLog>,
	default_language: SysLanguage,
	chunk_size: NonZeroUsize,
}

impl LocalizationServiceBuilder {
	pub fn culture_resolver(mut self, resolver: impl CultureResolver + 'static) -> Self {
		self.resolver = Box::new(resolver);
		self
	}

	pub fn error_log(mut self, error_log: impl ErrorLog + 'static) -> Self {
		self.error_log = Box::new(error_log);
		self
	}

	pub fn default_language(mut self, language: SysLanguage) -> Self {
		self.default_language = language;
		self
	}

	/// Entries per chunk for [`LocalizationService::load_text`].
	pub fn chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
		self.chunk_size = chunk_size;
		self
	}

	pub fn build(self) -> LocalizationService {
		LocalizationService {
			manager: Mutex::new(ResourceManager::new(self.store)),
			resolver: self.resolver,
			error_log: self.error_log,
			default_language: self.default_language,
			chunk_size: self.chunk_size.get(),
		}
	}
}

impl LocalizationService {
	pub fn builder(store: impl ResourceStore + 'static) -> LocalizationServiceBuilder {
		LocalizationServiceBuilder {
			store: Box::new(store),
			resolver: Box::new(DefaultCultureResolver),
			error_log: Box::new(TracingErrorLog),
			default_language: DEFAULT_LANGUAGE,
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}

	/// Service over `store` with default collaborators.
	pub fn new(store: impl ResourceStore + 'static) -> Self {
		Self::builder(store).build()
	}

	/// Service over the resources bundled with this crate.
	pub fn builtin() -> Self {
		Self::new(BuiltinStore)
	}

	/// Reads resources from the configured directory, or the bundled
	/// resources when none is configured.
	pub fn from_config(config: &L10nConfig) -> Self {
		let builder = match &config.resources_dir {
			Some(dir) => Self::builder(TomlDirStore::new(dir)),
			None => Self::builder(BuiltinStore),
		};
		builder
			.default_language(config.default_language)
			.chunk_size(config.chunk_size)
			.build()
	}

	/// Service configured from the standard configuration sources.
	pub fn load() -> Result<Self> {
		Ok(Self::from_config(&load_config()?))
	}

	pub fn default_language(&self) -> SysLanguage {
		self.default_language
	}

	pub fn chunk_size(&self) -> usize {
		self.chunk_size
	}

	/// [`resolve::resolve_language`] with this service's default language.
	pub fn resolve_language(&self, user_language: Option<&str>) -> SysLanguage {
		resolve::resolve_language(user_language, self.default_language.name())
	}

	pub fn culture(&self, language: SysLanguage) -> Culture {
		self.resolver.culture(language)
	}

	/// Text of `code` in `language`.
	///
	/// Lookup ignores case and falls back to parent cultures. An empty code
	/// gives an empty string; a code without a resource gives `"NA" + code`.
	pub fn get_string(&self, language: SysLanguage, code: &str) -> String {
		if code.is_empty() {
			return String::new();
		}

		let culture = self.culture(language);
		let mut manager = self.manager.lock();
		match manager.get_string(&culture, code) {
			Ok(Some(text)) => text,
			Ok(None) => {
				trace!(culture = %culture, code, "no resource for code");
				format!("{MISSING_PREFIX}{code}")
			}
			Err(e) => {
				warn!(culture = %culture, code, error = %e, "failed to load resources");
				format!("{MISSING_PREFIX}{code}")
			}
		}
	}

	/// Copy the resources visible in `language` into `target`, rewriting
	/// placeholders for `format`.
	///
	/// With `chunk = Some(n)` only the entries at 1-based positions
	/// `n * chunk_size ..= n * chunk_size + chunk_size` are copied. Chunk 0
	/// therefore holds `chunk_size` entries and every later chunk one more,
	/// sharing its first entry with the previous chunk.
	///
	/// `target` is not cleared. Returns the number of entries added, or
	/// `None` after reporting the failure to the error log if a resource set
	/// cannot be loaded, a value is not a valid template, or a key is already
	/// present in `target`. Entries added before a failure are kept.
	pub fn load_text(
		&self,
		target: &mut BTreeMap<String, String>,
		language: SysLanguage,
		format: TextResourceFormat,
		chunk: Option<usize>,
	) -> Option<usize> {
		match self.try_load_text(target, language, format, chunk) {
			Ok(added) => Some(added),
			Err(e) => {
				self.error_log.write_error(&e);
				None
			}
		}
	}

	fn try_load_text(
		&self,
		target: &mut BTreeMap<String, String>,
		language: SysLanguage,
		format: TextResourceFormat,
		chunk: Option<usize>,
	) -> Result<usize> {
		let bounds = chunk.map(|n| {
			let from = n.saturating_mul(self.chunk_size);
			(from, from.saturating_add(self.chunk_size))
		});

		let culture = self.culture(language);
		let mut manager = self.manager.lock();
		let entries = manager.merged_set(&culture)?;

		let mut count = 0usize;
		let mut added = 0usize;
		for (key, value) in entries.iter() {
			count += 1;
			if let Some((from, to)) = bounds {
				if count < from {
					continue;
				}
				if count > to {
					break;
				}
			}

			let value = match format.placeholder_affixes() {
				Some((prefix, postfix)) => convert_format(value, prefix, postfix)?,
				None => value.to_string(),
			};

			match target.entry(key.to_string()) {
				Entry::Occupied(_) => return Err(L10nError::DuplicateKey(key.to_string())),
				Entry::Vacant(slot) => {
					slot.insert(value);
				}
			}
			added += 1;
		}

		debug!(
			culture = %culture,
			store = manager.store_name(),
			?format,
			?chunk,
			added,
			"loaded resource text"
		);
		Ok(added)
	}

	/// Localized label of an enumeration member.
	pub fn type2text(&self, key: impl Into<TextKey>, language: SysLanguage) -> String {
		self.get_string(language, &key.into().code())
	}

	/// Long day names of the days in `days`, in declaration order, joined
	/// with `-`. `None` gives an empty string.
	pub fn days_text(&self, days: Option<FlagSet<DayOfWeek>>, language: SysLanguage) -> String {
		self.join_days(days, language, TextKey::DayOfWeek)
	}

	/// Like [`LocalizationService::days_text`] with short day names.
	pub fn days_text_short(&self, days: Option<FlagSet<DayOfWeek>>, language: SysLanguage) -> String {
		self.join_days(days, language, TextKey::DayOfWeekShort)
	}

	fn join_days(
		&self,
		days: Option<FlagSet<DayOfWeek>>,
		language: SysLanguage,
		key: fn(DayOfWeek) -> TextKey,
	) -> String {
		let Some(days) = days else {
			return String::new();
		};

		let mut text = String::new();
		for day in days.iter() {
			if !text.trim().is_empty() {
				text.push('-');
			}
			text.push_str(&self.type2text(key(day), language));
		}
		text
	}
}

impl Default for LocalizationService {
	fn default() -> Self {
		Self::builtin()
	}
}
