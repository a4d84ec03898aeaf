// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource sets and the stores that supply them.
//!
//! A [`ResourceSet`] holds the strings defined directly for one culture, in
//! the order the store produced them. Parent-culture fallback is layered on
//! top by the resource manager, so stores only answer for exact cultures.
//!
//! # File format
//!
//! [`TomlDirStore`] and [`BuiltinStore`] read flat TOML tables of strings.
//! Nested tables are flattened with `.`, so these two files are equivalent:
//!
//! ```toml
//! "lang.English" = "English"
//! ```
//!
//! ```toml
//! [lang]
//! English = "English"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{L10nError, Result};
use crate::locale::Culture;

/// Ordered key/value strings with case-insensitive key lookup.
#[derive(Debug, Clone, Default)]
pub struct ResourceSet {
	entries: Vec<(String, String)>,
	index: HashMap<String, usize>,
}

impl ResourceSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append an entry. Returns `false` and keeps the existing value if the
	/// key is already present, ignoring case.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
		let key = key.into();
		let folded = key.to_lowercase();
		if self.index.contains_key(&folded) {
			return false;
		}
		self.index.insert(folded, self.entries.len());
		self.entries.push((key, value.into()));
		true
	}

	/// Case-insensitive lookup.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.index
			.get(&key.to_lowercase())
			.map(|&idx| self.entries[idx].1.as_str())
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Parse a TOML table of strings. `path` only labels errors.
	pub fn parse_toml(culture: &Culture, path: &Path, content: &str) -> Result<Self> {
		let table: toml::Table = toml::from_str(content).map_err(|e| L10nError::TomlParse {
			path: path.to_path_buf(),
			source: e,
		})?;

		let mut set = ResourceSet::new();
		flatten_into(&mut set, culture, "", &table)?;
		trace!(culture = %culture, entries = set.len(), "parsed resource table");
		Ok(set)
	}
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceSet {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut set = ResourceSet::new();
		for (key, value) in iter {
			set.insert(key, value);
		}
		set
	}
}

fn flatten_into(
	set: &mut ResourceSet,
	culture: &Culture,
	prefix: &str,
	table: &toml::Table,
) -> Result<()> {
	for (key, value) in table {
		let full_key = if prefix.is_empty() {
			key.clone()
		} else {
			format!("{prefix}.{key}")
		};

		match value {
			toml::Value::String(text) => {
				set.insert(full_key, text.as_str());
			}
			toml::Value::Table(nested) => flatten_into(set, culture, &full_key, nested)?,
			other => {
				return Err(L10nError::InvalidResource {
					culture: culture.code().to_string(),
					key: full_key,
					message: format!("expected a string, found {}", other.type_str()),
				})
			}
		}
	}
	Ok(())
}

/// Supplies the resources defined for a culture.
pub trait ResourceStore: Send + Sync {
	fn name(&self) -> &'static str;

	/// Resources defined directly for `culture`, without parent fallback.
	/// `Ok(None)` means the store has nothing for this culture.
	fn load(&self, culture: &Culture) -> Result<Option<ResourceSet>>;
}

/// Cultures registered in code.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	cultures: HashMap<Culture, ResourceSet>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder-style [`MemoryStore::insert`].
	pub fn with_culture<K, V>(mut self, culture: &str, entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		self.insert(Culture::new(culture), entries.into_iter().collect());
		self
	}

	pub fn insert(&mut self, culture: Culture, set: ResourceSet) {
		self.cultures.insert(culture, set);
	}
}

impl ResourceStore for MemoryStore {
	fn name(&self) -> &'static str {
		"memory"
	}

	fn load(&self, culture: &Culture) -> Result<Option<ResourceSet>> {
		Ok(self.cultures.get(culture).cloned())
	}
}

/// A directory of `<culture>.toml` files; the invariant culture is read from
/// `default.toml`.
#[derive(Debug, Clone)]
pub struct TomlDirStore {
	dir: PathBuf,
}

impl TomlDirStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn path_for(&self, culture: &Culture) -> PathBuf {
		if culture.is_invariant() {
			self.dir.join("default.toml")
		} else {
			self.dir.join(format!("{}.toml", culture.code()))
		}
	}
}

impl ResourceStore for TomlDirStore {
	fn name(&self) -> &'static str {
		"toml-dir"
	}

	fn load(&self, culture: &Culture) -> Result<Option<ResourceSet>> {
		let path = self.path_for(culture);
		if !path.exists() {
			debug!(path = %path.display(), "resource file not found, skipping");
			return Ok(None);
		}

		let content = std::fs::read_to_string(&path).map_err(|e| L10nError::Io {
			path: path.clone(),
			source: e,
		})?;
		ResourceSet::parse_toml(culture, &path, &content).map(Some)
	}
}

const DEFAULT_TOML: &str = include_str!("../resources/default.toml");
const VI_TOML: &str = include_str!("../resources/vi.toml");
const JA_TOML: &str = include_str!("../resources/ja.toml");

/// Resources bundled with the crate: English as the invariant culture, plus
/// Vietnamese and Japanese.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinStore;

impl BuiltinStore {
	const FILES: &'static [(&'static str, &'static str)] =
		&[("", DEFAULT_TOML), ("vi", VI_TOML), ("ja", JA_TOML)];
}

impl ResourceStore for BuiltinStore {
	fn name(&self) -> &'static str {
		"builtin"
	}

	fn load(&self, culture: &Culture) -> Result<Option<ResourceSet>> {
		let Some((code, content)) = Self::FILES.iter().find(|(code, _)| *code == culture.code())
		else {
			return Ok(None);
		};

		let label = if code.is_empty() { "default" } else { *code };
		let path = PathBuf::from(format!("builtin/{label}.toml"));
		ResourceSet::parse_toml(culture, &path, content).map(Some)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use loom_l10n_core::{DayOfWeek, Enumeration, TicketStatus, UserType};
	use proptest::prelude::*;

	#[test]
	fn test_lookup_ignores_case() {
		let set: ResourceSet = [("Monday", "Monday"), ("shortMonday", "Mon")]
			.into_iter()
			.collect();
		assert_eq!(set.get("monday"), Some("Monday"));
		assert_eq!(set.get("SHORTMONDAY"), Some("Mon"));
		assert_eq!(set.get("Tuesday"), None);
	}

	#[test]
	fn test_insert_keeps_first_value() {
		let mut set = ResourceSet::new();
		assert!(set.insert("Active", "Active"));
		assert!(!set.insert("ACTIVE", "Enabled"));
		assert_eq!(set.len(), 1);
		assert_eq!(set.get("active"), Some("Active"));
	}

	#[test]
	fn test_iter_keeps_insertion_order() {
		let set: ResourceSet = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
		let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["b", "a", "c"]);
	}

	#[test]
	fn test_parse_toml_flattens_tables() {
		let content = r#"
Welcome = "Welcome"
"lang.Japanese" = "Japanese"

[lang]
English = "English"
"#;
		let set = ResourceSet::parse_toml(&Culture::invariant(), Path::new("t.toml"), content)
			.unwrap();
		let keys: Vec<_> = set.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["Welcome", "lang.Japanese", "lang.English"]);
	}

	#[test]
	fn test_parse_toml_rejects_non_strings() {
		let err = ResourceSet::parse_toml(&Culture::new("vi"), Path::new("vi.toml"), "count = 3")
			.unwrap_err();
		match err {
			L10nError::InvalidResource { culture, key, .. } => {
				assert_eq!(culture, "vi");
				assert_eq!(key, "count");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_parse_toml_reports_syntax_errors() {
		let err = ResourceSet::parse_toml(&Culture::invariant(), Path::new("bad.toml"), "a = ")
			.unwrap_err();
		assert!(matches!(err, L10nError::TomlParse { .. }));
	}

	#[test]
	fn test_memory_store() {
		let store = MemoryStore::new().with_culture("vi", [("Active", "Đang hoạt động")]);
		assert!(store.load(&Culture::new("vi")).unwrap().is_some());
		assert!(store.load(&Culture::new("vi-VN")).unwrap().is_none());
	}

	#[test]
	fn test_toml_dir_store() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("default.toml"), "Active = \"Active\"\n").unwrap();
		std::fs::write(dir.path().join("vi.toml"), "Active = \"Đang hoạt động\"\n").unwrap();

		let store = TomlDirStore::new(dir.path());
		let invariant = store.load(&Culture::invariant()).unwrap().unwrap();
		assert_eq!(invariant.get("active"), Some("Active"));
		let vi = store.load(&Culture::new("vi")).unwrap().unwrap();
		assert_eq!(vi.get("Active"), Some("Đang hoạt động"));
		assert!(store.load(&Culture::new("ja")).unwrap().is_none());
	}

	#[test]
	fn test_toml_dir_store_surfaces_bad_files() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("ja.toml"), "not toml at all").unwrap();
		let store = TomlDirStore::new(dir.path());
		assert!(store.load(&Culture::new("ja")).is_err());
	}

	#[test]
	fn test_builtin_store_parses() {
		let store = BuiltinStore;
		for code in ["", "vi", "ja"] {
			let set = store.load(&Culture::new(code)).unwrap().unwrap();
			assert!(!set.is_empty(), "culture {code:?}");
		}
		assert!(store.load(&Culture::new("en")).unwrap().is_none());
	}

	#[test]
	fn test_builtin_invariant_covers_enumerations() {
		let set = BuiltinStore.load(&Culture::invariant()).unwrap().unwrap();
		for day in DayOfWeek::members() {
			assert!(set.get(day.name()).is_some(), "{day:?}");
			assert!(set.get(&format!("short{}", day.name())).is_some(), "{day:?}");
		}
		for status in TicketStatus::members() {
			assert!(set.get(status.name()).is_some(), "{status:?}");
		}
		for user_type in UserType::members() {
			assert!(set.get(user_type.name()).is_some(), "{user_type:?}");
		}
	}

	proptest! {
		/// Whatever the case of the query, a stored key is found.
		#[test]
		fn lookup_any_case(key in "[a-zA-Z][a-zA-Z0-9.]{0,20}", upper in any::<bool>()) {
			let set: ResourceSet = [(key.clone(), "v")].into_iter().collect();
			let query = if upper { key.to_uppercase() } else { key.to_lowercase() };
			prop_assert_eq!(set.get(&query), Some("v"));
		}
	}
}
