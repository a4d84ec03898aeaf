// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use serde::Deserialize;

/// Partial configuration produced by a single source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct L10nConfigLayer {
	/// Directory of `<culture>.toml` resource files.
	pub resources_dir: Option<PathBuf>,
	/// Culture code, neutral code or language name.
	pub default_language: Option<String>,
	pub chunk_size: Option<usize>,
}

impl L10nConfigLayer {
	/// Overlay `other` onto `self`; fields set in `other` win.
	pub fn merge(&mut self, other: L10nConfigLayer) {
		if other.resources_dir.is_some() {
			self.resources_dir = other.resources_dir;
		}
		if other.default_language.is_some() {
			self.default_language = other.default_language;
		}
		if other.chunk_size.is_some() {
			self.chunk_size = other.chunk_size;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_overrides_set_fields_only() {
		let mut base = L10nConfigLayer {
			resources_dir: Some(PathBuf::from("/srv/l10n")),
			default_language: Some("vi".to_string()),
			chunk_size: None,
		};
		base.merge(L10nConfigLayer {
			chunk_size: Some(50),
			default_language: Some("ja".to_string()),
			..Default::default()
		});
		assert_eq!(base.resources_dir, Some(PathBuf::from("/srv/l10n")));
		assert_eq!(base.default_language.as_deref(), Some("ja"));
		assert_eq!(base.chunk_size, Some(50));
	}

	#[test]
	fn test_deserialize_rejects_unknown_keys() {
		assert!(toml::from_str::<L10nConfigLayer>("chunk_size = 10").is_ok());
		assert!(toml::from_str::<L10nConfigLayer>("chunksize = 10").is_err());
	}
}
