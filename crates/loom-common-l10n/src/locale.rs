// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language metadata and culture resolution.

use std::fmt;

use loom_l10n_core::{Enumeration, SysLanguage};

/// Metadata about a supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
	pub language: SysLanguage,
	/// Specific culture used to select resources (e.g., "vi-VN")
	pub culture: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name of the language
	pub native_name: &'static str,
}

impl LanguageInfo {
	/// Neutral culture code, e.g. "vi" for "vi-VN".
	pub fn neutral_code(&self) -> &'static str {
		self.culture.split('-').next().unwrap_or(self.culture)
	}
}

/// Language used when nothing else resolves.
pub const DEFAULT_LANGUAGE: SysLanguage = SysLanguage::English;

/// All supported languages.
pub const LANGUAGES: &[LanguageInfo] = &[
	LanguageInfo {
		language: SysLanguage::English,
		culture: "en-US",
		name: "English",
		native_name: "English",
	},
	LanguageInfo {
		language: SysLanguage::Vietnamese,
		culture: "vi-VN",
		name: "Vietnamese",
		native_name: "Tiếng Việt",
	},
	LanguageInfo {
		language: SysLanguage::Japanese,
		culture: "ja-JP",
		name: "Japanese",
		native_name: "日本語",
	},
];

/// Get metadata for a language.
pub fn language_info(language: SysLanguage) -> Option<&'static LanguageInfo> {
	LANGUAGES.iter().find(|l| l.language == language)
}

/// Get all supported languages.
pub fn available_languages() -> &'static [LanguageInfo] {
	LANGUAGES
}

/// Parse a language from a culture code ("vi-VN"), a neutral code ("vi",
/// "vi_VN" also accepted) or a member name ("Vietnamese").
pub fn parse_language(value: &str) -> Option<SysLanguage> {
	let value = value.trim();
	if value.is_empty() {
		return None;
	}

	let normalized = value.replace('_', "-");
	LANGUAGES
		.iter()
		.find(|l| {
			l.culture.eq_ignore_ascii_case(&normalized)
				|| l.neutral_code().eq_ignore_ascii_case(&normalized)
		})
		.map(|l| l.language)
		.or_else(|| SysLanguage::from_name(value))
}

/// A culture identifier such as `en-US`, `en`, or the invariant culture `""`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Culture(String);

impl Culture {
	pub fn new(code: impl Into<String>) -> Self {
		Self(code.into())
	}

	/// The invariant culture, root of every fallback chain.
	pub fn invariant() -> Self {
		Self(String::new())
	}

	pub fn code(&self) -> &str {
		&self.0
	}

	pub fn is_invariant(&self) -> bool {
		self.0.is_empty()
	}

	/// `en-US` → `en` → invariant; the invariant culture has no parent.
	pub fn parent(&self) -> Option<Culture> {
		if self.is_invariant() {
			return None;
		}
		match self.0.rfind('-') {
			Some(idx) => Some(Culture(self.0[..idx].to_string())),
			None => Some(Culture::invariant()),
		}
	}

	/// This culture followed by all of its parents.
	pub fn fallback_chain(&self) -> Vec<Culture> {
		let mut chain = vec![self.clone()];
		while let Some(parent) = chain.last().and_then(Culture::parent) {
			chain.push(parent);
		}
		chain
	}
}

impl fmt::Display for Culture {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_invariant() {
			f.write_str("(invariant)")
		} else {
			f.write_str(&self.0)
		}
	}
}

/// Maps a language to the culture whose resources it reads.
pub trait CultureResolver: Send + Sync {
	fn culture(&self, language: SysLanguage) -> Culture;
}

/// Resolves through the [`LANGUAGES`] table; unknown languages read the
/// invariant resources.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultCultureResolver;

impl CultureResolver for DefaultCultureResolver {
	fn culture(&self, language: SysLanguage) -> Culture {
		language_info(language)
			.map(|info| Culture::new(info.culture))
			.unwrap_or_else(Culture::invariant)
	}
}
