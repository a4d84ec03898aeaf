// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language resolution logic.

use loom_l10n_core::SysLanguage;

use crate::locale::{parse_language, DEFAULT_LANGUAGE};

/// Resolve the effective language from user preference and configured default.
///
/// Resolution order (highest to lowest priority):
/// 1. User's stored language preference (if valid)
/// 2. Configured default language (if valid)
/// 3. Fallback to English
///
/// Both inputs accept culture codes, neutral codes or language names.
///
/// # Example
///
/// ```
/// use loom_common_l10n::resolve_language;
/// use loom_l10n_core::SysLanguage;
///
/// // User preference takes priority
/// assert_eq!(resolve_language(Some("vi-VN"), "en"), SysLanguage::Vietnamese);
///
/// // Falls back to the configured default if the user has no preference
/// assert_eq!(resolve_language(None, "ja"), SysLanguage::Japanese);
///
/// // Falls back to English if both are invalid
/// assert_eq!(resolve_language(Some("invalid"), "also_invalid"), SysLanguage::English);
/// ```
pub fn resolve_language(user_language: Option<&str>, default_language: &str) -> SysLanguage {
	user_language
		.and_then(parse_language)
		.or_else(|| parse_language(default_language))
		.unwrap_or(DEFAULT_LANGUAGE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_preference_takes_priority() {
		assert_eq!(resolve_language(Some("vi"), "en"), SysLanguage::Vietnamese);
		assert_eq!(resolve_language(Some("ja-JP"), "vi"), SysLanguage::Japanese);
	}

	#[test]
	fn test_default_when_no_user_preference() {
		assert_eq!(resolve_language(None, "vi"), SysLanguage::Vietnamese);
		assert_eq!(resolve_language(None, "Japanese"), SysLanguage::Japanese);
	}

	#[test]
	fn test_fallback_to_english_when_user_invalid() {
		assert_eq!(resolve_language(Some("invalid"), "en"), SysLanguage::English);
		assert_eq!(resolve_language(Some("fr"), "en"), SysLanguage::English);
	}

	#[test]
	fn test_fallback_to_english_when_both_invalid() {
		assert_eq!(
			resolve_language(Some("invalid"), "also_invalid"),
			SysLanguage::English
		);
		assert_eq!(resolve_language(None, "invalid"), SysLanguage::English);
	}

	#[test]
	fn test_empty_string_is_invalid() {
		assert_eq!(resolve_language(Some(""), "vi"), SysLanguage::Vietnamese);
		assert_eq!(resolve_language(None, ""), SysLanguage::English);
	}
}
