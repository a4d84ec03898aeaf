// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Localization configuration.
//!
//! Layered from multiple sources (defaults, TOML file, environment) with the
//! environment taking precedence:
//!
//! | key | env var | default |
//! |---|---|---|
//! | `resources_dir` | `LOOM_L10N_RESOURCES_DIR` | bundled resources |
//! | `default_language` | `LOOM_L10N_DEFAULT_LANGUAGE` | `en` |
//! | `chunk_size` | `LOOM_L10N_CHUNK_SIZE` | `100` |

mod error;
mod layer;
mod sources;

pub use error::ConfigError;
pub use layer::L10nConfigLayer;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::num::NonZeroUsize;
use std::path::PathBuf;

use loom_l10n_core::SysLanguage;
use tracing::{debug, info};

use crate::locale::{parse_language, DEFAULT_LANGUAGE};

/// Entries per chunk when loading resource text in chunks.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
	Some(size) => size,
	None => panic!("chunk size must be non-zero"),
};

/// Fully resolved localization configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L10nConfig {
	/// `None` selects the resources bundled with the crate.
	pub resources_dir: Option<PathBuf>,
	pub default_language: SysLanguage,
	pub chunk_size: NonZeroUsize,
}

impl Default for L10nConfig {
	fn default() -> Self {
		Self {
			resources_dir: None,
			default_language: DEFAULT_LANGUAGE,
			chunk_size: DEFAULT_CHUNK_SIZE,
		}
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LOOM_L10N_*`)
/// 2. Config file (`/etc/loom/l10n.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<L10nConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<L10nConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Load configuration from explicit sources, applied in precedence order.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<L10nConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = L10nConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		merged.merge(source.load()?);
	}

	finalize(merged)
}

/// Finalize a merged layer into resolved config.
pub fn finalize(layer: L10nConfigLayer) -> Result<L10nConfig, ConfigError> {
	let default_language = match layer.default_language {
		Some(value) => parse_language(&value).ok_or_else(|| ConfigError::InvalidValue {
			key: "default_language".to_string(),
			message: format!("unsupported language '{value}'"),
		})?,
		None => DEFAULT_LANGUAGE,
	};

	let chunk_size = match layer.chunk_size {
		Some(size) => NonZeroUsize::new(size)
			.ok_or_else(|| ConfigError::Validation("chunk_size must be at least 1".to_string()))?,
		None => DEFAULT_CHUNK_SIZE,
	};

	let config = L10nConfig {
		resources_dir: layer.resources_dir,
		default_language,
		chunk_size,
	};

	info!(
		resources_dir = ?config.resources_dir,
		default_language = %config.default_language,
		chunk_size = config.chunk_size.get(),
		"Localization configuration loaded"
	);

	Ok(config)
}
