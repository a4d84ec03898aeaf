// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for localization operations.
pub type Result<T> = std::result::Result<T, L10nError>;

/// Top-level error type for localization operations.
#[derive(Error, Debug)]
pub enum L10nError {
	#[error("failed to read resource file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse resource file {path}: {source}")]
	TomlParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("invalid resource '{key}' for culture '{culture}': {message}")]
	InvalidResource {
		culture: String,
		key: String,
		message: String,
	},

	#[error("key '{0}' is already present in the target table")]
	DuplicateKey(String),

	#[error("format error: {0}")]
	Format(#[from] FormatError),

	#[error("a localization service is already installed")]
	AlreadyInstalled,

	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),
}

/// Errors raised while expanding a composite format template.
#[derive(Clone, Error, Debug, PartialEq, Eq)]
pub enum FormatError {
	#[error("placeholder index {index} is out of range for {count} argument(s)")]
	IndexOutOfRange { index: usize, count: usize },

	#[error("unescaped '}}' at offset {0}")]
	UnexpectedBrace(usize),

	#[error("malformed format item at offset {0}")]
	MalformedItem(usize),
}
