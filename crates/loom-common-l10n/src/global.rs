// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Process-wide localization service.

use std::sync::OnceLock;

use tracing::warn;

use crate::error::{L10nError, Result};
use crate::service::LocalizationService;

static GLOBAL: OnceLock<LocalizationService> = OnceLock::new();

/// Install the process-wide service. Fails if one is already installed,
/// including one created implicitly by [`global`].
pub fn install(service: LocalizationService) -> Result<()> {
	GLOBAL.set(service).map_err(|_| L10nError::AlreadyInstalled)
}

/// The process-wide service.
///
/// If nothing was installed, the first call builds one with
/// [`LocalizationService::load`], falling back to the bundled resources when
/// the configuration is invalid.
pub fn global() -> &'static LocalizationService {
	GLOBAL.get_or_init(|| match LocalizationService::load() {
		Ok(service) => service,
		Err(e) => {
			warn!(error = %e, "invalid localization configuration, using bundled resources");
			LocalizationService::builtin()
		}
	})
}
