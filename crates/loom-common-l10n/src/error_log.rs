// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use tracing::error;

use crate::error::L10nError;

/// Receives failures that are reported to callers only as an absent result.
pub trait ErrorLog: Send + Sync {
	fn write_error(&self, error: &L10nError);
}

/// Forwards failures to `tracing` at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
	fn write_error(&self, err: &L10nError) {
		error!(error = %err, "localization failure");
	}
}
