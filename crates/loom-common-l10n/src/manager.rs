// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Lazily loaded, culture-chained view over a resource store.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::locale::Culture;
use crate::resource::{ResourceSet, ResourceStore};

/// Caches each culture's resource set on first access. Not synchronized;
/// the owning service keeps it behind its lock.
pub(crate) struct ResourceManager {
	store: Box<dyn ResourceStore>,
	sets: HashMap<Culture, Option<Arc<ResourceSet>>>,
}

impl ResourceManager {
	pub(crate) fn new(store: Box<dyn ResourceStore>) -> Self {
		Self {
			store,
			sets: HashMap::new(),
		}
	}

	pub(crate) fn store_name(&self) -> &'static str {
		self.store.name()
	}

	/// The set defined directly for `culture`, loading it on first use.
	/// Failed loads are not cached.
	fn resource_set(&mut self, culture: &Culture) -> Result<Option<Arc<ResourceSet>>> {
		if let Some(cached) = self.sets.get(culture) {
			return Ok(cached.clone());
		}

		let loaded = self.store.load(culture)?.map(Arc::new);
		debug!(
			culture = %culture,
			store = self.store.name(),
			entries = loaded.as_ref().map_or(0, |set| set.len()),
			"loaded resource set"
		);
		self.sets.insert(culture.clone(), loaded.clone());
		Ok(loaded)
	}

	/// Look `code` up in `culture`, then in each of its parents.
	pub(crate) fn get_string(&mut self, culture: &Culture, code: &str) -> Result<Option<String>> {
		for candidate in culture.fallback_chain() {
			if let Some(set) = self.resource_set(&candidate)? {
				if let Some(text) = set.get(code) {
					return Ok(Some(text.to_string()));
				}
			}
		}
		Ok(None)
	}

	/// Every entry visible from `culture`: its own entries first, then parent
	/// entries whose keys it does not already define.
	pub(crate) fn merged_set(&mut self, culture: &Culture) -> Result<ResourceSet> {
		let mut merged = ResourceSet::new();
		for candidate in culture.fallback_chain() {
			if let Some(set) = self.resource_set(&candidate)? {
				for (key, value) in set.iter() {
					merged.insert(key, value);
				}
			}
		}
		Ok(merged)
	}
}
