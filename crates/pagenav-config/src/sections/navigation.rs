// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation defaults: window size and link patterns.

use pagenav_core::{PageLink, PaginationConfigBuilder, DEFAULT_MAX_NAVIGATE, DEFAULT_PAGE_LINK};
use serde::{Deserialize, Serialize};

/// Navigation configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationConfig {
	pub max_navigate: u32,
	/// Link pattern; `%s` is replaced by the page number
	pub page_link: String,
	/// Literal link for page 1
	pub first_page_link: Option<String>,
}

impl Default for NavigationConfig {
	fn default() -> Self {
		Self {
			max_navigate: DEFAULT_MAX_NAVIGATE,
			page_link: DEFAULT_PAGE_LINK.to_string(),
			first_page_link: None,
		}
	}
}

impl NavigationConfig {
	/// Start a pagination snapshot with these defaults applied.
	pub fn builder(&self, total_pages: u32, current_page: u32) -> PaginationConfigBuilder {
		let builder = PaginationConfigBuilder::new(total_pages, current_page)
			.max_navigate(self.max_navigate)
			.page_link(PageLink::pattern(self.page_link.as_str()));
		match &self.first_page_link {
			Some(link) => builder.first_page_link(link.as_str()),
			None => builder,
		}
	}
}

/// Navigation configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationConfigLayer {
	#[serde(default)]
	pub max_navigate: Option<u32>,
	#[serde(default)]
	pub page_link: Option<String>,
	#[serde(default)]
	pub first_page_link: Option<String>,
}

impl NavigationConfigLayer {
	pub fn merge(&mut self, other: NavigationConfigLayer) {
		if other.max_navigate.is_some() {
			self.max_navigate = other.max_navigate;
		}
		if other.page_link.is_some() {
			self.page_link = other.page_link;
		}
		if other.first_page_link.is_some() {
			self.first_page_link = other.first_page_link;
		}
	}

	pub fn finalize(self) -> NavigationConfig {
		let defaults = NavigationConfig::default();
		NavigationConfig {
			max_navigate: self.max_navigate.unwrap_or(defaults.max_navigate),
			page_link: self.page_link.unwrap_or(defaults.page_link),
			first_page_link: self.first_page_link.filter(|s| !s.is_empty()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = NavigationConfigLayer::default().finalize();
		assert_eq!(config.max_navigate, 5);
		assert_eq!(config.page_link, "%s");
		assert!(config.first_page_link.is_none());
	}

	#[test]
	fn test_merge_overwrites() {
		let mut base = NavigationConfigLayer {
			max_navigate: Some(7),
			page_link: Some("/old/%s".to_string()),
			first_page_link: None,
		};
		base.merge(NavigationConfigLayer {
			max_navigate: None,
			page_link: Some("/new/%s".to_string()),
			first_page_link: Some("/".to_string()),
		});
		assert_eq!(base.max_navigate, Some(7));
		assert_eq!(base.page_link.as_deref(), Some("/new/%s"));
		assert_eq!(base.first_page_link.as_deref(), Some("/"));
	}

	#[test]
	fn test_empty_first_page_link_is_dropped() {
		let config = NavigationConfigLayer {
			first_page_link: Some(String::new()),
			..Default::default()
		}
		.finalize();
		assert!(config.first_page_link.is_none());
	}

	#[test]
	fn test_builder_applies_defaults() {
		let nav = NavigationConfig {
			max_navigate: 3,
			page_link: "/?page=%s".to_string(),
			first_page_link: Some("/".to_string()),
		};
		let config = nav.builder(10, 5).build().unwrap();
		assert_eq!(config.max_navigate(), 3);
		assert_eq!(config.link_for(1), "/");
		assert_eq!(config.link_for(4), "/?page=4");
	}
}
