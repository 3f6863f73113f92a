// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Pagination input: page counts, window size and link settings.

use crate::error::{PaginationError, Result};
use crate::link::PageLink;
use crate::view::NavigationView;

/// Number of page links shown in the window when not configured.
pub const DEFAULT_MAX_NAVIGATE: u32 = 5;

/// Immutable pagination snapshot for a single request.
///
/// Built through [`PaginationConfigBuilder`], which checks the page range
/// once so the navigation code can rely on `1 <= current_page` and, for a
/// non-empty result set, `current_page <= total_pages`.
#[derive(Debug, Clone)]
pub struct PaginationConfig {
	total_pages: u32,
	current_page: u32,
	max_navigate: u32,
	page_link: PageLink,
	first_page_link: Option<String>,
}

impl PaginationConfig {
	/// Configuration with default window size and link pattern.
	pub fn new(total_pages: u32, current_page: u32) -> Result<Self> {
		Self::builder(total_pages, current_page).build()
	}

	pub fn builder(total_pages: u32, current_page: u32) -> PaginationConfigBuilder {
		PaginationConfigBuilder::new(total_pages, current_page)
	}

	pub fn total_pages(&self) -> u32 {
		self.total_pages
	}

	pub fn current_page(&self) -> u32 {
		self.current_page
	}

	pub fn max_navigate(&self) -> u32 {
		self.max_navigate
	}

	pub fn page_link(&self) -> &PageLink {
		&self.page_link
	}

	/// Override link for page 1. Empty overrides are stored as `None`.
	pub fn first_page_link(&self) -> Option<&str> {
		self.first_page_link.as_deref()
	}

	/// Resolve the link for `page`, honouring the first-page override.
	pub fn link_for(&self, page: u32) -> String {
		match (page, self.first_page_link()) {
			(1, Some(link)) => link.to_string(),
			_ => self.page_link.format(page),
		}
	}

	/// Derive the navigation view. Window offsets are computed here, once.
	pub fn view(&self) -> NavigationView<'_> {
		NavigationView::new(self)
	}
}

/// Builder for [`PaginationConfig`].
#[derive(Debug, Clone)]
pub struct PaginationConfigBuilder {
	total_pages: u32,
	current_page: u32,
	max_navigate: u32,
	page_link: PageLink,
	first_page_link: Option<String>,
}

impl PaginationConfigBuilder {
	pub fn new(total_pages: u32, current_page: u32) -> Self {
		Self {
			total_pages,
			current_page,
			max_navigate: DEFAULT_MAX_NAVIGATE,
			page_link: PageLink::default(),
			first_page_link: None,
		}
	}

	pub fn max_navigate(mut self, max_navigate: u32) -> Self {
		self.max_navigate = max_navigate;
		self
	}

	pub fn page_link(mut self, page_link: PageLink) -> Self {
		self.page_link = page_link;
		self
	}

	/// Shorthand for `page_link(PageLink::pattern(pattern))`.
	pub fn page_link_pattern(self, pattern: impl Into<String>) -> Self {
		self.page_link(PageLink::pattern(pattern))
	}

	/// Literal link used for page 1 instead of the formatted one.
	pub fn first_page_link(mut self, link: impl Into<String>) -> Self {
		let link = link.into();
		self.first_page_link = if link.is_empty() { None } else { Some(link) };
		self
	}

	/// Validate the page range and window size.
	///
	/// A `total_pages` of zero is an empty result set; `current_page` must
	/// still be 1 in that case.
	pub fn build(self) -> Result<PaginationConfig> {
		if self.current_page == 0 {
			return Err(PaginationError::CurrentPageZero);
		}
		if self.current_page > self.total_pages.max(1) {
			return Err(PaginationError::CurrentPageOutOfRange {
				current: self.current_page,
				total: self.total_pages,
			});
		}
		if self.max_navigate == 0 {
			return Err(PaginationError::MaxNavigateZero);
		}

		Ok(PaginationConfig {
			total_pages: self.total_pages,
			current_page: self.current_page,
			max_navigate: self.max_navigate,
			page_link: self.page_link,
			first_page_link: self.first_page_link,
		})
	}
}
