// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page link formatting.
//!
//! A [`PageLink`] maps a page number to the URL a navigation node points at.
//! The navigation code only ever calls [`PageLink::format`]; whether the link
//! comes from a pattern or an arbitrary closure is decided by the caller.

use std::fmt;
use std::sync::Arc;

/// Placeholder replaced by the page number in link patterns.
pub const PAGE_PLACEHOLDER: &str = "%s";

/// Pattern used when no page link is configured.
pub const DEFAULT_PAGE_LINK: &str = PAGE_PLACEHOLDER;

type FormatFn = dyn Fn(u32) -> String + Send + Sync;

/// Capability producing the link for a page number.
#[derive(Clone)]
pub struct PageLink {
	inner: Arc<FormatFn>,
	pattern: Option<String>,
}

impl PageLink {
	/// Wrap an arbitrary page-to-link mapping.
	pub fn from_fn<F>(f: F) -> Self
	where
		F: Fn(u32) -> String + Send + Sync + 'static,
	{
		Self {
			inner: Arc::new(f),
			pattern: None,
		}
	}

	/// Build a link from a pattern such as `/?page=%s`.
	///
	/// The first `%s` is replaced by the page number. A pattern without a
	/// placeholder yields the same link for every page.
	pub fn pattern(pattern: impl Into<String>) -> Self {
		let pattern = pattern.into();
		let template = pattern.clone();
		Self {
			inner: Arc::new(move |page: u32| template.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)),
			pattern: Some(pattern),
		}
	}

	/// Resolve the link for `page`.
	pub fn format(&self, page: u32) -> String {
		(self.inner)(page)
	}

	/// The source pattern, if this link was built from one.
	pub fn as_pattern(&self) -> Option<&str> {
		self.pattern.as_deref()
	}
}

impl Default for PageLink {
	fn default() -> Self {
		Self::pattern(DEFAULT_PAGE_LINK)
	}
}

impl fmt::Debug for PageLink {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.pattern {
			Some(p) => f.debug_tuple("PageLink::Pattern").field(p).finish(),
			None => f.write_str("PageLink::Fn"),
		}
	}
}
