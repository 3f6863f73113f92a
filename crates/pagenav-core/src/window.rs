// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Window of page numbers shown around the current page.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::PaginationConfig;

/// Pages shown to the left and right of the current page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offsets {
	pub left: u32,
	pub right: u32,
}

impl Offsets {
	/// Compute the window offsets for a page range.
	///
	/// The window starts as an even split of `max_navigate - 1` (the spare
	/// slot goes right), then is shifted away from whichever edge it crosses
	/// and finally floored at page 1.
	///
	/// Expects `1 <= current_page <= total_pages` and `max_navigate >= 1`.
	/// An empty result set (`total_pages == 0`) has no window.
	pub fn compute(total_pages: u32, current_page: u32, max_navigate: u32) -> Self {
		if total_pages == 0 {
			return Self::default();
		}

		let total = i64::from(total_pages);
		let current = i64::from(current_page);
		let span = i64::from(max_navigate) - 1;

		let mut left = span / 2;
		let mut right = span - left;

		if current - left < 1 {
			let offset = (current - 1 - left).abs();
			left -= offset;
			right += offset;
		}

		if current + right > total {
			let offset = (total - current - right).abs();
			left += offset;
			right -= offset;
		}

		if left >= current {
			left = current - 1;
		}

		Self {
			left: clamp_u32(left),
			right: clamp_u32(right),
		}
	}
}

fn clamp_u32(value: i64) -> u32 {
	u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Window calculator bound to one configuration snapshot.
///
/// Offsets are computed when the calculator is created and never again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateRange {
	current_page: u32,
	offsets: Offsets,
}

impl NavigateRange {
	pub fn new(config: &PaginationConfig) -> Self {
		let offsets = Offsets::compute(
			config.total_pages(),
			config.current_page(),
			config.max_navigate(),
		);
		trace!(
			total_pages = config.total_pages(),
			current_page = config.current_page(),
			max_navigate = config.max_navigate(),
			left = offsets.left,
			right = offsets.right,
			"computed navigation offsets"
		);
		Self {
			current_page: config.current_page(),
			offsets,
		}
	}

	pub fn left_offset(&self) -> u32 {
		self.offsets.left
	}

	pub fn right_offset(&self) -> u32 {
		self.offsets.right
	}

	pub fn offsets(&self) -> Offsets {
		self.offsets
	}

	/// First page of the window.
	pub fn start(&self) -> u32 {
		self.current_page - self.offsets.left
	}

	/// Last page of the window.
	pub fn end(&self) -> u32 {
		self.current_page.saturating_add(self.offsets.right)
	}

	pub fn pages(&self) -> RangeInclusive<u32> {
		self.start()..=self.end()
	}
}
