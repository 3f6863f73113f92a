// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation view: the nodes a renderer draws for one request.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;
use crate::node::{EntryKind, NavigationEntry, NavigationNode};
use crate::window::{NavigateRange, Offsets};

/// Navigation derived from a [`PaginationConfig`].
///
/// Boundary accessors return `None` when the link does not apply, e.g. there
/// is no previous page on page 1. The window can be iterated any number of
/// times.
#[derive(Debug, Clone, Copy)]
pub struct NavigationView<'a> {
	config: &'a PaginationConfig,
	range: NavigateRange,
}

impl<'a> NavigationView<'a> {
	pub fn new(config: &'a PaginationConfig) -> Self {
		Self {
			config,
			range: NavigateRange::new(config),
		}
	}

	pub fn config(&self) -> &'a PaginationConfig {
		self.config
	}

	pub fn total(&self) -> u32 {
		self.config.total_pages()
	}

	pub fn offsets(&self) -> Offsets {
		self.range.offsets()
	}

	pub fn first(&self) -> Option<NavigationNode> {
		(self.config.current_page() != 1).then(|| self.node(1))
	}

	pub fn prev(&self) -> Option<NavigationNode> {
		let current = self.config.current_page();
		(current > 1).then(|| self.node(current - 1))
	}

	pub fn current(&self) -> NavigationNode {
		self.node(self.config.current_page())
	}

	pub fn next(&self) -> Option<NavigationNode> {
		let current = self.config.current_page();
		(current < self.total()).then(|| self.node(current + 1))
	}

	pub fn last(&self) -> Option<NavigationNode> {
		let total = self.total();
		(self.config.current_page() < total).then(|| self.node(total))
	}

	/// Pages covered by the window; empty when there is at most one page.
	pub fn range(&self) -> RangeInclusive<u32> {
		if self.total() <= 1 {
			return RangeInclusive::new(1, 0);
		}
		self.range.pages()
	}

	/// Window nodes in page order.
	pub fn iter(&self) -> WindowIter<'a> {
		WindowIter {
			config: self.config,
			pages: self.range(),
		}
	}

	/// The full bar: first, prev, window pages, next, last.
	pub fn entries(&self) -> Vec<NavigationEntry> {
		let mut entries = Vec::with_capacity(self.iter().len() + 4);
		let mut push = |kind, node: Option<NavigationNode>| {
			if let Some(node) = node {
				entries.push(NavigationEntry { kind, node });
			}
		};

		push(EntryKind::First, self.first());
		push(EntryKind::Prev, self.prev());
		for node in self.iter() {
			push(EntryKind::Page, Some(node));
		}
		push(EntryKind::Next, self.next());
		push(EntryKind::Last, self.last());

		entries
	}

	/// Owned snapshot for template renderers.
	pub fn to_model(&self) -> ViewModel {
		ViewModel {
			total: self.total(),
			first: self.first(),
			prev: self.prev(),
			current: self.current(),
			pages: self.iter().collect(),
			next: self.next(),
			last: self.last(),
		}
	}

	fn node(&self, page: u32) -> NavigationNode {
		build_node(self.config, page)
	}
}

fn build_node(config: &PaginationConfig, page: u32) -> NavigationNode {
	let node = NavigationNode::new(page, config.link_for(page));
	if page == config.current_page() {
		node.current()
	} else {
		node
	}
}

impl<'a> IntoIterator for &NavigationView<'a> {
	type Item = NavigationNode;
	type IntoIter = WindowIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Iterator over the window nodes. Links are resolved lazily.
#[derive(Debug, Clone)]
pub struct WindowIter<'a> {
	config: &'a PaginationConfig,
	pages: RangeInclusive<u32>,
}

impl Iterator for WindowIter<'_> {
	type Item = NavigationNode;

	fn next(&mut self) -> Option<Self::Item> {
		self.pages.next().map(|page| build_node(self.config, page))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = if self.pages.is_empty() {
			0
		} else {
			usize::try_from(u64::from(*self.pages.end()) - u64::from(*self.pages.start()) + 1)
				.unwrap_or(usize::MAX)
		};
		(len, Some(len))
	}
}

impl DoubleEndedIterator for WindowIter<'_> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.pages.next_back().map(|page| build_node(self.config, page))
	}
}

impl ExactSizeIterator for WindowIter<'_> {}

impl FusedIterator for WindowIter<'_> {}

/// Serializable navigation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewModel {
	pub total: u32,
	pub first: Option<NavigationNode>,
	pub prev: Option<NavigationNode>,
	pub current: NavigationNode,
	pub pages: Vec<NavigationNode>,
	pub next: Option<NavigationNode>,
	pub last: Option<NavigationNode>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::link::PageLink;
	use proptest::prelude::*;

	fn config(total: u32, current: u32) -> PaginationConfig {
		PaginationConfig::builder(total, current)
			.page_link_pattern("page_%s.html")
			.build()
			.unwrap()
	}

	#[test]
	fn test_total() {
		let config = config(110, 5);
		assert_eq!(config.view().total(), 110);
	}

	#[test]
	fn test_boundary_nodes_absent() {
		let first_page = config(110, 1);
		assert!(first_page.view().first().is_none());
		assert!(first_page.view().prev().is_none());

		let last_page = config(110, 110);
		assert!(last_page.view().next().is_none());
		assert!(last_page.view().last().is_none());
	}

	#[test]
	fn test_first_uses_formatter_without_override() {
		let config = config(20, 10);
		let node = config.view().first().unwrap();
		assert_eq!(node, NavigationNode::new(1, "page_1.html"));
	}

	#[test]
	fn test_first_uses_override() {
		let config = PaginationConfig::builder(20, 10)
			.page_link(PageLink::from_fn(|n| format!("page_{n}.html")))
			.first_page_link("/index.html")
			.build()
			.unwrap();
		let node = config.view().first().unwrap();
		assert_eq!(node.page, 1);
		assert_eq!(node.link, "/index.html");
		assert!(!node.is_current);
	}

	#[test]
	fn test_prev_next_last() {
		let config = config(10, 5);
		let view = config.view();
		assert_eq!(view.prev(), Some(NavigationNode::new(4, "page_4.html")));
		assert_eq!(view.next(), Some(NavigationNode::new(6, "page_6.html")));
		assert_eq!(view.last(), Some(NavigationNode::new(10, "page_10.html")));
	}

	#[test]
	fn test_prev_never_uses_override_past_page_two() {
		let config = PaginationConfig::builder(10, 5)
			.page_link_pattern("page_%s.html")
			.first_page_link("/index.html")
			.build()
			.unwrap();
		assert_eq!(config.view().prev().unwrap().link, "page_4.html");
	}

	#[test]
	fn test_current_on_first_page_uses_override() {
		let config = PaginationConfig::builder(10, 1)
			.page_link_pattern("page_%s.html")
			.first_page_link("/index.html")
			.build()
			.unwrap();
		assert_eq!(
			config.view().current(),
			NavigationNode::new(1, "/index.html").current()
		);
	}

	#[test]
	fn test_window_is_restartable() {
		let config = config(10, 5);
		let view = config.view();
		let first: Vec<_> = view.iter().collect();
		let second: Vec<_> = (&view).into_iter().collect();
		assert_eq!(first, second);
		assert_eq!(view.iter().len(), 5);
	}

	#[test]
	fn test_window_reversed() {
		let config = config(10, 5);
		let pages: Vec<u32> = config.view().iter().rev().map(|n| n.page).collect();
		assert_eq!(pages, vec![7, 6, 5, 4, 3]);
	}

	#[test]
	fn test_entries_order() {
		let config = config(10, 5);
		let kinds: Vec<(EntryKind, u32)> = config
			.view()
			.entries()
			.into_iter()
			.map(|e| (e.kind, e.node.page))
			.collect();
		assert_eq!(
			kinds,
			vec![
				(EntryKind::First, 1),
				(EntryKind::Prev, 4),
				(EntryKind::Page, 3),
				(EntryKind::Page, 4),
				(EntryKind::Page, 5),
				(EntryKind::Page, 6),
				(EntryKind::Page, 7),
				(EntryKind::Next, 6),
				(EntryKind::Last, 10),
			]
		);
	}

	#[test]
	fn test_window_reaches_largest_page_number() {
		let config = config(u32::MAX, u32::MAX);
		let view = config.view();
		let pages: Vec<u32> = view.iter().map(|n| n.page).collect();
		assert_eq!(
			pages,
			vec![u32::MAX - 4, u32::MAX - 3, u32::MAX - 2, u32::MAX - 1, u32::MAX]
		);
		assert_eq!(view.iter().len(), 5);
		assert_eq!(view.range(), u32::MAX - 4..=u32::MAX);

		let current: Vec<_> = view.iter().filter(|n| n.is_current).collect();
		assert_eq!(current, vec![view.current()]);
		assert_eq!(view.entries().len(), 7);

		let mut iter = view.iter();
		assert_eq!(iter.next_back().map(|n| n.page), Some(u32::MAX));
		assert_eq!(iter.len(), 4);
	}

	#[test]
	fn test_empty_result_set() {
		let config = config(0, 1);
		let view = config.view();
		assert!(view.first().is_none());
		assert!(view.prev().is_none());
		assert!(view.next().is_none());
		assert!(view.last().is_none());
		assert_eq!(view.iter().count(), 0);
		assert!(view.entries().is_empty());
	}

	#[test]
	fn test_model_serializes() {
		let config = config(3, 2);
		let model = config.view().to_model();
		let json = serde_json::to_value(&model).unwrap();
		assert_eq!(json["total"], 3);
		assert_eq!(json["current"]["page"], 2);
		assert_eq!(json["current"]["is_current"], true);
		assert_eq!(json["pages"].as_array().unwrap().len(), 3);
		assert_eq!(json["first"]["link"], "page_1.html");
		let back: ViewModel = serde_json::from_value(json).unwrap();
		assert_eq!(back, model);
	}

	proptest! {
		#[test]
		fn exactly_one_current_node(
			(total, current) in (1u32..300).prop_flat_map(|t| (Just(t), 1..=t)),
			max in 1u32..30,
		) {
			let config = PaginationConfig::builder(total, current)
				.max_navigate(max)
				.page_link_pattern("/?page=%s")
				.build()
				.unwrap();
			let view = config.view();
			let current_node = view.current();
			prop_assert!(current_node.is_current);
			prop_assert_eq!(current_node.page, current);

			let flagged: Vec<_> = view.iter().filter(|n| n.is_current).collect();
			if total > 1 {
				prop_assert_eq!(flagged.len(), 1);
				prop_assert_eq!(&flagged[0], &current_node);
			} else {
				prop_assert!(flagged.is_empty());
			}

			let expected = if total > 1 { max.min(total) } else { 0 };
			prop_assert_eq!(view.iter().len() as u32, expected);
			prop_assert_eq!(view.iter().count() as u32, expected);
			if total > 1 {
				let range = view.range();
				prop_assert!(*range.start() >= 1 && *range.end() <= total);
				prop_assert_eq!(range.end() - range.start() + 1, expected);
			}
		}

		#[test]
		fn first_and_last_absent_only_on_edges(
			(total, current) in (1u32..300).prop_flat_map(|t| (Just(t), 1..=t)),
		) {
			let config = PaginationConfig::new(total, current).unwrap();
			let view = config.view();
			prop_assert_eq!(view.first().is_none(), current == 1);
			prop_assert_eq!(view.last().is_none(), current == total);
			prop_assert_eq!(view.prev().is_none(), current == 1);
			prop_assert_eq!(view.next().is_none(), current == total);
		}
	}
}
