// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation node types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single renderable page link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NavigationNode {
	pub page: u32,
	pub link: String,
	#[serde(default)]
	pub is_current: bool,
}

impl NavigationNode {
	pub fn new(page: u32, link: impl Into<String>) -> Self {
		Self {
			page,
			link: link.into(),
			is_current: false,
		}
	}

	#[must_use]
	pub fn current(mut self) -> Self {
		self.is_current = true;
		self
	}
}

/// Role of a node in the full navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
	First,
	Prev,
	Page,
	Next,
	Last,
}

impl fmt::Display for EntryKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::First => write!(f, "first"),
			Self::Prev => write!(f, "prev"),
			Self::Page => write!(f, "page"),
			Self::Next => write!(f, "next"),
			Self::Last => write!(f, "last"),
		}
	}
}

/// A node tagged with its role, in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
	pub kind: EntryKind,
	#[serde(flatten)]
	pub node: NavigationNode,
}
