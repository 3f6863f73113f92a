// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration as read from a single source.

use serde::{Deserialize, Serialize};

use crate::sections::{LoggingConfigLayer, NavigationConfigLayer};

/// One source's view of the configuration. Absent sections and fields leave
/// lower-precedence values untouched when merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfigLayer {
	#[serde(default)]
	pub navigation: Option<NavigationConfigLayer>,
	#[serde(default)]
	pub logging: Option<LoggingConfigLayer>,
}

impl AppConfigLayer {
	pub fn merge(&mut self, other: AppConfigLayer) {
		merge_section(&mut self.navigation, other.navigation, NavigationConfigLayer::merge);
		merge_section(&mut self.logging, other.logging, LoggingConfigLayer::merge);
	}
}

fn merge_section<T>(base: &mut Option<T>, other: Option<T>, merge: fn(&mut T, T)) {
	let Some(other) = other else {
		return;
	};
	match base {
		Some(b) => merge(b, other),
		None => *base = Some(other),
	}
}
