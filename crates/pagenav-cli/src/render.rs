// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Text and JSON rendering of a navigation view.

use pagenav_core::{EntryKind, NavigationEntry, NavigationView};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
	/// Navigation bar followed by one link per line
	#[default]
	Text,
	/// Serialized view model
	Json,
}

pub fn render(view: &NavigationView<'_>, format: OutputFormat) -> anyhow::Result<String> {
	match format {
		OutputFormat::Text => Ok(render_text(view)),
		OutputFormat::Json => Ok(serde_json::to_string_pretty(&view.to_model())?),
	}
}

/// `« ‹ 3 4 [5] 6 7 › »` style bar.
pub fn render_bar(entries: &[NavigationEntry]) -> String {
	entries
		.iter()
		.map(|entry| match entry.kind {
			EntryKind::First => "«".to_string(),
			EntryKind::Prev => "‹".to_string(),
			EntryKind::Next => "›".to_string(),
			EntryKind::Last => "»".to_string(),
			EntryKind::Page if entry.node.is_current => format!("[{}]", entry.node.page),
			EntryKind::Page => entry.node.page.to_string(),
		})
		.collect::<Vec<_>>()
		.join(" ")
}

pub fn render_text(view: &NavigationView<'_>) -> String {
	let entries = view.entries();
	if entries.is_empty() {
		let current = view.current();
		return format!("[{}]\n{:<5} {:>5}  {}\n", current.page, "page", current.page, current.link);
	}

	let mut out = render_bar(&entries);
	out.push('\n');
	for entry in &entries {
		out.push_str(&format!(
			"{:<5} {:>5}  {}\n",
			entry.kind.to_string(),
			entry.node.page,
			entry.node.link
		));
	}
	out
}
