// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! pagenav binary: prints the navigation bar for a page of a listing.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pagenav_config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

use render::OutputFormat;

/// Render page navigation for a paginated listing.
#[derive(Parser, Debug)]
#[command(
	name = "pagenav",
	about = "Compute the page links shown around the current page",
	version
)]
struct Args {
	/// Total number of pages
	#[arg(long)]
	total: u32,

	/// Current page (1-based)
	#[arg(long, default_value_t = 1)]
	current: u32,

	/// Number of page links in the window
	#[arg(long)]
	max_navigate: Option<u32>,

	/// Link pattern; `%s` is replaced by the page number
	#[arg(long)]
	page_link: Option<String>,

	/// Literal link used for page 1
	#[arg(long)]
	first_page_link: Option<String>,

	/// Config file (defaults to ./pagenav.toml when present)
	#[arg(long, short)]
	config: Option<PathBuf>,

	/// Output format
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();

	let config = match &args.config {
		Some(path) => pagenav_config::load_config_with_file(path),
		None => pagenav_config::load_config(),
	}
	.context("failed to load configuration")?;

	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let pagination = build_pagination(&args, &config)?;
	let view = pagination.view();

	tracing::debug!(
		total = args.total,
		current = args.current,
		left = view.offsets().left,
		right = view.offsets().right,
		"rendering navigation"
	);

	print!("{}", render::render(&view, args.format)?);
	Ok(())
}

/// Apply command-line overrides on top of the loaded navigation defaults.
fn build_pagination(
	args: &Args,
	config: &AppConfig,
) -> anyhow::Result<pagenav_core::PaginationConfig> {
	let mut builder = config.navigation.builder(args.total, args.current);
	if let Some(max) = args.max_navigate {
		builder = builder.max_navigate(max);
	}
	if let Some(pattern) = &args.page_link {
		builder = builder.page_link_pattern(pattern.as_str());
	}
	if let Some(link) = &args.first_page_link {
		builder = builder.first_page_link(link.as_str());
	}
	builder
		.build()
		.with_context(|| format!("invalid page {} of {}", args.current, args.total))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(argv: &[&str]) -> Args {
		Args::try_parse_from(std::iter::once("pagenav").chain(argv.iter().copied())).unwrap()
	}

	#[test]
	fn test_cli_overrides_config() {
		let args = parse(&[
			"--total",
			"10",
			"--current",
			"5",
			"--max-navigate",
			"3",
			"--page-link",
			"/?page=%s",
		]);
		let pagination = build_pagination(&args, &AppConfig::default()).unwrap();
		let pages: Vec<u32> = pagination.view().iter().map(|n| n.page).collect();
		assert_eq!(pages, vec![4, 5, 6]);
		assert_eq!(pagination.link_for(4), "/?page=4");
	}

	#[test]
	fn test_config_defaults_apply() {
		let args = parse(&["--total", "10", "--current", "1"]);
		let mut config = AppConfig::default();
		config.navigation.first_page_link = Some("/".to_string());
		let pagination = build_pagination(&args, &config).unwrap();
		assert_eq!(pagination.max_navigate(), 5);
		assert_eq!(pagination.link_for(1), "/");
		assert_eq!(pagination.link_for(2), "2");
	}

	#[test]
	fn test_out_of_range_page_is_an_error() {
		let args = parse(&["--total", "3", "--current", "4"]);
		let err = build_pagination(&args, &AppConfig::default()).unwrap_err();
		assert!(err.to_string().contains("invalid page 4 of 3"));
	}

	#[test]
	fn test_format_flag() {
		let args = parse(&["--total", "2", "--format", "json"]);
		assert_eq!(args.format, OutputFormat::Json);
	}
}
