// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for pagenav.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Navigation defaults (window size, link pattern, first-page link)
//! - Logging level
//!
//! # Usage
//!
//! ```ignore
//! use pagenav_config::load_config;
//!
//! let config = load_config()?;
//! let pagination = config.navigation.builder(42, 7).build()?;
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::AppConfigLayer;
pub use sections::*;
pub use sources::{ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource};

use std::path::PathBuf;

use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
	pub navigation: NavigationConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`PAGENAV_*`)
/// 2. Config file (`./pagenav.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<AppConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::working_dir()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(config_path: impl Into<PathBuf>) -> Result<AppConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(mut sources: Vec<Box<dyn ConfigSource>>) -> Result<AppConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = AppConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: AppConfigLayer) -> Result<AppConfig, ConfigError> {
	let navigation = layer.navigation.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_navigation(&navigation)?;

	info!(
		max_navigate = navigation.max_navigate,
		page_link = %navigation.page_link,
		first_page_link = navigation.first_page_link.as_deref().unwrap_or(""),
		log_level = %logging.level,
		"configuration loaded"
	);

	Ok(AppConfig {
		navigation,
		logging,
	})
}

fn validate_navigation(navigation: &NavigationConfig) -> Result<(), ConfigError> {
	if navigation.max_navigate == 0 {
		return Err(ConfigError::Validation(
			"navigation.max_navigate must be at least 1".to_string(),
		));
	}
	if navigation.page_link.is_empty() {
		return Err(ConfigError::Validation(
			"navigation.page_link must not be empty".to_string(),
		));
	}
	Ok(())
}
