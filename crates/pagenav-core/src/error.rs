// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for pagination configuration.

use thiserror::Error;

/// Result type for pagination operations.
pub type Result<T> = std::result::Result<T, PaginationError>;

/// Errors raised when a pagination configuration is built from invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
	#[error("current page must be at least 1")]
	CurrentPageZero,

	#[error("current page {current} is beyond the last page {total}")]
	CurrentPageOutOfRange { current: u32, total: u32 },

	#[error("max navigate must be at least 1")]
	MaxNavigateZero,
}
