// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod logging;
mod navigation;

pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use navigation::{NavigationConfig, NavigationConfigLayer};
