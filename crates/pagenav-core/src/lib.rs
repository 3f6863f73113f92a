// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Page navigation for paginated views.
//!
//! Given the total page count, the current page and how many page links fit
//! in the navigation bar, this crate decides which page numbers are shown and
//! produces the nodes (page, link, current flag) a renderer draws:
//!
//! - [`PaginationConfig`]: validated input snapshot
//! - [`NavigateRange`]: window offsets around the current page
//! - [`NavigationView`]: first, prev, current, window pages, next, last
//! - [`PageLink`]: page number to URL mapping supplied by the caller
//!
//! # Usage
//!
//! ```
//! use pagenav_core::PaginationConfig;
//!
//! let config = PaginationConfig::builder(10, 5)
//!     .page_link_pattern("/?page=%s")
//!     .build()?;
//! let view = config.view();
//!
//! let pages: Vec<u32> = view.iter().map(|node| node.page).collect();
//! assert_eq!(pages, vec![3, 4, 5, 6, 7]);
//! assert_eq!(view.prev().map(|node| node.link), Some("/?page=4".to_string()));
//! # Ok::<(), pagenav_core::PaginationError>(())
//! ```

pub mod config;
pub mod error;
pub mod link;
pub mod node;
pub mod view;
pub mod window;

pub use config::{PaginationConfig, PaginationConfigBuilder, DEFAULT_MAX_NAVIGATE};
pub use error::{PaginationError, Result};
pub use link::{PageLink, DEFAULT_PAGE_LINK, PAGE_PLACEHOLDER};
pub use node::{EntryKind, NavigationEntry, NavigationNode};
pub use view::{NavigationView, ViewModel, WindowIter};
pub use window::{NavigateRange, Offsets};
