//! # picker-core - Core Domain Types
//!
//! Foundation crate for the asset picker. Provides the asset item model,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`AssetId`] - Opaque, stable identifier of an asset
//! - [`AssetItem`] - An asset row with its `picked` / `updating` / `error` flags
//! - [`ItemError`] - Marker for a blocked or failed operation on an item
//! - [`AssetSelection`] - Value reported to an external selection consumer
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use picker_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all picker crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{AssetId, AssetItem, AssetSelection, ItemError, SelectionKind};
