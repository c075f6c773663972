//! Domain layer for the Foodgrid plugin.
//!
//! This module contains the listing's core data types, independent of Zellij APIs
//! and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`food`]: Food records, category keys and header tabs
//! - [`catalog`]: The fixed, process-wide catalog
//!
//! # Examples
//!
//! ```
//! use foodgrid::domain::{Catalog, CategoryKey};
//!
//! let hotpot: Vec<_> = Catalog::builtin()
//!     .items()
//!     .iter()
//!     .filter(|item| CategoryKey::Hotpot.admits(item.category))
//!     .collect();
//! assert_eq!(hotpot.len(), 1);
//! ```

pub mod catalog;
pub mod error;
pub mod food;

pub use catalog::Catalog;
pub use error::{FoodgridError, Result};
pub use food::{Category, CategoryKey, FoodItem, SectionTab};
