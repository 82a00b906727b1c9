//! # GymStore Testkit
//!
//! Test utilities for GymStore.
//!
//! This crate provides:
//! - Bulk-load document builders and temporary document files
//! - Pre-populated gym scenarios
//! - Property-based test generators using proptest
//! - Concurrency stress helpers
//!
//! ## Usage
//!
//! ```rust
//! use gymstore_testkit::prelude::*;
//!
//! let doc = DocumentBuilder::new()
//!     .trainee(1, "John", "Doe")
//!     .training_type(1, "Yoga");
//! let (gym, report) = load_gym(&doc);
//!
//! assert_eq!(report.loaded, 2);
//! assert_eq!(gym.store().len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use stress::*;
