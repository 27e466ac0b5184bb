//! # Mercato Core
//!
//! Core types, errors, and domain entities for the Mercato product catalog.
//! This crate provides the foundational abstractions used across all layers
//! of the workspace.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;
pub mod version;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
pub use version::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
