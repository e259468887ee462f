//! # Paperboard Core
//!
//! Core types and utilities shared across the Paperboard workspace:
//! canvas-space geometry primitives, engine constants, and error types.

pub mod constants;
pub mod error;
pub mod point;

pub use error::{Error, ImportError, Result};
pub use point::Point;
