//! `larder-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod day;
pub mod error;
pub mod id;

pub use day::Day;
pub use error::{DomainError, DomainResult};
pub use id::{ProductCode, WarehouseName};
