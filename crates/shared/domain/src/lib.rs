//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or heavy logic, just data and simple helpers.

pub mod capabilities;
pub mod color;
pub mod config;
pub mod constants;

pub use capabilities::Capabilities;
pub use color::Color;
