//! # Domain Models
//!
//! Pure types shared by every crate in the workspace: content records, the
//! business contact card, and site configuration.
//! Keep it lean: no I/O, no lookups, no serialization logic beyond derives.

pub mod business;
pub mod config;
pub mod constants;
pub mod content;
pub mod registry;
