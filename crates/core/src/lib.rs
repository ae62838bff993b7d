//! Marketplace Core - Shared types library.
//!
//! This crate provides common types used across the Marketplace components:
//! - `cart` - Cart state container with local device persistence
//! - `cli` - Command-line tools for inspecting and mutating the persisted cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe product IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
