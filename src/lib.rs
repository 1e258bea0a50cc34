//! supplier-rank crate
//!
//! This crate is an implementation detail of the `supplier-rank` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.

#[doc(hidden)]
pub mod assessment;

#[doc(hidden)]
pub mod catalog;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod directory;

#[doc(hidden)]
pub mod misc;

#[doc(hidden)]
pub mod reports;
