//! Core types and trait definitions for the Bites snack recommender.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod menu;
pub mod recommend;
pub mod review;
pub mod store;
pub mod weather;

pub use error::{Error, Result};
