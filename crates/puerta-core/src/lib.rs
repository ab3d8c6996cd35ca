//! Core types and trait definitions for the Puerta Caribe identity store.
//!
//! This crate is deliberately free of database and presentation dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod identity;
pub mod session;
pub mod storage;

pub use error::{Error, Result};
