//! The Puerta Caribe session & identity service.
//!
//! [`AuthService`] owns the identity collection and the single active
//! session, persisted through any [`puerta_core::storage::Storage`] backend.
//! No other component mutates either collection. [`HeaderView`] is the
//! data-level projection the page header renders from.

pub mod header;
pub mod service;

pub use header::HeaderView;
pub use service::AuthService;
