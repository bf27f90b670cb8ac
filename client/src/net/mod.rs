//! Data layer: identity types, content catalogs, and the backend seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the contract the session guard depends on, `mock` is the
//! in-memory implementation used until a real API exists, `catalog` holds the
//! static content fixtures, and `types` defines the shared schema.

pub mod backend;
pub mod catalog;
pub mod mock;
pub mod types;
