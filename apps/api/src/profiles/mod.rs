//! Profile analysis endpoints and the SQLite-backed profile store.

pub mod handlers;
pub mod store;
