//! Résumé ingestion: upload persistence, the storage gateway and the HTTP handlers
//! that chain extractor -> parser -> store.

pub mod handlers;
pub mod store;
pub mod uploads;
