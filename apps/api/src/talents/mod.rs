// Talent search and profile management.
// filter: pure predicate composition; service: store-backed operations.

pub mod filter;
pub mod handlers;
pub mod search;
pub mod service;
pub mod store;
