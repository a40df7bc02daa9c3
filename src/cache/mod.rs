// Reference-data caching: deterministic key layout plus an in-memory store

pub mod keys;
pub mod store;

pub use store::{CacheResult, ReferenceCache};
