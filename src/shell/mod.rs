// Composition root for the products service.
//
// Responsibilities
// - Read config from flags and environment.
// - Build the store, the cache regions and the service facade.
// - Expose the service over HTTP.

pub mod config;
pub mod http;
pub mod state;
