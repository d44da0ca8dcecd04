// Composition root for the event catalog.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory event store and wire it into the handlers.
// - Expose the HTTP router with CORS and request tracing.

pub mod config;
pub mod http;
pub mod state;
