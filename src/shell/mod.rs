// Composition root: configuration, wiring of the store and session into the
// use case handlers, and the HTTP and GraphQL surfaces built on top of them.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
