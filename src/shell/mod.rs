// Composition root for the storefront.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers and the cart store.
// - Expose the REST and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
