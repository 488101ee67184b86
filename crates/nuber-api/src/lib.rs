//! GraphQL-backed sign-in services.

pub mod graphql;
pub mod retry;
pub mod services;

pub use graphql::GraphqlClient;
pub use retry::RetryPolicy;
pub use services::{GraphqlServices, SessionHandoff, SessionReceiver};
