//! CLI command handlers.

pub mod config;
pub mod facebook;
pub mod phone;
pub mod validate;

use std::sync::Arc;

use anyhow::Result;
use nuber_api::{GraphqlClient, GraphqlServices, SessionHandoff, SessionReceiver};
use nuber_core::LoginRuntime;
use nuber_core::config::Config;
use nuber_core::services::LoginServices;
use tracing::warn;

use crate::surface::TerminalSurface;

/// Builds the runtime for one login screen backed by the GraphQL API.
fn mount(config: Config) -> Result<(LoginRuntime<TerminalSurface>, SessionReceiver)> {
    let client = GraphqlClient::from_config(&config)?;
    let (handoff, session) = SessionHandoff::channel();
    let services: Arc<dyn LoginServices> = Arc::new(GraphqlServices::new(client, handoff));
    let runtime = LoginRuntime::new(config, services, TerminalSurface::default());
    Ok((runtime, session))
}

/// Drives the runtime until it is idle or the user interrupts.
///
/// Returns `false` if interrupted.
async fn settle(runtime: &mut LoginRuntime<TerminalSurface>) -> bool {
    tokio::select! {
        () = runtime.run_until_idle() => true,
        _ = tokio::signal::ctrl_c() => {
            warn!("interrupted, cancelling pending requests");
            false
        }
    }
}
