//! `LoginServices` backed by the GraphQL API.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use nuber_core::error::{RequestError, RequestResult};
use nuber_core::phone::ValidatedPhone;
use nuber_core::services::{
    FederatedConnectRequest, FederatedConnectResponse, LoginServices, PhoneSignInResponse,
};
use serde_json::json;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::graphql::{FACEBOOK_CONNECT, GraphqlClient, REQUEST_PHONE_SIGN_IN};

/// Hands a session token to whoever persists the login.
///
/// Publishing fails once every receiver is gone.
#[derive(Debug)]
pub struct SessionHandoff {
    tx: watch::Sender<Option<String>>,
}

/// Receiving side of a [`SessionHandoff`]; holds the latest token.
pub type SessionReceiver = watch::Receiver<Option<String>>;

impl SessionHandoff {
    pub fn channel() -> (Self, SessionReceiver) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }

    /// Publishes `token` as the current session.
    ///
    /// # Errors
    /// Returns `SessionEstablishFailed` if no receiver is listening.
    pub fn publish(&self, token: String) -> RequestResult<()> {
        self.tx.send(Some(token)).map_err(|err| {
            debug!(error = %err, "session receiver dropped");
            RequestError::session_establish("Session store is unavailable")
        })
    }
}

pub struct GraphqlServices {
    client: Arc<GraphqlClient>,
    session: SessionHandoff,
}

impl GraphqlServices {
    pub fn new(client: GraphqlClient, session: SessionHandoff) -> Self {
        Self {
            client: Arc::new(client),
            session,
        }
    }
}

impl LoginServices for GraphqlServices {
    fn request_phone_sign_in(
        &self,
        phone: ValidatedPhone,
    ) -> BoxFuture<'static, RequestResult<PhoneSignInResponse>> {
        let client = Arc::clone(&self.client);
        async move {
            let variables = json!({ "phoneNumber": phone.as_str() });
            client.execute(REQUEST_PHONE_SIGN_IN, variables).await
        }
        .boxed()
    }

    fn connect_federated(
        &self,
        request: FederatedConnectRequest,
    ) -> BoxFuture<'static, RequestResult<FederatedConnectResponse>> {
        let client = Arc::clone(&self.client);
        async move {
            let variables = serde_json::to_value(&request)
                .map_err(|e| RequestError::transport(format!("Failed to encode request: {e}")))?;
            client.execute(FACEBOOK_CONNECT, variables).await
        }
        .boxed()
    }

    fn log_user_in(&self, token: String) -> BoxFuture<'static, RequestResult<()>> {
        let result = self.session.publish(token);
        if result.is_ok() {
            info!("session token handed off");
        }
        async move { result }.boxed()
    }
}
