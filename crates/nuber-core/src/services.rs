//! Collaborator contracts.
//!
//! The controller never performs I/O itself. The runtime calls these traits
//! to reach the sign-in services and the screen.

use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::error::RequestResult;
use crate::phone::ValidatedPhone;

/// Reply to an SMS sign-in request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneSignInResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Fields sent to link a third-party identity to a local account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedConnectRequest {
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "userID")]
    pub provider_user_id: String,
}

/// Reply to an account-link request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedConnectResponse {
    pub ok: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Sign-in services used by the controller.
///
/// Futures are `'static` so the runtime can spawn them; implementations
/// clone whatever client handle they need.
pub trait LoginServices: Send + Sync {
    /// Requests an SMS one-time passcode for `phone`.
    fn request_phone_sign_in(
        &self,
        phone: ValidatedPhone,
    ) -> BoxFuture<'static, RequestResult<PhoneSignInResponse>>;

    /// Links a federated identity to a local account.
    fn connect_federated(
        &self,
        request: FederatedConnectRequest,
    ) -> BoxFuture<'static, RequestResult<FederatedConnectResponse>>;

    /// Establishes the session for `token`.
    fn log_user_in(&self, token: String) -> BoxFuture<'static, RequestResult<()>>;
}

/// Navigation payload for the verification screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub phone: ValidatedPhone,
}

/// Screen-side collaborators: toasts, navigation and input focus.
pub trait LoginSurface: Send {
    fn notify_success(&mut self, message: &str);

    fn notify_error(&mut self, message: &str);

    fn navigate(&mut self, path: &str, context: Option<NavigationContext>);

    fn focus_phone_input(&mut self);

    fn blur_phone_input(&mut self);
}
