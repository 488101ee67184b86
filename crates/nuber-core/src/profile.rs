//! Identity-provider callback payload.

use serde::{Deserialize, Serialize};

use crate::services::FederatedConnectRequest;

/// Profile delivered by the identity-provider SDK.
///
/// Field names follow the Facebook SDK callback. A missing or empty access
/// token means the user cancelled or the provider flow failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederatedProfile {
    #[serde(rename = "accessToken", default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "first_name", default)]
    pub first_name: String,
    #[serde(rename = "last_name", default)]
    pub last_name: String,
    #[serde(rename = "userID", default)]
    pub provider_user_id: String,
}

impl FederatedProfile {
    pub fn is_cancelled(&self) -> bool {
        self.access_token.as_deref().is_none_or(str::is_empty)
    }

    /// Account-link request for this profile, or `None` if cancelled.
    ///
    /// An empty email is sent as absent.
    pub fn connect_request(&self) -> Option<FederatedConnectRequest> {
        if self.is_cancelled() {
            return None;
        }
        Some(FederatedConnectRequest {
            email: self.email.clone().filter(|e| !e.is_empty()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            provider_user_id: self.provider_user_id.clone(),
        })
    }
}
