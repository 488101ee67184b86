//! Login event types.
//!
//! All inputs to the controller (user actions, provider callbacks, request
//! completions, timer expiries) are converted to `LoginEvent` before being
//! processed by the reducer.

use crate::common::{TaskId, TimerId};
use crate::error::RequestResult;
use crate::phone::ValidatedPhone;
use crate::profile::FederatedProfile;
use crate::services::{FederatedConnectResponse, PhoneSignInResponse};
use crate::state::FieldUpdate;

#[derive(Debug)]
pub enum LoginEvent {
    /// User picked the phone number surface.
    SelectMobile,

    /// User picked the social login surface.
    SelectSocial,

    /// User pressed back.
    GoBack,

    /// Input change on the phone form.
    Field(FieldUpdate),

    /// Phone form submitted.
    Submit,

    /// Identity-provider SDK callback.
    ProviderResponse(FederatedProfile),

    /// SMS sign-in request settled.
    PhoneSignInCompleted {
        task: TaskId,
        phone: ValidatedPhone,
        result: RequestResult<PhoneSignInResponse>,
    },

    /// Account-link request settled.
    FederatedConnectCompleted {
        task: TaskId,
        result: RequestResult<FederatedConnectResponse>,
    },

    /// Session-establishment request settled.
    SessionEstablished { task: TaskId, result: RequestResult<()> },

    /// A scheduled timer elapsed.
    TimerFired(TimerId),
}
