//! Feature slices of the login reducer.
//!
//! - `selector`: login method state machine and its deferred focus/collapse
//! - `phone_sign_in`: SMS one-time-passcode request and verification hand-off
//! - `federated`: provider account link chained into session establishment

pub mod federated;
pub mod phone_sign_in;
pub mod selector;
