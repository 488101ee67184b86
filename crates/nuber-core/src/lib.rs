//! Login-initiation controller (method selection, SMS sign-in, federated login).

pub mod common;
pub mod config;
pub mod effects;
pub mod error;
pub mod events;
pub mod features;
pub mod phone;
pub mod profile;
pub mod runtime;
pub mod services;
pub mod state;
pub mod update;

pub use config::Config;
pub use error::{RequestError, RequestErrorKind, RequestResult};
pub use events::LoginEvent;
pub use phone::{ValidatedPhone, ValidationError, validate};
pub use profile::FederatedProfile;
pub use runtime::LoginRuntime;
pub use services::{LoginServices, LoginSurface, NavigationContext};
pub use state::{FieldUpdate, LoginMethod, LoginSession};
