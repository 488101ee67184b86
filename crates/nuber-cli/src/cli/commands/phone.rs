//! SMS sign-in from the terminal.

use anyhow::{Result, bail};
use nuber_core::config::Config;
use nuber_core::events::LoginEvent;
use nuber_core::state::FieldUpdate;

use super::{mount, settle};

pub async fn run(config: Config, country: Option<String>, number: String) -> Result<()> {
    let (mut runtime, _session) = mount(config)?;

    runtime.dispatch(LoginEvent::SelectMobile);
    if let Some(code) = country {
        runtime.dispatch(LoginEvent::Field(FieldUpdate::SetCountryCode(code)));
    }
    runtime.dispatch(LoginEvent::Field(FieldUpdate::SetPhoneNumber(number)));
    runtime.dispatch(LoginEvent::Submit);

    let completed = settle(&mut runtime).await;
    let surface = runtime.into_surface();
    let navigated = surface.navigated_to().is_some();
    surface.finish()?;
    if !completed && !navigated {
        bail!("Interrupted before verification");
    }
    Ok(())
}
