//! Facebook login from a provider callback payload.

use std::fs;
use std::io;

use anyhow::{Context, Result, bail};
use nuber_core::config::Config;
use nuber_core::events::LoginEvent;
use nuber_core::profile::FederatedProfile;

use super::{mount, settle};

pub async fn run(config: Config, source: &str) -> Result<()> {
    let profile = read_profile(source)?;

    let (mut runtime, session) = mount(config)?;
    runtime.dispatch(LoginEvent::SelectSocial);
    runtime.dispatch(LoginEvent::ProviderResponse(profile));

    let completed = settle(&mut runtime).await;
    let link_started = runtime.session().task_seq.issued() > 0;
    let established = runtime.session().session_established;
    runtime.into_surface().finish()?;

    if !link_started {
        println!("Facebook login cancelled");
        return Ok(());
    }
    if !established {
        if completed {
            bail!("Session was not established");
        }
        bail!("Interrupted before login completed");
    }
    let token = session.borrow().clone().unwrap_or_default();
    println!("Logged in (token ending {})", token_tail(&token));
    Ok(())
}

fn read_profile(source: &str) -> Result<FederatedProfile> {
    let raw = if source == "-" {
        io::read_to_string(io::stdin()).context("read provider profile from stdin")?
    } else {
        fs::read_to_string(source).with_context(|| format!("read provider profile from {source}"))?
    };
    serde_json::from_str(&raw).context("parse provider profile")
}

/// Last six characters; session tokens are never printed in full.
fn token_tail(token: &str) -> &str {
    let start = token
        .char_indices()
        .rev()
        .nth(5)
        .map_or(0, |(idx, _)| idx);
    &token[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_tail() {
        assert_eq!(token_tail("header.payload.signature"), "nature");
        assert_eq!(token_tail("abc"), "abc");
        assert_eq!(token_tail(""), "");
    }
}
