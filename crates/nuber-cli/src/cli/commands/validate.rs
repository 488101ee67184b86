use anyhow::{Result, bail};
use nuber_core::config::Config;
use nuber_core::features::phone_sign_in::INVALID_PHONE;
use nuber_core::phone;
use tracing::debug;

pub fn run(config: &Config, country: Option<&str>, number: &str) -> Result<()> {
    let country = country.unwrap_or(&config.default_country_code);
    match phone::validate(country, number) {
        Ok(phone) => {
            println!("{phone}");
            Ok(())
        }
        Err(err) => {
            debug!(code = err.code(), "validation failed");
            bail!(INVALID_PHONE)
        }
    }
}
