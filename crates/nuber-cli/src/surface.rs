//! Terminal rendition of the login screen.

use anyhow::{Result, bail};
use nuber_core::services::{LoginSurface, NavigationContext};
use tracing::debug;

/// Prints notifications and navigation to stdout and remembers errors.
#[derive(Debug, Default)]
pub struct TerminalSurface {
    errors: Vec<String>,
    navigated_to: Option<String>,
}

impl TerminalSurface {
    pub fn navigated_to(&self) -> Option<&str> {
        self.navigated_to.as_deref()
    }

    /// Fails if any error notification was shown.
    pub fn finish(self) -> Result<()> {
        if let Some(last) = self.errors.last() {
            bail!("Login failed: {last}");
        }
        Ok(())
    }
}

impl LoginSurface for TerminalSurface {
    fn notify_success(&mut self, message: &str) {
        println!("{message}");
    }

    fn notify_error(&mut self, message: &str) {
        println!("error: {message}");
        self.errors.push(message.to_string());
    }

    fn navigate(&mut self, path: &str, context: Option<NavigationContext>) {
        match context {
            Some(ctx) => println!("navigate {path} phone={}", ctx.phone),
            None => println!("navigate {path}"),
        }
        self.navigated_to = Some(path.to_string());
    }

    fn focus_phone_input(&mut self) {
        debug!("phone input focused");
    }

    fn blur_phone_input(&mut self) {
        debug!("phone input blurred");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reports_last_error() {
        let mut surface = TerminalSurface::default();
        surface.notify_success("SMS Sent.");
        assert!(TerminalSurface::default().finish().is_ok());

        surface.notify_error("first");
        surface.notify_error("second");
        let err = surface.finish().unwrap_err();
        assert_eq!(err.to_string(), "Login failed: second");
    }

    #[test]
    fn test_navigation_is_recorded() {
        let mut surface = TerminalSurface::default();
        surface.navigate("/verify-phone", None);
        assert_eq!(surface.navigated_to(), Some("/verify-phone"));
    }
}
