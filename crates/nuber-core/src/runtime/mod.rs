//! Login runtime - owns the session, executes effects, drains the inbox.
//!
//! This is the boundary where side effects happen. The reducer stays pure
//! and produces effects; this module executes them.
//!
//! Every spawned request and timer runs under a child of the runtime's root
//! `CancellationToken`. Shutting down or dropping the runtime cancels the
//! root, so nothing scheduled by a session outlives it.
//!
//! Structure:
//! - `mod.rs`: Core runtime (LoginRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers.rs`: Effect handler implementations

mod handlers;
mod inbox;

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use inbox::{LoginEventReceiver, LoginEventSender};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::common::TimerId;
use crate::config::Config;
use crate::effects::LoginEffect;
use crate::events::LoginEvent;
use crate::services::{LoginServices, LoginSurface};
use crate::state::LoginSession;
use crate::update;

/// Runtime for one login screen.
pub struct LoginRuntime<S: LoginSurface> {
    session: LoginSession,
    config: Config,
    services: Arc<dyn LoginServices>,
    surface: S,
    /// Inbox sender - handlers send events here.
    inbox_tx: LoginEventSender,
    /// Inbox receiver - runtime drains this.
    inbox_rx: LoginEventReceiver,
    /// Root of every task this session spawns.
    cancel: CancellationToken,
    /// Sleep tokens of scheduled timers, for targeted cancellation.
    timer_tokens: HashMap<TimerId, CancellationToken>,
}

impl<S: LoginSurface> LoginRuntime<S> {
    /// Mounts a fresh login session.
    pub fn new(config: Config, services: Arc<dyn LoginServices>, surface: S) -> Self {
        let session = LoginSession::new(config.default_country_code.clone());
        let (inbox_tx, inbox_rx) = inbox::channel();
        Self {
            session,
            config,
            services,
            surface,
            inbox_tx,
            inbox_rx,
            cancel: CancellationToken::new(),
            timer_tokens: HashMap::new(),
        }
    }

    pub fn session(&self) -> &LoginSession {
        &self.session
    }

    /// Feeds one event through the reducer and executes its effects.
    pub fn dispatch(&mut self, event: LoginEvent) {
        if let LoginEvent::TimerFired(timer) = &event {
            self.timer_tokens.remove(timer);
        }
        let effects = update::update(&mut self.session, &self.config, event);
        self.execute_effects(effects);
    }

    /// Waits for the next async result and dispatches it.
    ///
    /// Returns `false` if the runtime has been shut down.
    pub async fn process_next(&mut self) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        tokio::select! {
            () = self.cancel.cancelled() => false,
            event = self.inbox_rx.recv() => match event {
                Some(event) => {
                    self.dispatch(event);
                    true
                }
                None => false,
            },
        }
    }

    /// Processes results until no request is in flight and no timer is pending.
    pub async fn run_until_idle(&mut self) {
        while !self.session.is_idle() {
            if !self.process_next().await {
                break;
            }
        }
    }

    /// Unmounts the session: cancels every timer and in-flight request.
    pub fn shutdown(&mut self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let effects = update::teardown(&mut self.session);
        self.execute_effects(effects);
        self.cancel.cancel();
        info!("login session torn down");
    }

    /// Shuts down and hands back the surface.
    pub fn into_surface(mut self) -> S
    where
        S: Default,
    {
        self.shutdown();
        std::mem::take(&mut self.surface)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<LoginEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns `fut` under the session token and sends its event to the inbox.
    fn spawn_effect<Fut>(&self, cancel: CancellationToken, fut: Fut)
    where
        Fut: Future<Output = LoginEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = cancel.cancelled() => {}
                event = fut => {
                    let _ = tx.send(event);
                }
            }
        });
    }

    fn execute_effect(&mut self, effect: LoginEffect) {
        match effect {
            // Surface effects (inline)
            LoginEffect::NotifySuccess { message } => self.surface.notify_success(&message),
            LoginEffect::NotifyError { message } => self.surface.notify_error(&message),
            LoginEffect::Navigate { path, context } => {
                info!(path = %path, "navigating");
                self.surface.navigate(&path, context);
            }
            LoginEffect::FocusPhoneInput => self.surface.focus_phone_input(),
            LoginEffect::BlurPhoneInput => self.surface.blur_phone_input(),

            // Service effects
            LoginEffect::RequestPhoneSignIn { task, phone } => {
                let services = Arc::clone(&self.services);
                self.spawn_effect(
                    self.cancel.child_token(),
                    handlers::phone_sign_in(services, task, phone),
                );
            }
            LoginEffect::ConnectFederated { task, request } => {
                let services = Arc::clone(&self.services);
                self.spawn_effect(
                    self.cancel.child_token(),
                    handlers::connect_federated(services, task, request),
                );
            }
            LoginEffect::LogUserIn { task, token } => {
                let services = Arc::clone(&self.services);
                self.spawn_effect(
                    self.cancel.child_token(),
                    handlers::log_user_in(services, task, token),
                );
            }

            // Timer effects
            LoginEffect::Schedule { timer, after } => {
                debug!(timer = timer.0, after_ms = after.as_millis() as u64, "timer scheduled");
                let token = self.cancel.child_token();
                self.timer_tokens.insert(timer, token.clone());
                self.spawn_effect(token, handlers::timer(timer, after));
            }
            LoginEffect::CancelTimer { timer } => {
                if let Some(token) = self.timer_tokens.remove(&timer) {
                    debug!(timer = timer.0, "timer cancelled");
                    token.cancel();
                }
            }
        }
    }
}

impl<S: LoginSurface> Drop for LoginRuntime<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
