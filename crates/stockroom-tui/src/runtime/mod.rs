//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - The auth subscription posts `SessionChanged` to the same inbox
//! - Runtime drains `inbox_rx` each frame and feeds the reducer one event
//!   at a time, so completions never interleave
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations

mod handlers;
mod inbox;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use stockroom_core::backend::{AuthGateway, AuthSubscription, ItemStore};
use stockroom_core::config::UiConfig;
use tokio::sync::mpsc;

use crate::credentials::AuthMode;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::TuiTerminal;
use crate::{render, terminal, update};

/// Frame interval while the user is typing or requests are in flight.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Backend collaborators the runtime executes effects against.
pub struct Backends {
    pub gateway: AuthGateway,
    pub store: Arc<dyn ItemStore>,
    pub collection: String,
}

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: TuiTerminal,
    pub state: AppState,
    backends: Backends,
    /// Session listener, held from the start of `run` until it returns.
    subscription: Option<AuthSubscription>,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    idle_tick: Duration,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(settings: UiConfig, backends: Backends) -> Result<Self> {
        // Panic hook goes in BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let idle_tick = settings.tick_interval();
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let now = Instant::now();
        Ok(Self {
            terminal,
            state: AppState::new(settings),
            backends,
            subscription: None,
            inbox_tx,
            inbox_rx,
            idle_tick,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// Returns terminal I/O errors.
    pub fn run(&mut self) -> Result<()> {
        let tx = self.inbox_tx.clone();
        self.subscription = Some(self.backends.gateway.subscribe(move |session| {
            let _ = tx.send(UiEvent::SessionChanged(session));
        }));

        let result = self.event_loop();

        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            // Frame comes first so key handling sees the current size.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; other events batch into it.
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < self.idle_tick;
        let tick_interval = if recent_terminal_activity || self.state.tui.pending_requests() > 0 {
            FRAME_DURATION
        } else {
            self.idle_tick
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick only if there is nothing to process yet.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            // Auth effects
            UiEffect::SignIn {
                req,
                email,
                password,
            } => {
                let gateway = self.backends.gateway.clone();
                self.spawn_effect(move || {
                    handlers::authenticate(gateway, req, AuthMode::SignIn, email, password)
                });
            }
            UiEffect::Register {
                req,
                email,
                password,
            } => {
                let gateway = self.backends.gateway.clone();
                self.spawn_effect(move || {
                    handlers::authenticate(gateway, req, AuthMode::Register, email, password)
                });
            }
            UiEffect::SignOut => {
                // The subscription reports the absent session.
                self.backends.gateway.sign_out();
            }

            // Store effects
            UiEffect::LoadItems { mount, req } => {
                let (store, collection) = self.store();
                self.spawn_effect(move || handlers::load_items(store, collection, mount, req));
            }
            UiEffect::CreateItem { mount, req, fields } => {
                let (store, collection) = self.store();
                self.spawn_effect(move || {
                    handlers::create_item(store, collection, mount, req, fields)
                });
            }
            UiEffect::UpdateItem {
                mount,
                req,
                id,
                fields,
            } => {
                let (store, collection) = self.store();
                self.spawn_effect(move || {
                    handlers::update_item(store, collection, mount, req, id, fields)
                });
            }
            UiEffect::DeleteItem { mount, req, id } => {
                let (store, collection) = self.store();
                self.spawn_effect(move || handlers::delete_item(store, collection, mount, req, id));
            }
        }
    }

    fn store(&self) -> (Arc<dyn ItemStore>, String) {
        (
            Arc::clone(&self.backends.store),
            self.backends.collection.clone(),
        )
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
