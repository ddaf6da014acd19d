//! # Application Controller
//!
//! Orchestrates the event loop: polls the event stream, routes key events
//! through the command registry, applies the resulting semantic events to
//! the view model, performs the backend call when an evaluation is
//! requested, and drains view events into selective renders.
//!
//! The backend call is awaited inline, so the loop handles one evaluation
//! to completion before reading further input; together with the view
//! model's in-flight flag this excludes overlapping evaluations by
//! construction.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};

use crate::cmd_args::CommandLineArgs;
use crate::config;
use crate::repl::commands::CommandRegistry;
use crate::repl::events::{CommandEvent, ViewEvent};
use crate::repl::io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
use crate::repl::models::EvalRequest;
use crate::repl::services::{BackendSettings, CalcBackend, HttpBackend};
use crate::repl::view_models::ViewModel;
use crate::repl::views::TapeRenderer;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream, B: CalcBackend> {
    view_model: ViewModel,
    renderer: TapeRenderer<RS>,
    registry: CommandRegistry,
    event_stream: ES,
    backend: B,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<std::io::Stdout>, HttpBackend> {
    /// Production constructor: real terminal streams and the HTTP backend
    /// configured from the command line and environment.
    pub fn new(cmd_args: &CommandLineArgs) -> Result<Self> {
        let endpoint = config::resolve_endpoint(cmd_args.endpoint(), cmd_args.legacy_multiply());
        let backend = HttpBackend::new(&BackendSettings {
            endpoint,
            timeout: Duration::from_secs(cmd_args.timeout_secs()),
            legacy_multiply: cmd_args.legacy_multiply(),
        })?;
        Self::with_parts(
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
            backend,
        )
    }
}

impl<ES: EventStream, RS: RenderStream, B: CalcBackend> AppController<ES, RS, B> {
    /// Dependency-injected constructor used by tests and by `new`
    pub fn with_parts(event_stream: ES, render_stream: RS, backend: B) -> Result<Self> {
        let view_model = ViewModel::new();
        let renderer = TapeRenderer::with_render_stream(render_stream)?;

        let (width, height) = renderer.terminal_size();
        tracing::debug!("terminal size {}x{}", width, height);

        Ok(Self {
            view_model,
            renderer,
            registry: CommandRegistry::new(),
            event_stream,
            backend,
            should_quit: false,
        })
    }

    /// Label the backend endpoint in the status bar
    pub fn set_endpoint_label(&mut self, label: String) {
        self.view_model.set_endpoint_label(label);
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.initialize()?;
        self.renderer.render_full(&self.view_model)?;
        self.view_model.collect_pending_view_events();

        while !self.should_quit {
            if self.view_model.expire_banner_if_due(Instant::now()) {
                tracing::debug!("status banner expired");
            }

            if self.event_stream.poll(POLL_INTERVAL)? {
                match self.event_stream.read()? {
                    Event::Key(key) => self.handle_key_event(key).await?,
                    Event::Resize(width, height) => {
                        self.renderer.update_size(width, height);
                        self.renderer.render_full(&self.view_model)?;
                    }
                    _ => {}
                }
            }

            self.process_view_events()?;
        }

        self.renderer.cleanup()?;
        Ok(())
    }

    /// Process a single key event without running the full loop (also
    /// used by tests)
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Ignore release/repeat events on platforms that report them.
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let events = self.registry.process_event(key, self.view_model.mode());
        for event in events {
            self.apply_command_event(event).await?;
        }
        Ok(())
    }

    async fn apply_command_event(&mut self, event: CommandEvent) -> Result<()> {
        if event == CommandEvent::QuitRequested {
            tracing::info!("quit requested");
            self.should_quit = true;
            return Ok(());
        }

        if let Some(request) = self.view_model.apply(event) {
            self.run_evaluation(request).await?;
        }
        Ok(())
    }

    /// Perform one backend evaluation to completion.
    ///
    /// The status bar is refreshed immediately so the in-flight marker is
    /// visible while the call is pending.
    async fn run_evaluation(&mut self, request: EvalRequest) -> Result<()> {
        self.view_model.begin_evaluation();
        self.process_view_events()?;

        tracing::info!(
            "evaluating {} {} {} (final: {})",
            request.operand_a,
            request.operation.wire_name(),
            request.operand_b,
            request.is_final()
        );

        match self
            .backend
            .evaluate(request.operand_a, request.operation, request.operand_b)
            .await
        {
            Ok(result) => {
                tracing::info!("result: {}", result);
                self.view_model.finish_evaluation(&request, result);
            }
            Err(error) => {
                tracing::warn!("evaluation failed: {}", error);
                self.view_model.report_eval_error(error);
            }
        }
        Ok(())
    }

    /// Drain queued view events into selective renders
    fn process_view_events(&mut self) -> Result<()> {
        let events = self.view_model.collect_pending_view_events();
        if events.is_empty() {
            return Ok(());
        }

        if events.contains(&ViewEvent::FullRedrawRequired) {
            return self.renderer.render_full(&self.view_model);
        }
        for event in events {
            match event {
                ViewEvent::DisplayChanged => self.renderer.render_display(&self.view_model)?,
                ViewEvent::HistoryChanged => self.renderer.render_history(&self.view_model)?,
                ViewEvent::StatusChanged => self.renderer.render_status(&self.view_model)?,
                ViewEvent::FullRedrawRequired => unreachable!("handled above"),
            }
        }
        Ok(())
    }

    /// View model access for tests
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Whether the application is about to exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
