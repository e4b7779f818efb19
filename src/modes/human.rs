use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameError, GameResult, Territory};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{PixelCanvas, Renderer};

/// Keyboard-driven play in the terminal.
///
/// Acts as the scheduler for the territory: it calls `update` once per tick
/// until a tick fails, then shows the game over screen and waits for the
/// player to start another session.
pub struct HumanMode {
    config: GameConfig,
    territory: Territory<PixelCanvas>,
    game_over: Option<GameError>,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let territory = new_territory(&config).context("Failed to set up the territory")?;

        Ok(Self {
            config,
            territory,
            game_over: None,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.config.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        info!(
            "game loop started, ticking every {:?}",
            self.config.tick_interval()
        );

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.game_over.is_none() {
                        self.update_game();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.territory,
                            &self.metrics,
                            self.game_over.as_ref(),
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("quitting after {} games", self.metrics.games_played);
        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(input) => {
                    // Last key before the tick wins
                    if self.game_over.is_none() {
                        self.territory.steer(input);
                    }
                }
                KeyAction::Play => {
                    if self.game_over.is_some() {
                        self.start_new_game()?;
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    /// Run one tick. A failed tick ends the session and stops further ticks.
    fn update_game(&mut self) {
        match self.territory.update() {
            Ok(tick) => self.metrics.on_tick(tick),
            Err(err) => {
                info!("game over with score {}: {}", self.territory.score(), err);
                self.metrics.on_session_end(self.territory.score());
                self.game_over = Some(err);
            }
        }
    }

    fn start_new_game(&mut self) -> Result<()> {
        self.territory = new_territory(&self.config).context("Failed to set up the territory")?;
        self.game_over = None;
        self.metrics.on_session_start();
        info!("new game started");
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn new_territory(config: &GameConfig) -> GameResult<Territory<PixelCanvas>> {
    let canvas = PixelCanvas::new(config.surface_width, config.surface_height);
    Territory::new(config.clone(), canvas)
}
