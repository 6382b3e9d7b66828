//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The board is
//! redrawn from a fresh engine snapshot after every effective action.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::config::AppConfig;
use tui_2048::core::{GameSnapshot, GridEngine};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::session::apply_action;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init_file(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut engine = GridEngine::new(config.size, config.seed);
    engine.start();
    info!(seed = config.seed, size = config.size.get(), "game started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        if dirty {
            engine.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Nothing animates, so block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = engine.score(), moves = engine.moves(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty = apply_action(&mut engine, action);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
