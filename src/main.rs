//! Terminal 2048 runner (default binary).
//!
//! Reads key presses with crossterm, feeds them to the session, and redraws
//! the framebuffer after every change. Nothing animates, so the loop blocks
//! on input instead of ticking.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_2048::config::GameConfig;
use tui_2048::core::GridSnapshot;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::session::Session;
use tui_2048::telemetry;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;
    telemetry::init_logging(&config)?;

    let mut session = Session::from_config(&config)?;
    info!(
        size = config.size,
        seed = session.engine().seed(),
        "session created"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();

    let engine = session.engine();
    info!(score = engine.score(), moves = engine.moves(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GridSnapshot::default();
    let mut dirty = true;

    loop {
        if dirty {
            session.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    dirty = session.apply(action).needs_redraw();
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
