//! Terminal Tetris runner (default binary).
//!
//! Polls the keyboard every tick, feeds button edges and the clock to the game
//! loop and redraws when something changed.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use button_tetris::config::Config;
use button_tetris::core::{GameEngine, GameSnapshot, SimpleRng};
use button_tetris::engine::GameLoop;
use button_tetris::event_log::{EventLog, GameEvent};
use button_tetris::input::{should_quit, ButtonLatch};
use button_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use button_tetris::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env();
    let mut log = EventLog::from_path(config.log_path.as_deref());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.record(&GameEvent::Quit);
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, log: &mut EventLog) -> Result<()> {
    let view = GameView::new(config.glyphs());
    let mut fb = FrameBuffer::new(0, 0);
    let mut latch = ButtonLatch::new();

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let tick = Duration::from_millis(TICK_MS);

    let engine = GameEngine::new(SimpleRng::new(config.seed));
    let mut game = GameLoop::new(engine, config.loop_config(), now_ms());
    let mut games = 1;
    log.record(&GameEvent::NewGame {
        seed: config.seed,
        game: games,
    });

    let mut last_size = (0, 0);
    let mut redraw = true;

    loop {
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        if size != last_size {
            last_size = size;
            term.invalidate();
            redraw = true;
        }
        if redraw {
            draw(term, &view, &mut fb, &game.engine().snapshot(), size)?;
            redraw = false;
        }

        // Drain every key seen during this tick into the latch.
        let started = Instant::now();
        while let Some(timeout) = tick.checked_sub(started.elapsed()) {
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                if should_quit(key) {
                    return Ok(());
                }
                latch.handle_key(key);
            }
        }

        let report = game.tick(now_ms(), latch.take());
        redraw = report.redraw;

        if let Some(ev) = game.engine_mut().take_last_event() {
            log.record(&GameEvent::from(&ev));
        }

        if report.game_over {
            log.record(&GameEvent::GameOver {
                total_lines: game.engine().lines_cleared(),
            });
            for frame in game.game_over_frames() {
                draw(term, &view, &mut fb, &frame.snapshot, last_size)?;
                thread::sleep(Duration::from_millis(frame.hold_ms));
            }
            // Keys pressed during the pause do not carry into the next game.
            while event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if should_quit(key) {
                        return Ok(());
                    }
                }
            }
            latch.take();
            game.restart(now_ms());
            games += 1;
            log.record(&GameEvent::NewGame {
                seed: config.seed,
                game: games,
            });
            redraw = true;
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    fb: &mut FrameBuffer,
    snap: &GameSnapshot,
    (w, h): (u16, u16),
) -> Result<()> {
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}
