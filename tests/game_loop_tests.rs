//! Integration tests for the tick loop driven by terminal keys

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use button_tetris::config::Config;
use button_tetris::core::{Command, GameEngine, ScriptedShapes};
use button_tetris::engine::{GameLoop, LoopConfig};
use button_tetris::event_log::{EventLog, GameEvent};
use button_tetris::input::ButtonLatch;
use button_tetris::types::{ButtonEdges, Shape, SPAWN_COL, SPAWN_ROW};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyEventKind::Press)
}

fn scripted_loop(shapes: &[Shape], config: LoopConfig) -> GameLoop<ScriptedShapes> {
    GameLoop::new(GameEngine::new(ScriptedShapes::new(shapes.to_vec())), config, 0)
}

#[test]
fn test_keys_become_one_command_per_tick() {
    let mut game = scripted_loop(&[Shape::T], LoopConfig::default());
    let mut latch = ButtonLatch::new();

    // Two presses and a repeat of the same key within one tick.
    latch.handle_key(press(KeyCode::Left));
    latch.handle_key(press(KeyCode::Char('a')));
    latch.handle_key(key(KeyCode::Left, KeyEventKind::Repeat));
    let report = game.tick(10, latch.take());

    assert!(report.redraw);
    assert_eq!(game.engine().active().unwrap().col, SPAWN_COL - 1);

    let report = game.tick(20, latch.take());
    assert!(!report.redraw);
    assert_eq!(game.engine().active().unwrap().col, SPAWN_COL - 1);
}

#[test]
fn test_release_events_do_nothing() {
    let mut latch = ButtonLatch::new();
    assert!(latch.handle_key(key(KeyCode::Down, KeyEventKind::Release)).is_none());
    assert!(latch.is_idle());
    assert_eq!(latch.take(), ButtonEdges::NONE);
}

#[test]
fn test_commands_run_before_gravity() {
    let mut game = scripted_loop(&[Shape::L], LoopConfig::default());
    let mut latch = ButtonLatch::new();
    latch.handle_key(press(KeyCode::Down));
    latch.handle_key(press(KeyCode::Right));

    game.tick(600, latch.take());

    let piece = game.engine().active().unwrap();
    assert_eq!(piece.col, SPAWN_COL + 1);
    // One row from the drop button and one from gravity.
    assert_eq!(piece.row, SPAWN_ROW + 2);
}

#[test]
fn test_gravity_alone_lands_pieces() {
    let config = LoopConfig {
        gravity_ms: 10,
        ..LoopConfig::default()
    };
    let mut game = scripted_loop(&[Shape::I, Shape::O], config);

    let mut now = 0;
    while game.engine().pieces_spawned() < 2 {
        now += 11;
        game.tick(now, ButtonEdges::NONE);
        assert!(now < 1_000);
    }

    let ev = game.engine_mut().take_last_event().unwrap();
    assert_eq!(ev.shape, Shape::I);
    assert_eq!(game.engine().active().unwrap().shape, Shape::O);
}

#[test]
fn test_full_session_with_config_and_log() {
    let vars = [("TETRIS_DROP", "hard"), ("TETRIS_GAME_OVER_MS", "40")];
    let config = Config::from_lookup(
        |k| vars.iter().find(|(name, _)| *name == k).map(|(_, v)| v.to_string()),
        3,
    );
    let engine = GameEngine::new(ScriptedShapes::repeat(Shape::O));
    let mut game = GameLoop::new(engine, config.loop_config(), 0);
    assert_eq!(game.config().drop_command, Command::HardDrop);

    let mut log = EventLog::to_writer(Vec::new());
    log.record(&GameEvent::NewGame { seed: config.seed, game: 1 });

    let mut now = 0;
    loop {
        now += 10;
        let report = game.tick(now, ButtonEdges::only(button_tetris::types::Button::Drop));
        if let Some(ev) = game.engine_mut().take_last_event() {
            log.record(&GameEvent::from(&ev));
        }
        if report.game_over {
            break;
        }
    }
    log.record(&GameEvent::GameOver {
        total_lines: game.engine().lines_cleared(),
    });

    let frames = game.game_over_frames();
    assert_eq!(frames.iter().map(|f| f.hold_ms).sum::<u64>(), 40);
    game.restart(now);
    assert!(!game.engine().is_game_over());

    let text = String::from_utf8(log.into_inner().unwrap()).unwrap();
    let types: Vec<String> = text
        .lines()
        .map(|l| {
            let value: serde_json::Value = serde_json::from_str(l).unwrap();
            value["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types.first().map(String::as_str), Some("new_game"));
    assert_eq!(types.iter().filter(|t| *t == "locked").count(), 9);
    assert_eq!(types.last().map(String::as_str), Some("game_over"));
}
