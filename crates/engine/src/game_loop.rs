//! One poll iteration at a time: button edges, then gravity.

use crate::core::{Command, GameEngine, GameSnapshot, ShapeSource, SimpleRng};
use crate::types::{ButtonEdges, Progress, GAME_OVER_FLASHES, GAME_OVER_PAUSE_MS, GRAVITY_MS};

/// Loop timing and button behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Gravity runs once this many milliseconds have passed since the last run.
    pub gravity_ms: u64,
    /// Total length of the game-over flash sequence.
    pub game_over_pause_ms: u64,
    /// What the drop button does: `SoftDrop` or `HardDrop`.
    pub drop_command: Command,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            gravity_ms: GRAVITY_MS,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
            drop_command: Command::SoftDrop,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// A command or gravity ran; the board should be drawn again.
    pub redraw: bool,
    pub game_over: bool,
}

/// One picture of the game-over sequence and how long to keep it up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashFrame {
    pub snapshot: GameSnapshot,
    pub hold_ms: u64,
}

pub struct GameLoop<R: ShapeSource = SimpleRng> {
    engine: GameEngine<R>,
    config: LoopConfig,
    last_drop_ms: u64,
}

impl<R: ShapeSource> GameLoop<R> {
    pub fn new(engine: GameEngine<R>, config: LoopConfig, now_ms: u64) -> Self {
        Self {
            engine,
            config,
            last_drop_ms: now_ms,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine<R> {
        &mut self.engine
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Run one iteration.
    ///
    /// Each pressed button is applied once, in the order rotate, left, right,
    /// drop. Gravity follows when more than `gravity_ms` passed since it last
    /// ran. Nothing happens while the game is over.
    pub fn tick(&mut self, now_ms: u64, edges: ButtonEdges) -> TickReport {
        if self.engine.is_game_over() {
            return TickReport {
                redraw: false,
                game_over: true,
            };
        }

        let mut redraw = false;
        if edges.rotate {
            self.engine.apply(Command::Rotate);
            redraw = true;
        }
        if edges.left {
            self.engine.apply(Command::Left);
            redraw = true;
        }
        if edges.right {
            self.engine.apply(Command::Right);
            redraw = true;
        }
        if edges.drop {
            self.engine.apply(self.config.drop_command);
            redraw = true;
        }

        if !self.engine.is_game_over()
            && now_ms.saturating_sub(self.last_drop_ms) > self.config.gravity_ms
        {
            self.last_drop_ms = now_ms;
            self.engine.soft_drop();
            redraw = true;
        }

        TickReport {
            redraw,
            game_over: self.engine.is_game_over(),
        }
    }

    /// Frames for the game-over pause: the checkerboard and the final board,
    /// alternating, together lasting `game_over_pause_ms`.
    pub fn game_over_frames(&self) -> Vec<FlashFrame> {
        let last = self.engine.snapshot();
        let flash = last.with_grid(last.grid.checkerboard());
        let hold_ms = self.config.game_over_pause_ms / GAME_OVER_FLASHES;
        let remainder = self.config.game_over_pause_ms % GAME_OVER_FLASHES;

        (0..GAME_OVER_FLASHES)
            .map(|i| FlashFrame {
                snapshot: if i % 2 == 0 { flash.clone() } else { last.clone() },
                hold_ms: if i + 1 == GAME_OVER_FLASHES {
                    hold_ms + remainder
                } else {
                    hold_ms
                },
            })
            .collect()
    }

    /// Start a new game and restart the gravity timer
    pub fn restart(&mut self, now_ms: u64) -> Progress {
        self.last_drop_ms = now_ms;
        self.engine.new_game()
    }
}
