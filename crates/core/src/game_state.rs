//! Game state module - the engine that plays one game at a time
//!
//! [`GameEngine`] owns the grid and the falling piece. The piece is mirrored
//! into the grid as `Moving` cells after every change, so the grid alone is a
//! complete picture of the board. Rejected moves and rotations are silent:
//! they return `false` and leave everything as it was.

use crate::grid::Grid;
use crate::piece::{occupied_cells, ActivePiece};
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{Cell, Orientation, Progress, Shape};

/// Whether a game is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    GameOver,
}

/// Player commands understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Rotate,
    Left,
    Right,
    SoftDrop,
    HardDrop,
}

/// Emitted once per landed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub shape: Shape,
    /// Rows removed right after this piece settled
    pub lines_cleared: u32,
    /// Counter value after the removal
    pub total_lines: u32,
    /// The following spawn failed
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine<R: ShapeSource = SimpleRng> {
    grid: Grid,
    active: Option<ActivePiece>,
    status: GameStatus,
    rng: R,
    /// Successful spawns in the current game.
    pieces_spawned: u32,
    /// Last landing (consumed by observers).
    last_event: Option<LockEvent>,
}

impl<R: ShapeSource> GameEngine<R> {
    /// Create an engine and start the first game
    pub fn new(rng: R) -> Self {
        let mut engine = Self {
            grid: Grid::new(),
            active: None,
            status: GameStatus::Active,
            rng,
            pieces_spawned: 0,
            last_event: None,
        };
        engine.new_game();
        engine
    }

    /// Clear the board and counter, then spawn the first piece
    pub fn new_game(&mut self) -> Progress {
        self.grid.reset();
        self.active = None;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.status = GameStatus::Active;
        self.spawn()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for setting up positions.
    ///
    /// Writing `Moving` cells or touching the border through this breaks the
    /// engine's bookkeeping; only place `Empty` and `Settled` cells.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn lines_cleared(&self) -> u32 {
        self.grid.lines_cleared()
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take the last landing event, if any
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Read-only grid copy for the renderer
    pub fn render_snapshot(&self) -> Grid {
        self.grid.render_snapshot()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.render_snapshot(),
            lines: self.grid.lines_cleared(),
            game_over: self.is_game_over(),
        }
    }

    /// Would a piece of `shape` in `orientation` at `(row, col)` fit?
    ///
    /// Every cell must be inside the interior and either empty or part of the
    /// moving piece itself.
    pub fn fits(&self, shape: Shape, orientation: Orientation, row: i8, col: i8) -> bool {
        let Some(cells) = occupied_cells(shape, orientation, row, col) else {
            return false;
        };
        cells.iter().all(|&(r, c)| {
            self.grid.in_bounds_interior(r, c)
                && matches!(self.grid.get(r, c), Ok(Cell::Empty | Cell::Moving(_)))
        })
    }

    fn piece_fits(&self, piece: &ActivePiece) -> bool {
        self.fits(piece.shape, piece.orientation, piece.row, piece.col)
    }

    /// Pick a random shape and place it at the spawn anchor.
    ///
    /// A piece that is still falling is settled where it is first. When the
    /// new piece does not fit the game is over and the grid is left untouched.
    pub fn spawn(&mut self) -> Progress {
        self.fix();
        let piece = ActivePiece::spawn(self.rng.next_shape());
        if !self.piece_fits(&piece) {
            self.status = GameStatus::GameOver;
            return Progress::GameOver;
        }
        self.active = Some(piece);
        self.pieces_spawned += 1;
        self.update_field();
        Progress::Continue
    }

    /// Move the piece by `(dr, dc)` if the target fits
    pub fn try_move(&mut self, dr: i8, dc: i8) -> bool {
        self.try_replace(|piece| piece.shifted(dr, dc))
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Turn the piece in place to its next orientation if that fits
    pub fn rotate(&mut self) -> bool {
        self.try_replace(|piece| Some(piece.rotated()))
    }

    fn try_replace(&mut self, change: impl FnOnce(&ActivePiece) -> Option<ActivePiece>) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(piece) = self.active else {
            return false;
        };
        let Some(candidate) = change(&piece) else {
            return false;
        };
        if !self.piece_fits(&candidate) {
            return false;
        }
        self.active = Some(candidate);
        self.update_field();
        true
    }

    /// Redraw the moving overlay: old moving cells go, the current piece is tagged
    pub fn update_field(&mut self) {
        self.grid.clear_moving();
        if let Some(piece) = self.active {
            self.paint(&piece, Cell::Moving(piece.shape));
        }
    }

    /// Settle the falling piece where it is; it stops being the active piece
    pub fn fix(&mut self) {
        if let Some(piece) = self.active.take() {
            self.paint(&piece, Cell::Settled(piece.shape));
        }
    }

    fn paint(&mut self, piece: &ActivePiece, cell: Cell) {
        let cells = piece.cells();
        debug_assert!(cells.is_some(), "piece cells out of coordinate range: {:?}", piece);
        for (r, c) in cells.into_iter().flatten() {
            let written = self.grid.set(r, c, cell);
            debug_assert!(written.is_ok(), "piece cell outside the field: {:?}", written);
        }
    }

    /// One row down; when blocked, the piece lands and the next one spawns
    pub fn soft_drop(&mut self) -> Progress {
        if self.is_game_over() {
            return Progress::GameOver;
        }
        if self.try_move(1, 0) {
            return Progress::Continue;
        }
        self.land()
    }

    /// Down as far as possible, then land and spawn the next piece
    pub fn hard_drop(&mut self) -> Progress {
        if self.is_game_over() {
            return Progress::GameOver;
        }
        while self.try_move(1, 0) {}
        self.land()
    }

    fn land(&mut self) -> Progress {
        let Some(piece) = self.active else {
            return self.spawn();
        };
        self.fix();
        let cleared = self.grid.clear_lines().len() as u32;
        let progress = self.spawn();
        self.last_event = Some(LockEvent {
            shape: piece.shape,
            lines_cleared: cleared,
            total_lines: self.grid.lines_cleared(),
            game_over: progress == Progress::GameOver,
        });
        progress
    }

    /// Apply a player command; everything is a no-op once the game is over
    pub fn apply(&mut self, command: Command) -> Progress {
        match command {
            Command::Rotate => {
                self.rotate();
            }
            Command::Left => {
                self.move_left();
            }
            Command::Right => {
                self.move_right();
            }
            Command::SoftDrop => return self.soft_drop(),
            Command::HardDrop => return self.hard_drop(),
        }
        if self.is_game_over() {
            Progress::GameOver
        } else {
            Progress::Continue
        }
    }
}

impl Default for GameEngine<SimpleRng> {
    fn default() -> Self {
        Self::new(SimpleRng::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedShapes;
    use crate::types::{BOARD_HEIGHT, SPAWN_COL, SPAWN_ROW};

    fn engine_with(shapes: &[Shape]) -> GameEngine<ScriptedShapes> {
        GameEngine::new(ScriptedShapes::new(shapes.to_vec()))
    }

    fn moving_cells(grid: &Grid) -> Vec<(i8, i8)> {
        let mut out = Vec::new();
        for (r, row) in grid.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_moving() {
                    out.push((r as i8, c as i8));
                }
            }
        }
        out
    }

    fn assert_overlay_matches(engine: &GameEngine<ScriptedShapes>) {
        let mut expected = engine
            .active()
            .and_then(|p| p.cells())
            .map(|cells| cells.to_vec())
            .unwrap_or_default();
        expected.sort();
        assert_eq!(moving_cells(engine.grid()), expected);
    }

    #[test]
    fn test_new_engine_spawns_first_piece() {
        let engine = engine_with(&[Shape::T]);
        let piece = engine.active().unwrap();

        assert_eq!(engine.status(), GameStatus::Active);
        assert_eq!(piece.shape, Shape::T);
        assert_eq!((piece.row, piece.col), (SPAWN_ROW, SPAWN_COL));
        assert_eq!(engine.pieces_spawned(), 1);
        assert_overlay_matches(&engine);
    }

    #[test]
    fn test_move_updates_overlay() {
        let mut engine = engine_with(&[Shape::O]);
        assert!(engine.move_left());
        assert!(engine.try_move(1, 0));
        assert_eq!(engine.active().unwrap().col, SPAWN_COL - 1);
        assert_eq!(engine.active().unwrap().row, SPAWN_ROW + 1);
        assert_overlay_matches(&engine);
    }

    #[test]
    fn test_move_into_wall_is_rejected() {
        let mut engine = engine_with(&[Shape::I]);
        // I spans columns 4..=7; three steps right reach the wall.
        assert!(engine.move_right());
        assert!(engine.move_right());
        assert!(engine.move_right());
        let before = engine.active();
        assert!(!engine.move_right());
        assert_eq!(engine.active(), before);
        assert_overlay_matches(&engine);
    }

    #[test]
    fn test_zero_move_is_identity() {
        let mut engine = engine_with(&[Shape::S]);
        let grid = engine.grid().clone();
        let piece = engine.active();
        assert!(engine.try_move(0, 0));
        assert_eq!(engine.grid(), &grid);
        assert_eq!(engine.active(), piece);
    }

    #[test]
    fn test_rotate_blocked_by_settled_block() {
        let mut engine = engine_with(&[Shape::I]);
        engine.try_move(3, 0);
        // Vertical I at this anchor covers column 5 in rows 4..=7.
        engine.grid_mut().set(6, 5, Cell::Settled(Shape::O)).unwrap();

        let before = engine.active();
        assert!(!engine.rotate());
        assert_eq!(engine.active(), before);
        assert_eq!(engine.active().unwrap().orientation, Orientation(0));
        assert_overlay_matches(&engine);
    }

    #[test]
    fn test_rotate_cycles_period() {
        let mut engine = engine_with(&[Shape::T]);
        engine.try_move(2, 0);
        for expected in [1, 2, 3, 0] {
            assert!(engine.rotate());
            assert_eq!(engine.active().unwrap().orientation, Orientation(expected));
            assert_overlay_matches(&engine);
        }
    }

    #[test]
    fn test_soft_drop_lands_and_spawns_next() {
        let mut engine = engine_with(&[Shape::O, Shape::I]);
        let mut steps = 0;
        while engine.active().unwrap().shape == Shape::O {
            assert_eq!(engine.soft_drop(), Progress::Continue);
            steps += 1;
        }
        // O covers two rows, so it falls BOARD_HEIGHT - 2 rows and then lands.
        assert_eq!(steps, BOARD_HEIGHT as usize - 1);
        assert_eq!(engine.pieces_spawned(), 2);
        assert_eq!(engine.grid().filled_cells(), 8);
        assert_overlay_matches(&engine);

        let event = engine.take_last_event().unwrap();
        assert_eq!(event.shape, Shape::O);
        assert_eq!(event.lines_cleared, 0);
        assert!(!event.game_over);
        assert!(engine.take_last_event().is_none());
    }

    #[test]
    fn test_hard_drop_settles_at_lowest_fit() {
        let mut engine = engine_with(&[Shape::I, Shape::O]);
        assert_eq!(engine.hard_drop(), Progress::Continue);

        let bottom = BOARD_HEIGHT as i8;
        for c in 4..=7 {
            assert_eq!(engine.grid().get(bottom, c), Ok(Cell::Settled(Shape::I)));
        }
        assert_eq!(engine.pieces_spawned(), 2);
        assert_eq!(engine.active().unwrap().shape, Shape::O);
    }

    #[test]
    fn test_full_row_is_cleared_on_landing() {
        let mut engine = engine_with(&[Shape::I]);
        let bottom = BOARD_HEIGHT as i8;
        for c in 1..=10 {
            if !(4..=7).contains(&c) {
                engine.grid_mut().set(bottom, c, Cell::Settled(Shape::J)).unwrap();
            }
        }
        engine.grid_mut().set(bottom - 1, 1, Cell::Settled(Shape::L)).unwrap();

        assert_eq!(engine.hard_drop(), Progress::Continue);

        assert_eq!(engine.lines_cleared(), 1);
        assert_eq!(engine.grid().get(bottom, 1), Ok(Cell::Settled(Shape::L)));
        let event = engine.take_last_event().unwrap();
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.total_lines, 1);
    }

    #[test]
    fn test_blocked_spawn_ends_game_without_touching_grid() {
        let mut engine = engine_with(&[Shape::O]);
        engine.hard_drop();
        engine.fix();
        engine.grid_mut().set(SPAWN_ROW, SPAWN_COL + 1, Cell::Settled(Shape::T)).unwrap();
        let grid = engine.grid().clone();

        assert_eq!(engine.spawn(), Progress::GameOver);
        assert_eq!(engine.status(), GameStatus::GameOver);
        assert_eq!(engine.grid(), &grid);
    }

    #[test]
    fn test_spawn_settles_a_piece_still_falling() {
        let mut engine = engine_with(&[Shape::T, Shape::O]);
        engine.try_move(5, 0);
        let t = engine.active().unwrap();

        assert_eq!(engine.spawn(), Progress::Continue);

        for (r, c) in t.cells().unwrap() {
            assert_eq!(engine.grid().get(r, c), Ok(Cell::Settled(Shape::T)));
        }
        assert_eq!(engine.active().unwrap().shape, Shape::O);
        assert_eq!(engine.grid().filled_cells(), 8);
        assert_eq!(engine.pieces_spawned(), 2);
        assert_overlay_matches(&engine);
    }

    #[test]
    fn test_commands_are_noops_after_game_over() {
        let mut engine = engine_with(&[Shape::I]);
        // Stack vertical pieces until the spawn area is blocked.
        let mut guard = 0;
        while engine.hard_drop() == Progress::Continue {
            guard += 1;
            assert!(guard < 200);
        }
        assert!(engine.is_game_over());
        assert!(engine.take_last_event().unwrap().game_over);

        let grid = engine.grid().clone();
        assert!(!engine.rotate());
        assert!(!engine.move_left());
        assert!(!engine.try_move(0, 0));
        assert_eq!(engine.soft_drop(), Progress::GameOver);
        assert_eq!(engine.hard_drop(), Progress::GameOver);
        assert_eq!(engine.apply(Command::Right), Progress::GameOver);
        assert_eq!(engine.grid(), &grid);
        assert!(moving_cells(engine.grid()).is_empty());
    }

    #[test]
    fn test_new_game_restarts_after_game_over() {
        let mut engine = engine_with(&[Shape::I]);
        while engine.hard_drop() == Progress::Continue {}

        assert_eq!(engine.new_game(), Progress::Continue);
        assert_eq!(engine.status(), GameStatus::Active);
        assert_eq!(engine.lines_cleared(), 0);
        assert_eq!(engine.pieces_spawned(), 1);
        assert_eq!(engine.grid().filled_cells(), 4);
        assert_overlay_matches(&engine);
    }
}
