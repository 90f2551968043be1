use crate::grid::Grid;

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub lines: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    /// The same frame with a different board picture
    pub fn with_grid(&self, grid: Grid) -> Self {
        Self {
            grid,
            lines: self.lines,
            game_over: self.game_over,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: Grid::new(),
            lines: 0,
            game_over: false,
        }
    }
}
