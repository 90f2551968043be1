//! RNG module - injected randomness for piece selection
//!
//! The engine never seeds itself: the application hands it a [`ShapeSource`].
//! [`SimpleRng`] draws shapes uniformly; [`ScriptedShapes`] replays a fixed
//! sequence, which keeps games reproducible in tests and benchmarks.

use crate::types::Shape;

/// Source of the shape for each newly spawned piece
pub trait ShapeSource {
    fn next_shape(&mut self) -> Shape;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 plays the same sequence as seed 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl ShapeSource for SimpleRng {
    fn next_shape(&mut self) -> Shape {
        Shape::ALL[self.next_range(Shape::COUNT as u32) as usize]
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of shapes, starting over after the last one
#[derive(Debug, Clone)]
pub struct ScriptedShapes {
    shapes: Vec<Shape>,
    next: usize,
}

impl ScriptedShapes {
    /// Panics when `shapes` is empty.
    pub fn new(shapes: impl Into<Vec<Shape>>) -> Self {
        let shapes = shapes.into();
        assert!(!shapes.is_empty(), "scripted shape list must not be empty");
        Self { shapes, next: 0 }
    }

    /// Always the same shape
    pub fn repeat(shape: Shape) -> Self {
        Self::new(vec![shape])
    }
}

impl ShapeSource for ScriptedShapes {
    fn next_shape(&mut self) -> Shape {
        let shape = self.shapes[self.next];
        self.next = (self.next + 1) % self.shapes.len();
        shape
    }
}
