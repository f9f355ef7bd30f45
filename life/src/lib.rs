mod cell;
mod error;
mod grid;
mod problem;
mod rules;
mod torus;


use log::{debug, trace};

pub use crate::{
    cell::Cell,
    error::{FormatError, ParseError, ShapeError},
    grid::Grid,
    problem::Problem,
    rules::transition,
};

impl Grid {
    /// Advances every cell by one generation.
    ///
    /// All neighbour lookups read from `self`, so no cell sees another
    /// cell's next state.
    pub fn step(&self) -> Self {
        Grid::from_fn(self.torus(), |(x, y)| self.next_cell_state(x, y))
    }

    /// Runs `generations` steps. Non-positive counts return an equal grid.
    pub fn evolve(&self, generations: i64) -> Self {
        debug!(
            "evolving {}x{} grid for {} generations",
            self.width(),
            self.height(),
            generations
        );
        (0..generations).fold(self.clone(), |grid, generation| {
            let next = grid.step();
            trace!("generation {}: population {}", generation + 1, next.population());
            next
        })
    }
}
