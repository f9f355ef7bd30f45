use crate::{cell::Cell, grid::Grid};

/// Birth on three neighbours, survival on two or three.
pub fn transition(cell: Cell, alive_neighbours: usize) -> Cell {
    match (cell, alive_neighbours) {
        (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}

impl Grid {
    /// Live cells among the eight around `(x, y)`, looking across the edges.
    pub fn count_alive_neighbours(&self, x: usize, y: usize) -> usize {
        self.torus()
            .neighbours((x, y))
            .filter(|&p| self.cell(p).is_alive())
            .count()
    }

    pub fn next_cell_state(&self, x: usize, y: usize) -> Cell {
        let current = self.cell((x, y));
        transition(current, self.count_alive_neighbours(x, y))
    }
}
