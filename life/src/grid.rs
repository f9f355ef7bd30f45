use std::{
    fmt::{Display, Write},
    slice::Chunks,
    str::FromStr,
};

use itertools::Itertools;

use crate::{cell::Cell, error::ShapeError, torus::Torus};

/// A rectangular field of cells stored row by row.
///
/// A grid is never modified once built: stepping produces a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    torus: Torus,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from text rows, one row per line.
    ///
    /// Fails when there are no rows, when the first row is empty, or when a
    /// row is not as long as the first one.
    pub fn decode<I>(lines: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut lines = lines.into_iter().peekable();
        let width = match lines.peek() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(ShapeError::NoRows),
        };
        if width == 0 {
            return Err(ShapeError::EmptyRow);
        }
        let mut cells = vec![];
        let mut height = 0;
        for (row, line) in lines.enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars().map(Cell::from_char));
            height += 1;
        }
        Ok(Self {
            torus: Torus::new(width, height),
            cells,
        })
    }

    pub fn encode(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_char()).collect())
            .collect()
    }

    pub fn width(&self) -> usize {
        self.torus.width
    }

    pub fn height(&self) -> usize {
        self.torus.height
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width() && y < self.height() {
            Some(self.cells[self.torus.index((x, y))])
        } else {
            None
        }
    }

    pub fn rows(&self) -> Chunks<'_, Cell> {
        self.cells.chunks(self.torus.width)
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

impl Grid {
    /// Fills a grid of the given shape, visiting cells in row-major order.
    pub(crate) fn from_fn(torus: Torus, mut f: impl FnMut((usize, usize)) -> Cell) -> Self {
        let cells = (0..torus.height)
            .cartesian_product(0..torus.width)
            .map(|(y, x)| f((x, y)))
            .collect_vec();
        debug_assert_eq!(cells.len(), torus.len());
        Self { torus, cells }
    }

    pub(crate) fn torus(&self) -> Torus {
        self.torus
    }

    /// Looks up a cell, wrapping out-of-range coordinates.
    pub(crate) fn cell(&self, p: (usize, usize)) -> Cell {
        self.cells[self.torus.index(self.torus.reduce(p))]
    }
}

impl FromStr for Grid {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::decode(s.lines())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.to_char())?;
            }
        }
        Ok(())
    }
}
