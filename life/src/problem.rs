use std::str::FromStr;

use itertools::Itertools;

use crate::{
    error::{FormatError, ParseError},
    grid::Grid,
};

/// A decoded input document: how many generations to run on which field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// Not validated: zero or negative counts run no generations at all.
    /// Parsed as a whole integer; trailing text such as `3abc` is rejected.
    pub generations: i64,
    pub width: usize,
    pub height: usize,
    pub grid: Grid,
}

impl Problem {
    pub fn solve(&self) -> Grid {
        self.grid.evolve(self.generations)
    }
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), FormatError> {
    let tokens = line.split_whitespace().collect_vec();
    let &[width, height] = tokens.as_slice() else {
        return Err(FormatError::DimensionCount(tokens.len()));
    };
    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| FormatError::InvalidDimension(token.to_owned()))
    };
    Ok((parse(width)?, parse(height)?))
}

impl FromStr for Problem {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.trim().lines().collect_vec();
        if lines.len() < 3 {
            return Err(FormatError::TooFewLines(lines.len()).into());
        }

        let generations = lines[0].trim();
        let generations = generations
            .parse::<i64>()
            .map_err(|_| FormatError::InvalidGenerations(generations.to_owned()))?;
        let (width, height) = parse_dimensions(lines[1])?;

        // Anything after the declared rows is ignored.
        let field = &lines[2..];
        if field.len() < height {
            return Err(FormatError::MissingRows {
                expected: height,
                found: field.len(),
            }
            .into());
        }
        let grid = Grid::decode(&field[..height])?;
        if grid.width() != width {
            return Err(FormatError::WidthMismatch {
                declared: width,
                found: grid.width(),
            }
            .into());
        }

        Ok(Self {
            generations,
            width,
            height,
            grid,
        })
    }
}
