use thiserror::Error;

/// The rows handed to the grid decoder do not form a rectangle.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("grid must have at least one row")]
    NoRows,
    #[error("grid rows must not be empty")]
    EmptyRow,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// The problem text does not follow the generations / dimensions / field layout.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("input must contain at least 3 lines, found {0}")]
    TooFewLines(usize),
    #[error("invalid generation count {0:?}")]
    InvalidGenerations(String),
    #[error("expected width and height, found {0} values")]
    DimensionCount(usize),
    #[error("invalid width or height {0:?}")]
    InvalidDimension(String),
    #[error("field declares {expected} rows but only {found} follow")]
    MissingRows { expected: usize, found: usize },
    #[error("field width {found} does not match the declared width {declared}")]
    WidthMismatch { declared: usize, found: usize },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("invalid field: {0}")]
    Shape(#[from] ShapeError),
}
