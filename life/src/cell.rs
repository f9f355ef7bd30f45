/// State of a single square of the field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub const ALIVE_MARKER: char = 'x';
    pub const DEAD_MARKER: char = '.';

    /// Only the alive marker is special, anything else reads as dead.
    pub fn from_char(c: char) -> Self {
        if c == Self::ALIVE_MARKER {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Alive => Self::ALIVE_MARKER,
            Cell::Dead => Self::DEAD_MARKER,
        }
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}
