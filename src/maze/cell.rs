use crossterm::style::{Color, Stylize};

use std::fmt;

/// One cell of the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Impassable wall.
    Wall,
    /// Open floor.
    Open,
    /// The start cell. Exactly one is expected in a well-formed maze.
    Start,
    /// The goal cell. Exactly one is expected in a well-formed maze.
    Goal,
}

impl Cell {
    /// The width of each cell when rendered to the terminal, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    /// The character this cell is written as in the maze text format.
    pub const fn as_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Start => 'A',
            Cell::Goal => 'B',
        }
    }

    /// Parses one maze text character. Returns `None` for characters outside
    /// the `#`, ` `, `A`, `B` alphabet.
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Open),
            'A' => Some(Cell::Start),
            'B' => Some(Cell::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Cell::Wall => "⬛".with(Color::White),
            Cell::Open => "  ".with(Color::Reset),
            Cell::Start => "🟥".with(Color::Red),
            Cell::Goal => "🟩".with(Color::Green),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Cell::CELL_WIDTH as usize,
                "Each cell must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn test_char_round_trip() {
        for cell in [Cell::Wall, Cell::Open, Cell::Start, Cell::Goal] {
            assert_eq!(Cell::from_char(cell.as_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn test_rendered_cells_are_two_columns_wide() {
        for glyph in ["⬛", "  ", "🟥", "🟩", "🟨"] {
            assert_eq!(glyph.width(), Cell::CELL_WIDTH as usize);
        }
    }
}
