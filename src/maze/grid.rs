use super::cell::Cell;

/// Row-major cell storage with fixed dimensions.
#[derive(Debug)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn ravel_index(&self, row: u16, col: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        row as usize * self.width as usize + col as usize
    }

    /// Iterates over all cells in row-major order together with their
    /// (row, column) coordinates.
    pub fn iter(&self) -> impl Iterator<Item = ((u16, u16), Cell)> {
        self.data.iter().enumerate().map(|(i, &cell)| {
            let row = (i / self.width as usize) as u16;
            let col = (i % self.width as usize) as u16;
            ((row, col), cell)
        })
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(row, col)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, (row, col): (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(row, col);
        &mut self.data[idx]
    }
}
