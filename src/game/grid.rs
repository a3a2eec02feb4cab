use std::ops::Index;
use std::ops::IndexMut;

use crate::env::{v2, Vec2D};

/// Represents a single tile of the board
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Free,
    Wall,
    Food,
    /// Scares all ghosts when eaten
    Capsule,
}

/// The static part of the game board.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn has(&self, p: Vec2D) -> bool {
        p.within(self.width, self.height)
    }

    /// Returns if the cell exists and is not a wall.
    pub fn walkable(&self, p: Vec2D) -> bool {
        self.has(p) && self[p] != Cell::Wall
    }

    /// All positions with the given cell type in row major order.
    pub fn positions(&self, cell: Cell) -> impl Iterator<Item = Vec2D> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &c)| c == cell)
            .map(move |(i, _)| v2((i % width) as _, (i / width) as _))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Index<Vec2D> for Grid {
    type Output = Cell;

    fn index(&self, p: Vec2D) -> &Self::Output {
        assert!(self.has(p));
        &self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl IndexMut<Vec2D> for Grid {
    fn index_mut(&mut self, p: Vec2D) -> &mut Self::Output {
        assert!(self.has(p));
        &mut self.cells[p.x as usize + p.y as usize * self.width]
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {{")?;
        for y in (0..self.height as i16).rev() {
            write!(f, "  ")?;
            for x in 0..self.width as i16 {
                let c = match self[v2(x, y)] {
                    Cell::Free => ' ',
                    Cell::Wall => '%',
                    Cell::Food => '.',
                    Cell::Capsule => 'o',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")?;
        Ok(())
    }
}
