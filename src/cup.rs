//! Cup (well) state: settled cells, line detection and removal, overflow check.

use crate::figure::FigureKind;
use std::collections::VecDeque;

/// One cell of the cup. `Empty` and `Shadow` are not filled; only `Settled`
/// counts towards complete lines and the game-over check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Empty,
    /// Projection of where the falling figure would land. Render-only; never
    /// written into the cup.
    Shadow,
    Settled(FigureKind),
}

impl CellState {
    #[inline]
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Settled(_))
    }
}

/// Fixed-size grid of settled cells. rows[0] is the top; rows[height-1] is the
/// floor-adjacent row. Out-of-bounds below/left/right is a boundary condition,
/// not stored rows.
#[derive(Debug, Clone)]
pub struct Cup {
    width: usize,
    height: usize,
    rows: VecDeque<Vec<CellState>>,
}

impl Cup {
    pub fn new(width: u16, height: u16) -> Self {
        let (w, h) = (width as usize, height as usize);
        let rows = (0..h).map(|_| vec![CellState::Empty; w]).collect();
        Self {
            width: w,
            height: h,
            rows,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn set(&mut self, x: usize, y: usize, cell: CellState) {
        if x < self.width {
            if let Some(row) = self.rows.get_mut(y) {
                row[x] = cell;
            }
        }
    }

    /// Game-over predicate: any settled cell in the top row. Evaluated after a
    /// landed figure has merged, before the next spawn.
    pub fn is_top_row_filled(&self) -> bool {
        self.rows
            .front()
            .is_some_and(|row| row.iter().any(|c| c.is_filled()))
    }

    /// Remove every complete row. Each removal shifts the rows above it down by
    /// one and inserts a fresh empty row at the top, independently of any other
    /// complete row in the same pass. Returns the number of rows removed.
    pub fn scan_and_clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..self.height {
            if self.rows[y].iter().all(|c| c.is_filled()) {
                self.rows.remove(y);
                self.rows.push_front(vec![CellState::Empty; self.width]);
                cleared += 1;
            }
        }
        cleared
    }
}
