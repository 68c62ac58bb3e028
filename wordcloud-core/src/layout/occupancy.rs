// Spatial hash over placed label boxes.
//
// Each spiral trial has to be tested against every label already on the
// canvas. Bucketing the boxes by grid cell keeps that to the handful of
// labels near the candidate.

use std::collections::{HashMap, HashSet};

use super::Bounds;

/// Cell edge in canvas percent. Roughly one short label wide.
const DEFAULT_CELL_SIZE: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct Occupancy {
    cell_size: f64,
    /// Placed boxes, in insertion order.
    boxes: Vec<Bounds>,
    /// Cell coordinates -> indices into `boxes`.
    cells: HashMap<(i32, i32), Vec<usize>>,
}

impl Default for Occupancy {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE)
    }
}

impl Occupancy {
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size: if cell_size > 0.0 { cell_size } else { DEFAULT_CELL_SIZE },
            boxes: Vec::new(),
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, v: f64) -> i32 {
        (v / self.cell_size).floor() as i32
    }

    /// Every cell the box touches, edges inclusive.
    fn cell_range(&self, b: &Bounds) -> Vec<(i32, i32)> {
        let (x0, x1) = (self.cell_of(b.min_x), self.cell_of(b.max_x));
        let (y0, y1) = (self.cell_of(b.min_y), self.cell_of(b.max_y));

        let mut cells = Vec::new();
        for cx in x0..=x1 {
            for cy in y0..=y1 {
                cells.push((cx, cy));
            }
        }
        cells
    }

    pub fn insert(&mut self, b: Bounds) {
        let idx = self.boxes.len();
        self.boxes.push(b);
        for cell in self.cell_range(&b) {
            self.cells.entry(cell).or_default().push(idx);
        }
    }

    /// Whether `b` strictly overlaps any stored box.
    ///
    /// Two boxes that overlap share interior area, so they always share a cell;
    /// the answer is the same as testing every stored box.
    pub fn overlaps_any(&self, b: &Bounds) -> bool {
        let mut seen = HashSet::new();
        for cell in self.cell_range(b) {
            let Some(indices) = self.cells.get(&cell) else {
                continue;
            };
            for &idx in indices {
                if seen.insert(idx) && b.overlaps(&self.boxes[idx]) {
                    return true;
                }
            }
        }
        false
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
