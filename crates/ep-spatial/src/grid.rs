//! Uniform grid over agent positions.
//!
//! # Data layout
//!
//! Cells are numbered row-major (`row * cols + col`).  Agent ids are stored
//! in **Compressed Sparse Row (CSR)** form: the ids inside cell `c` occupy
//!
//! ```text
//! entries[ cell_start[c] .. cell_start[c+1] ]
//! ```
//!
//! The index is derived data.  It is rebuilt wholesale from positions with a
//! counting sort (O(n + cells)) and never updated incrementally, so it can
//! not drift out of sync with the agents it describes.  Within a cell, ids
//! keep the order they were supplied in, which makes query results
//! deterministic.
//!
//! Points outside the grid bounds are clamped into the nearest edge cell.

use ep_core::{AgentId, Bounds, Point};

use crate::{SpatialError, SpatialResult};

/// Upper bound on cells per axis.  Very small radii over a large world
/// would otherwise allocate an unbounded grid.
const MAX_CELLS_PER_AXIS: f64 = 256.0;

pub struct SpatialIndex {
    bounds:    Bounds,
    cell_size: f64,
    cols:      usize,
    rows:      usize,

    // ── CSR storage ───────────────────────────────────────────────────────
    /// Row pointer.  Length = `cols * rows + 1`.
    cell_start: Vec<u32>,
    /// Agent ids sorted by cell.
    entries: Vec<AgentId>,

    /// Scratch: `(cell, id)` per inserted agent, reused across rebuilds.
    scratch: Vec<(u32, AgentId)>,
}

impl SpatialIndex {
    /// An empty grid over `bounds`.
    ///
    /// The effective cell size is `max(cell_size, extent / 256)`, so a
    /// cell is never smaller than the requested size.
    pub fn new(bounds: Bounds, cell_size: f64) -> SpatialResult<Self> {
        if !(cell_size > 0.0 && cell_size.is_finite()) {
            return Err(SpatialError::InvalidCellSize(cell_size));
        }
        let (width, height) = (bounds.width(), bounds.height());
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(SpatialError::EmptyBounds);
        }

        let cell_size = cell_size.max(width.max(height) / MAX_CELLS_PER_AXIS);
        let cols = ((width / cell_size).ceil() as usize).max(1);
        let rows = ((height / cell_size).ceil() as usize).max(1);

        Ok(Self {
            bounds,
            cell_size,
            cols,
            rows,
            cell_start: vec![0; cols * rows + 1],
            entries: Vec::new(),
            scratch: Vec::new(),
        })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// `(cols, rows)`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of indexed agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ring width in cells that covers every point within `radius` of a
    /// query point.
    pub fn cells_for(&self, radius: f64) -> u32 {
        (radius / self.cell_size).ceil().max(1.0) as u32
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Replace the contents with `items`.
    ///
    /// # Panics
    /// Panics on a non-finite coordinate.  Positions come from the
    /// integrator; a NaN there is a bug upstream, not a recoverable input.
    pub fn rebuild<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = (AgentId, Point)>,
    {
        self.scratch.clear();
        for (id, p) in items {
            assert!(p.is_finite(), "non-finite position {p} for {id}");
            let (col, row) = self.cell_of(p);
            self.scratch.push(((row * self.cols + col) as u32, id));
        }

        // Counting sort by cell.
        self.cell_start.iter_mut().for_each(|c| *c = 0);
        for &(cell, _) in &self.scratch {
            self.cell_start[cell as usize + 1] += 1;
        }
        for c in 1..self.cell_start.len() {
            self.cell_start[c] += self.cell_start[c - 1];
        }

        self.entries.clear();
        self.entries.resize(self.scratch.len(), AgentId(0));
        let mut cursor: Vec<u32> = self.cell_start[..self.cell_start.len() - 1].to_vec();
        for &(cell, id) in &self.scratch {
            let slot = &mut cursor[cell as usize];
            self.entries[*slot as usize] = id;
            *slot += 1;
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `(col, row)` of the cell containing `p`, clamped to the grid.
    pub fn cell_of(&self, p: Point) -> (usize, usize) {
        let col = ((p.x - self.bounds.min_x) / self.cell_size).floor();
        let row = ((p.y - self.bounds.min_y) / self.cell_size).floor();
        (clamp_axis(col, self.cols), clamp_axis(row, self.rows))
    }

    /// Agent ids stored in one cell.
    #[inline]
    pub fn cell(&self, col: usize, row: usize) -> &[AgentId] {
        let c = row * self.cols + col;
        let start = self.cell_start[c] as usize;
        let end   = self.cell_start[c + 1] as usize;
        &self.entries[start..end]
    }

    /// Every id in the cell containing `p` and the `radius_in_cells` rings
    /// around it.  The ring is clamped at the grid edge; each cell is
    /// visited once.
    ///
    /// Candidates only: callers filter by exact distance.
    pub fn neighbors_of(&self, p: Point, radius_in_cells: u32) -> impl Iterator<Item = AgentId> + '_ {
        let r = radius_in_cells as usize;
        let (col, row) = self.cell_of(p);
        let cols = col.saturating_sub(r)..=(col + r).min(self.cols - 1);
        let rows = row.saturating_sub(r)..=(row + r).min(self.rows - 1);
        rows.flat_map(move |y| cols.clone().flat_map(move |x| self.cell(x, y).iter().copied()))
    }
}

fn clamp_axis(v: f64, cells: usize) -> usize {
    if v <= 0.0 {
        0
    } else {
        (v as usize).min(cells - 1)
    }
}
