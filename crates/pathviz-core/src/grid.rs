//! The [`GridGraph`] type: a square grid of nodes with an explicit
//! neighbour cache.
//!
//! Adjacency is a derived structure: it is computed by
//! [`rebuild_adjacency`](GridGraph::rebuild_adjacency) and is **not** kept
//! in sync with later edits. Changing the blocked set marks the cache
//! stale until the next rebuild.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::Cell;
use crate::state::NodeState;

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// One grid position with its status and cached neighbours.
#[derive(Debug, Clone)]
pub struct Node {
    cell: Cell,
    status: NodeState,
    // Flat indices into the owning grid's node array.
    neighbors: Vec<usize>,
}

impl Node {
    fn new(cell: Cell) -> Self {
        Self {
            cell,
            status: NodeState::Unvisited,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Position of this node.
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Current status.
    #[inline]
    pub fn status(&self) -> NodeState {
        self.status
    }

    /// Number of cached neighbours.
    #[inline]
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

// ---------------------------------------------------------------------------
// GridGraph
// ---------------------------------------------------------------------------

/// A `rows × rows` grid of [`Node`]s forming an implicit unit-cost graph.
///
/// The grid owns every node. Each node's neighbour list refers back into
/// the same grid and only contains in-bounds, non-blocked cells reachable
/// by one axis-aligned step.
#[derive(Debug, Clone)]
pub struct GridGraph {
    rows: i32,
    pixel_width: i32,
    cell_size: i32,
    nodes: Vec<Node>,
    start: Option<Cell>,
    end: Option<Cell>,
    stale: bool,
}

impl GridGraph {
    /// Allocate a `rows × rows` grid drawn over `pixel_width` pixels.
    /// At most [`MAX_ROWS`](crate::config::MAX_ROWS) rows are accepted.
    ///
    /// Every node starts [`Unvisited`](NodeState::Unvisited) with an empty
    /// neighbour list; call [`rebuild_adjacency`](Self::rebuild_adjacency)
    /// before searching.
    pub fn create(rows: i32, pixel_width: i32) -> Result<Self, GridError> {
        let config = GridConfig::new(rows, pixel_width);
        let cell_size = config.cell_size()?;
        let side = rows as usize;
        let mut nodes = Vec::with_capacity(side * side);
        for row in 0..rows {
            for col in 0..rows {
                nodes.push(Node::new(Cell::new(row, col)));
            }
        }
        log::debug!("created {rows}x{rows} grid, cell size {cell_size}px");
        Ok(Self {
            rows,
            pixel_width,
            cell_size,
            nodes,
            start: None,
            end: None,
            stale: true,
        })
    }

    /// Cells per side.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Side length of one cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Side length of the drawing area in pixels.
    #[inline]
    pub fn pixel_width(&self) -> i32 {
        self.pixel_width
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig::new(self.rows, self.pixel_width)
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `cell` lies inside the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.col >= 0 && cell.row < self.rows && cell.col < self.rows
    }

    /// Pixel coordinates of the top-left corner of `cell`.
    #[inline]
    pub fn origin(&self, cell: Cell) -> (i32, i32) {
        (cell.row * self.cell_size, cell.col * self.cell_size)
    }

    /// The node at `cell`, if in bounds.
    pub fn node(&self, cell: Cell) -> Option<&Node> {
        self.idx(cell).map(|i| &self.nodes[i])
    }

    /// Status of `cell`. Out-of-bounds cells read as
    /// [`Blocked`](NodeState::Blocked).
    pub fn status(&self, cell: Cell) -> NodeState {
        match self.idx(cell) {
            Some(i) => self.nodes[i].status,
            None => NodeState::Blocked,
        }
    }

    /// The current start cell, if one is designated.
    #[inline]
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The current end cell, if one is designated.
    #[inline]
    pub fn end(&self) -> Option<Cell> {
        self.end
    }

    /// Whether the blocked set changed since the last adjacency rebuild.
    #[inline]
    pub fn adjacency_is_stale(&self) -> bool {
        self.stale
    }

    /// Set the status of `cell`. No-op if `cell` is outside the grid.
    ///
    /// At most one start and one end exist: designating a new one demotes
    /// the previous one to `Unvisited`, and overwriting a start or end cell
    /// forgets it. Blocking or unblocking a cell marks the adjacency cache
    /// stale. Blocking the current start or end is the caller's
    /// responsibility to avoid.
    pub fn set_status(&mut self, cell: Cell, status: NodeState) {
        let Some(i) = self.idx(cell) else {
            return;
        };
        let prev = self.nodes[i].status;
        if prev == status {
            return;
        }

        match prev {
            NodeState::Start => self.start = None,
            NodeState::End => self.end = None,
            _ => {}
        }
        let displaced = match status {
            NodeState::Start => self.start.replace(cell),
            NodeState::End => self.end.replace(cell),
            _ => None,
        };
        if let Some(old) = displaced.and_then(|c| self.idx(c)) {
            self.nodes[old].status = NodeState::Unvisited;
        }

        if (prev == NodeState::Blocked) != (status == NodeState::Blocked) {
            self.stale = true;
        }
        self.nodes[i].status = status;
    }

    /// Reset a single cell to `Unvisited`.
    #[inline]
    pub fn reset_cell(&mut self, cell: Cell) {
        self.set_status(cell, NodeState::Unvisited);
    }

    /// Full rebuild: every node unvisited, no start or end, adjacency
    /// cleared (and therefore stale).
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.status = NodeState::Unvisited;
            node.neighbors.clear();
        }
        self.start = None;
        self.end = None;
        self.stale = true;
    }

    /// Turn every `Frontier`, `Visited` and `Path` node back into
    /// `Unvisited`, keeping start, end and blocked cells.
    ///
    /// Returns the number of nodes cleared.
    pub fn clear_search(&mut self) -> usize {
        let mut cleared = 0;
        for node in self.nodes.iter_mut() {
            if node.status.is_search_mark() {
                node.status = NodeState::Unvisited;
                cleared += 1;
            }
        }
        cleared
    }

    /// Recompute every node's neighbour list from the current blocked set
    /// and grid bounds.
    ///
    /// Neighbours are listed in the order down, right, up, left.
    pub fn rebuild_adjacency(&mut self) {
        for i in 0..self.nodes.len() {
            let cell = self.nodes[i].cell;
            let mut neighbors = std::mem::take(&mut self.nodes[i].neighbors);
            neighbors.clear();
            for n in cell.neighbors_4() {
                if let Some(ni) = self.idx(n) {
                    if self.nodes[ni].status != NodeState::Blocked {
                        neighbors.push(ni);
                    }
                }
            }
            self.nodes[i].neighbors = neighbors;
        }
        self.stale = false;
        log::debug!(
            "rebuilt adjacency for {} nodes ({} blocked)",
            self.nodes.len(),
            self.count(NodeState::Blocked)
        );
    }

    /// Append the cached neighbours of `cell` into `buf`. The caller clears
    /// `buf` before calling. Out-of-bounds cells have no neighbours.
    pub fn neighbors_into(&self, cell: Cell, buf: &mut Vec<Cell>) {
        if let Some(i) = self.idx(cell) {
            buf.extend(self.nodes[i].neighbors.iter().map(|&ni| self.nodes[ni].cell));
        }
    }

    /// Iterator over the cached neighbours of `cell`.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        let list: &[usize] = match self.idx(cell) {
            Some(i) => &self.nodes[i].neighbors,
            None => &[],
        };
        list.iter().map(move |&ni| self.nodes[ni].cell)
    }

    /// Number of nodes with the given status.
    pub fn count(&self, status: NodeState) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }

    /// Row-major iterator over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Row-major iterator over `(Cell, NodeState)` pairs.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, NodeState)> + '_ {
        self.nodes.iter().map(|n| (n.cell, n.status))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Cell` to a flat index. Returns `None` if out of bounds.
    #[inline]
    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.rows as usize + cell.col as usize)
    }
}
