//! Tile providers.
//!
//! # Pluggability
//!
//! The animation engine only ever asks "give me the tile with this id"; it
//! never walks the grid itself.  [`TileProvider`] captures that one query so
//! applications with a different map model (walls, irregular layouts, a map
//! editor's live grid) can plug in their own source of tiles.  The default
//! [`SquareGrid`] covers the usual rectangular Ozobot arena.

use kurbo::Point;

use oz_core::{Direction, TileId};

use crate::{GeometryError, GeometryResult, Tile};

// ── TileProvider trait ────────────────────────────────────────────────────────

/// Read-only source of [`Tile`] handles.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the simulator shares one provider
/// across all agents, possibly from Rayon worker threads.
pub trait TileProvider: Send + Sync {
    /// Look up the tile with `id`.
    fn tile(&self, id: TileId) -> GeometryResult<Tile>;

    /// Side length of every tile in pixels.
    fn tile_size(&self) -> f64;

    /// Center of tile `id`.
    fn tile_center(&self, id: TileId) -> GeometryResult<Point> {
        Ok(self.tile(id)?.center())
    }

    /// Midpoint of the edge of tile `id` facing `direction`.
    fn tile_edge_midpoint(&self, id: TileId, direction: Direction) -> GeometryResult<Point> {
        Ok(self.tile(id)?.edge_midpoint(direction))
    }

    /// Direction from tile `from` to tile `to`.
    fn direction_between(&self, from: TileId, to: TileId) -> GeometryResult<Direction> {
        let a = self.tile(from)?;
        let b = self.tile(to)?;
        a.direction_to(&b)
    }
}

// ── SquareGrid ────────────────────────────────────────────────────────────────

/// A `width × height` grid of square tiles with row-major ids
/// (`id = row * width + col`).
#[derive(Clone, Debug, PartialEq)]
pub struct SquareGrid {
    origin:    Point,
    width:     u32,
    height:    u32,
    tile_size: f64,
}

impl SquareGrid {
    /// Create a grid whose top-left tile starts at `origin`.
    pub fn new(origin: Point, width: u32, height: u32, tile_size: f64) -> GeometryResult<Self> {
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidGrid(format!(
                "grid must have at least one tile, got {width}x{height}"
            )));
        }
        if !(tile_size > 0.0 && tile_size.is_finite()) {
            return Err(GeometryError::InvalidGrid(format!(
                "tile size must be positive, got {tile_size}"
            )));
        }
        Ok(Self { origin, width, height, tile_size })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Id of the tile at `(col, row)`, or `None` when outside the grid.
    pub fn id_at(&self, col: u32, row: u32) -> Option<TileId> {
        (col < self.width && row < self.height).then(|| TileId(row * self.width + col))
    }

    /// Iterator over every tile in id order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        (0..self.tile_count() as u32).map(|i| self.make_tile(TileId(i)))
    }

    fn make_tile(&self, id: TileId) -> Tile {
        let col = id.0 % self.width;
        let row = id.0 / self.width;
        Tile {
            id,
            col,
            row,
            origin: Point::new(
                self.origin.x + col as f64 * self.tile_size,
                self.origin.y + row as f64 * self.tile_size,
            ),
            size: self.tile_size,
        }
    }
}

impl TileProvider for SquareGrid {
    fn tile(&self, id: TileId) -> GeometryResult<Tile> {
        if id.index() >= self.tile_count() {
            return Err(GeometryError::TileNotFound(id));
        }
        Ok(self.make_tile(id))
    }

    fn tile_size(&self) -> f64 {
        self.tile_size
    }
}
