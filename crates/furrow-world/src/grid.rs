//! The farm grid: a fixed rectangle of tiles.
//!
//! The grid owns every [`Tile`] and answers spatial questions about them:
//! bounds, edges, the eight-neighbourhood used by the fruit-tree rule, and
//! the bulk operations that touch every crop at once (the daily growth tick
//! and retroactive cap increases after a rank change).
//!
//! Tiles are stored row-major in a flat vector. All lookups go through
//! [`FarmGrid::tile`] / [`FarmGrid::tile_mut`], which fail with
//! [`WorldError::TileOutOfBounds`] instead of panicking.

use tracing::{info, warn};

use furrow_types::{CropCategory, CropStatus, TilePos, TileView, WitherReason};

use crate::error::WorldError;
use crate::random::RandomSource;
use crate::tile::Tile;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Random slots tried per rock before giving up on that rock.
pub const ROCK_PLACEMENT_ATTEMPTS: u32 = 30;

/// Offsets of the eight neighbours, as `(row_delta, col_delta)`.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// ---------------------------------------------------------------------------
// DayTransitions
// ---------------------------------------------------------------------------

/// Crops whose status changed during one day advance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayTransitions {
    /// Tiles whose crop became harvestable.
    pub harvestable: Vec<TilePos>,
    /// Tiles whose crop withered, with the reason.
    pub withered: Vec<(TilePos, WitherReason)>,
}

// ---------------------------------------------------------------------------
// FarmGrid
// ---------------------------------------------------------------------------

/// A `rows x cols` field of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmGrid {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

impl FarmGrid {
    /// Create a grid of empty tiles.
    ///
    /// Both dimensions must be at least 1 and fit in a `u32`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, WorldError> {
        let invalid = WorldError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 || u32::try_from(rows).is_err() || u32::try_from(cols).is_err()
        {
            return Err(invalid);
        }
        let capacity = rows.checked_mul(cols).ok_or(invalid)?;

        let mut tiles = Vec::with_capacity(capacity);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Tile::new(TilePos::new(row, col)));
            }
        }

        Ok(Self { rows, cols, tiles })
    }

    /// Create a grid and scatter up to `rock_count` rocks on it.
    ///
    /// Returns the grid together with the number of rocks actually placed,
    /// which may fall short of the request (see [`scatter_rocks`]).
    ///
    /// [`scatter_rocks`]: Self::scatter_rocks
    pub fn with_rocks<R: RandomSource + ?Sized>(
        rows: usize,
        cols: usize,
        rock_count: u32,
        rng: &mut R,
    ) -> Result<(Self, u32), WorldError> {
        let mut grid = Self::new(rows, cols)?;
        let placed = grid.scatter_rocks(rock_count, rng);
        info!(rows, cols, requested = rock_count, placed, "Farm grid created");
        Ok((grid, placed))
    }

    /// Place up to `rock_count` rocks at random free slots.
    ///
    /// Each rock gets [`ROCK_PLACEMENT_ATTEMPTS`] tries at a random slot;
    /// slots that already hold something are skipped. A rock that runs out
    /// of tries is dropped, so fewer rocks than requested can end up on the
    /// grid.
    pub fn scatter_rocks<R: RandomSource + ?Sized>(&mut self, rock_count: u32, rng: &mut R) -> u32 {
        let max_row = u32::try_from(self.rows.saturating_sub(1)).unwrap_or(u32::MAX);
        let max_col = u32::try_from(self.cols.saturating_sub(1)).unwrap_or(u32::MAX);
        let mut placed: u32 = 0;

        for _ in 0..rock_count {
            for _ in 0..ROCK_PLACEMENT_ATTEMPTS {
                let row = usize::try_from(rng.roll(0, max_row)).unwrap_or(usize::MAX);
                let col = usize::try_from(rng.roll(0, max_col)).unwrap_or(usize::MAX);
                let Ok(tile) = self.tile_mut(TilePos::new(row, col)) else {
                    continue;
                };
                if tile.place_rock().is_ok() {
                    placed = placed.saturating_add(1);
                    break;
                }
            }
        }

        if placed < rock_count {
            warn!(requested = rock_count, placed, "Rock placement fell short");
        }
        placed
    }

    /// Number of rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `pos` lies inside the grid.
    pub const fn contains(&self, pos: TilePos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index_of(&self, pos: TilePos) -> Result<usize, WorldError> {
        if !self.contains(pos) {
            return Err(WorldError::TileOutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        pos.row
            .checked_mul(self.cols)
            .and_then(|offset| offset.checked_add(pos.col))
            .ok_or(WorldError::ArithmeticOverflow)
    }

    /// The tile at `pos`.
    pub fn tile(&self, pos: TilePos) -> Result<&Tile, WorldError> {
        let index = self.index_of(pos)?;
        self.tiles.get(index).ok_or(WorldError::TileOutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Mutable access to the tile at `pos`.
    pub fn tile_mut(&mut self, pos: TilePos) -> Result<&mut Tile, WorldError> {
        let index = self.index_of(pos)?;
        let (rows, cols) = (self.rows, self.cols);
        self.tiles
            .get_mut(index)
            .ok_or(WorldError::TileOutOfBounds { pos, rows, cols })
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Drop a rock on a specific tile. Fails silently (returns `false`) when
    /// the tile is not bare ground.
    pub fn place_rock(&mut self, pos: TilePos) -> Result<bool, WorldError> {
        Ok(self.tile_mut(pos)?.place_rock().is_ok())
    }

    /// Whether `pos` is on the outer ring of the grid.
    pub const fn is_edge(&self, pos: TilePos) -> bool {
        pos.row == 0
            || pos.col == 0
            || pos.row == self.rows.saturating_sub(1)
            || pos.col == self.cols.saturating_sub(1)
    }

    /// The in-bounds neighbours of `pos`, diagonals included.
    pub fn neighbours(&self, pos: TilePos) -> Result<Vec<&Tile>, WorldError> {
        self.index_of(pos)?;
        Ok(NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = pos.row.checked_add_signed(dr)?;
                let col = pos.col.checked_add_signed(dc)?;
                self.tile(TilePos::new(row, col)).ok()
            })
            .collect())
    }

    /// Whether `pos` is an interior tile whose eight neighbours are all free
    /// of crops and rocks.
    pub fn has_open_ground(&self, pos: TilePos) -> Result<bool, WorldError> {
        if self.is_edge(pos) {
            self.index_of(pos)?;
            return Ok(false);
        }
        Ok(self
            .neighbours(pos)?
            .iter()
            .all(|tile| !tile.is_occupied()))
    }

    /// Whether a crop of `category` may go on `pos` as far as its
    /// surroundings are concerned. Only fruit trees are restricted.
    pub fn allows_category(&self, pos: TilePos, category: CropCategory) -> Result<bool, WorldError> {
        if category.requires_open_ground() {
            self.has_open_ground(pos)
        } else {
            self.index_of(pos).map(|_| true)
        }
    }

    /// Advance every crop by one day.
    pub fn advance_day(&mut self) -> DayTransitions {
        let mut transitions = DayTransitions::default();
        for tile in &mut self.tiles {
            match tile.advance_day() {
                Some(CropStatus::Harvestable) => transitions.harvestable.push(tile.pos()),
                Some(CropStatus::Withered(reason)) => {
                    transitions.withered.push((tile.pos(), reason));
                }
                Some(CropStatus::Growing) | None => {}
            }
        }
        transitions
    }

    /// Raise the water and fertilizer caps of every live crop.
    ///
    /// Returns how many crops were updated.
    pub fn propagate_cap_increase(&mut self, water: u32, fertilizer: u32) -> usize {
        let mut updated: usize = 0;
        for crop in self.tiles.iter_mut().filter_map(Tile::crop_mut) {
            if crop.is_withered() {
                continue;
            }
            crop.raise_caps(water, fertilizer);
            updated = updated.saturating_add(1);
        }
        updated
    }

    /// Whether at least one crop on the grid has not withered.
    pub fn has_live_crop(&self) -> bool {
        self.tiles
            .iter()
            .filter_map(Tile::crop)
            .any(|crop| !crop.is_withered())
    }

    /// Whether every tile holds a crop and every one of them has withered.
    pub fn all_tiles_withered(&self) -> bool {
        self.tiles
            .iter()
            .all(|tile| tile.crop().is_some_and(|crop| crop.is_withered()))
    }

    /// Number of tiles holding a crop.
    pub fn crop_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.has_crop()).count()
    }

    /// Number of tiles holding a rock.
    pub fn rock_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.has_rock()).count()
    }

    /// Detached snapshots of every tile, row-major.
    pub fn view(&self) -> Vec<TileView> {
        self.tiles.iter().map(Tile::view).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
