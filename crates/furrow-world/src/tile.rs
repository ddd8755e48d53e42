//! A single square of farmland.
//!
//! A tile can be plowed, can hold a rock, and can own one crop. Two
//! invariants hold at all times:
//!
//! - a tile with a rock is never plowed and never holds a crop;
//! - a tile holding a crop is always plowed.
//!
//! The mutators below refuse any change that would break them and report the
//! conflicting state instead.

use furrow_types::{CropStatus, TileConflict, TilePos, TileView};

use crate::crop::CropInstance;

/// One grid square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pos: TilePos,
    plowed: bool,
    rock: bool,
    crop: Option<CropInstance>,
}

impl Tile {
    /// An empty, unplowed tile.
    pub const fn new(pos: TilePos) -> Self {
        Self {
            pos,
            plowed: false,
            rock: false,
            crop: None,
        }
    }

    /// Grid coordinate.
    pub const fn pos(&self) -> TilePos {
        self.pos
    }

    /// Whether the tile is plowed.
    pub const fn is_plowed(&self) -> bool {
        self.plowed
    }

    /// Whether a rock sits on the tile.
    pub const fn has_rock(&self) -> bool {
        self.rock
    }

    /// Whether a crop grows on the tile.
    pub const fn has_crop(&self) -> bool {
        self.crop.is_some()
    }

    /// Occupied means a crop or a rock is present.
    pub const fn is_occupied(&self) -> bool {
        self.rock || self.crop.is_some()
    }

    /// The crop on the tile.
    pub const fn crop(&self) -> Option<&CropInstance> {
        self.crop.as_ref()
    }

    /// Mutable access to the crop on the tile.
    pub const fn crop_mut(&mut self) -> Option<&mut CropInstance> {
        self.crop.as_mut()
    }

    /// Plow the tile.
    pub const fn plow(&mut self) -> Result<(), TileConflict> {
        if self.rock {
            return Err(TileConflict::RockPresent);
        }
        if self.plowed {
            return Err(TileConflict::AlreadyPlowed);
        }
        self.plowed = true;
        Ok(())
    }

    /// Put a crop into the ground. The tile must be plowed and free.
    pub fn place_crop(&mut self, crop: CropInstance) -> Result<(), TileConflict> {
        if self.rock {
            return Err(TileConflict::RockPresent);
        }
        if self.crop.is_some() {
            return Err(TileConflict::CropPresent);
        }
        if !self.plowed {
            return Err(TileConflict::NotPlowed);
        }
        self.crop = Some(crop);
        Ok(())
    }

    /// Clear the tile back to bare, unplowed ground, returning any crop that
    /// was growing.
    pub const fn clear(&mut self) -> Option<CropInstance> {
        self.plowed = false;
        self.crop.take()
    }

    /// Drop a rock on the tile. Only bare, unplowed ground accepts one.
    pub const fn place_rock(&mut self) -> Result<(), TileConflict> {
        if self.rock {
            return Err(TileConflict::RockPresent);
        }
        if self.crop.is_some() {
            return Err(TileConflict::CropPresent);
        }
        if self.plowed {
            return Err(TileConflict::AlreadyPlowed);
        }
        self.rock = true;
        Ok(())
    }

    /// Break the rock. Returns whether there was one.
    pub const fn remove_rock(&mut self) -> bool {
        let had_rock = self.rock;
        self.rock = false;
        had_rock
    }

    /// Let the crop on this tile grow one day.
    pub fn advance_day(&mut self) -> Option<CropStatus> {
        self.crop.as_mut().and_then(CropInstance::advance_day)
    }

    /// Detached snapshot for display.
    pub fn view(&self) -> TileView {
        TileView {
            pos: self.pos,
            rock: self.rock,
            plowed: self.plowed,
            crop: self.crop.as_ref().map(CropInstance::view),
        }
    }
}
