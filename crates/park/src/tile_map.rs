use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::config::{COORDS_XY_STEP, MAP_SIZE_TECHNICAL};

// =============================================================================
// Tile elements
// =============================================================================

/// One element of a tile's stack. Tiles hold their elements bottom-up in
/// stacking order; there is no explicit last-in-tile marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileElement {
    /// Height of the element's base in full-height units.
    pub base_height: u8,
    pub clearance_height: u8,
    /// Rotation or edge, 0..=3.
    pub direction: u8,
    /// Occupied quadrants, one bit per quadrant.
    pub quadrants: u8,
    pub kind: TileElementKind,
}

impl TileElement {
    /// Height value reserved for blank template tiles; never rescaled.
    pub const BLANK_HEIGHT: u8 = 255;

    pub fn blank_surface(base_height: u8) -> Self {
        Self {
            base_height,
            clearance_height: 0,
            direction: 0,
            quadrants: 0,
            kind: TileElementKind::Surface(SurfaceElement::default()),
        }
    }

    pub fn as_surface(&self) -> Option<&SurfaceElement> {
        match &self.kind {
            TileElementKind::Surface(surface) => Some(surface),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&PathElement> {
        match &self.kind {
            TileElementKind::Path(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_wall(&self) -> Option<&WallElement> {
        match &self.kind {
            TileElementKind::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    pub fn as_entrance(&self) -> Option<&EntranceElement> {
        match &self.kind {
            TileElementKind::Entrance(entrance) => Some(entrance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileElementKind {
    Surface(SurfaceElement),
    Path(PathElement),
    Track(TrackElement),
    SmallScenery(SmallSceneryElement),
    LargeScenery(LargeSceneryElement),
    Wall(WallElement),
    Entrance(EntranceElement),
    Banner(BannerElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SurfaceElement {
    pub slope: u8,
    pub terrain: u8,
    pub terrain_edge: u8,
    pub water_height: u8,
    pub grass_length: u8,
    pub ownership: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PathElement {
    /// Slot of the path surface object.
    pub entry_index: u8,
    pub is_queue: bool,
    pub is_sloped: bool,
    pub slope_direction: u8,
    /// Connected edges and corners.
    pub edges: u8,
    pub addition: Option<PathAddition>,
    pub addition_status: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAddition {
    /// Slot of the path addition object.
    pub entry_index: u8,
    /// Rendered as vandalised.
    pub is_broken: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrackElement {
    pub track_type: u8,
    pub sequence: u8,
    pub colour_scheme: u8,
    pub ride_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmallSceneryElement {
    pub entry_index: u8,
    pub age: u8,
    pub colour_1: Colour,
    pub colour_2: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LargeSceneryElement {
    pub entry_index: u16,
    /// Which part of the multi-tile object this tile holds.
    pub sequence: u8,
    pub colour_1: Colour,
    pub colour_2: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallElement {
    pub entry_index: u8,
    pub colour_1: Colour,
    pub colour_2: Colour,
    pub colour_3: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntranceType {
    RideEntrance,
    RideExit,
    ParkEntrance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntranceElement {
    pub entrance_type: EntranceType,
    /// Part of a multi-tile entrance; 0 is the primary tile.
    pub sequence: u8,
    pub station_index: u8,
    /// Path surface slot drawn under park entrances.
    pub path_entry: u8,
    pub ride_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BannerElement {
    /// Index into the banner table.
    pub index: u8,
    pub position: u8,
    pub flags: u8,
}

// =============================================================================
// Tile map
// =============================================================================

/// World-space park entrance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkEntrance {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: u8,
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    /// Playable size in tiles; the grid itself is always technical size.
    pub size: u16,
    pub width: usize,
    pub height: usize,
    tiles: Vec<Vec<TileElement>>,
    pub park_entrances: Vec<ParkEntrance>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAP_SIZE)
    }
}

impl TileMap {
    /// Creates a technical-size grid where every tile holds a single blank
    /// surface at height 1.
    pub fn new(size: u16) -> Self {
        let width = MAP_SIZE_TECHNICAL;
        let height = MAP_SIZE_TECHNICAL;
        Self {
            size,
            width,
            height,
            tiles: vec![vec![TileElement::blank_surface(1)]; width * height],
            park_entrances: Vec::new(),
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    pub fn tile(&self, x: usize, y: usize) -> &[TileElement] {
        &self.tiles[self.index(x, y)]
    }

    #[inline]
    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Vec<TileElement> {
        let idx = self.index(x, y);
        &mut self.tiles[idx]
    }

    pub fn set_tile(&mut self, x: usize, y: usize, elements: Vec<TileElement>) {
        *self.tile_mut(x, y) = elements;
    }

    pub fn surface(&self, x: usize, y: usize) -> Option<&SurfaceElement> {
        self.tile(x, y).iter().find_map(TileElement::as_surface)
    }

    pub fn surface_height(&self, x: usize, y: usize) -> Option<u8> {
        self.tile(x, y)
            .iter()
            .find(|e| e.as_surface().is_some())
            .map(|e| e.base_height)
    }

    /// Visits every element with its tile coordinates, x outermost.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &TileElement)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).flat_map(move |y| self.tile(x, y).iter().map(move |e| (x, y, e)))
        })
    }

    pub fn element_count(&self) -> usize {
        self.tiles.iter().map(Vec::len).sum()
    }

    /// Converts a world coordinate into the containing tile.
    pub fn world_to_tile(world_x: i32, world_y: i32) -> (i32, i32) {
        (
            world_x.div_euclid(COORDS_XY_STEP),
            world_y.div_euclid(COORDS_XY_STEP),
        )
    }

    /// World coordinate of a tile's centre.
    pub fn tile_centre(x: usize, y: usize) -> (i32, i32) {
        let half = COORDS_XY_STEP / 2;
        (
            x as i32 * COORDS_XY_STEP + half,
            y as i32 * COORDS_XY_STEP + half,
        )
    }

    /// Nearest tile holding a path within `radius` tiles of `(x, y)`,
    /// searching square rings outwards. Returns the tile and path height.
    pub fn nearest_path(&self, x: usize, y: usize, radius: usize) -> Option<(usize, usize, u8)> {
        for r in 0..=radius as isize {
            for dx in -r..=r {
                for dy in -r..=r {
                    if dx.abs() != r && dy.abs() != r {
                        continue;
                    }
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 || !self.in_bounds(nx as usize, ny as usize) {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if let Some(path) = self.tile(nx, ny).iter().find(|e| e.as_path().is_some()) {
                        return Some((nx, ny, path.base_height));
                    }
                }
            }
        }
        None
    }
}
