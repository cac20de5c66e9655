// ---------------------------------------------------------------------------
// Raw legacy map elements
// ---------------------------------------------------------------------------
//
// Every element is an 8-byte record: type byte, flags byte, base height,
// clearance height, then four property bytes whose meaning depends on the
// element type. Tiles are stored back to back, each ending with an element
// that has the last-for-tile flag set.

use serde::{Deserialize, Serialize};

/// Tiles per side of a legacy map.
pub const LEGACY_MAP_SIZE: usize = 128;

/// Tiles in a legacy map.
pub const LEGACY_TILE_COUNT: usize = LEGACY_MAP_SIZE * LEGACY_MAP_SIZE;

const TYPE_MASK: u8 = 0x3C;
const DIRECTION_MASK: u8 = 0x03;
const FLAG_LAST_FOR_TILE: u8 = 0x80;
const QUADRANT_MASK: u8 = 0x0F;
const LARGE_TYPE_MASK: u16 = 0x03FF;

/// Height stored in a legacy blank surface.
pub const LEGACY_BLANK_SURFACE_HEIGHT: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyElementType {
    Surface,
    Path,
    Track,
    SmallScenery,
    Entrance,
    Fence,
    LargeScenery,
    Banner,
}

impl LegacyElementType {
    fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits >> 2 {
            0 => LegacyElementType::Surface,
            1 => LegacyElementType::Path,
            2 => LegacyElementType::Track,
            3 => LegacyElementType::SmallScenery,
            4 => LegacyElementType::Entrance,
            5 => LegacyElementType::Fence,
            6 => LegacyElementType::LargeScenery,
            7 => LegacyElementType::Banner,
            _ => return None,
        })
    }

    fn bits(self) -> u8 {
        let index = match self {
            LegacyElementType::Surface => 0,
            LegacyElementType::Path => 1,
            LegacyElementType::Track => 2,
            LegacyElementType::SmallScenery => 3,
            LegacyElementType::Entrance => 4,
            LegacyElementType::Fence => 5,
            LegacyElementType::LargeScenery => 6,
            LegacyElementType::Banner => 7,
        };
        index << 2
    }
}

// Legacy entrance element sub-types.
pub const LEGACY_ENTRANCE_RIDE_ENTRANCE: u8 = 0;
pub const LEGACY_ENTRANCE_RIDE_EXIT: u8 = 1;
pub const LEGACY_ENTRANCE_PARK_ENTRANCE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyMapElement {
    pub bytes: [u8; 8],
}

/// One occupied edge of a packed fence element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyWallEdge {
    pub edge: u8,
    /// Legacy wall code, 0..64.
    pub code: u8,
}

impl LegacyMapElement {
    pub fn new(
        element_type: LegacyElementType,
        base_height: u8,
        clearance_height: u8,
        properties: [u8; 4],
    ) -> Self {
        let [p0, p1, p2, p3] = properties;
        Self {
            bytes: [
                element_type.bits(),
                0,
                base_height,
                clearance_height,
                p0,
                p1,
                p2,
                p3,
            ],
        }
    }

    /// Blank surface used to pad tiles outside the legacy map.
    pub fn blank_surface() -> Self {
        Self::new(
            LegacyElementType::Surface,
            LEGACY_BLANK_SURFACE_HEIGHT,
            0,
            [0; 4],
        )
        .last_for_tile()
    }

    pub fn last_for_tile(mut self) -> Self {
        self.bytes[1] |= FLAG_LAST_FOR_TILE;
        self
    }

    /// Sets the bits of the type byte outside the element type field.
    pub fn with_type_bits(mut self, bits: u8) -> Self {
        self.bytes[0] = (self.bytes[0] & TYPE_MASK) | (bits & !TYPE_MASK);
        self
    }

    pub fn with_flags(mut self, flags: u8) -> Self {
        self.bytes[1] = (self.bytes[1] & FLAG_LAST_FOR_TILE) | (flags & !FLAG_LAST_FOR_TILE);
        self
    }

    // -- Common fields --

    pub fn element_type(&self) -> Option<LegacyElementType> {
        LegacyElementType::from_bits(self.bytes[0] & TYPE_MASK)
    }

    pub fn type_byte(&self) -> u8 {
        self.bytes[0]
    }

    pub fn direction(&self) -> u8 {
        self.bytes[0] & DIRECTION_MASK
    }

    pub fn quadrants(&self) -> u8 {
        self.bytes[1] & QUADRANT_MASK
    }

    pub fn is_last_for_tile(&self) -> bool {
        self.bytes[1] & FLAG_LAST_FOR_TILE != 0
    }

    pub fn base_height(&self) -> u8 {
        self.bytes[2]
    }

    pub fn clearance_height(&self) -> u8 {
        self.bytes[3]
    }

    fn prop(&self, index: usize) -> u8 {
        self.bytes[4 + index]
    }

    // -- Surface --

    pub fn surface_slope(&self) -> u8 {
        self.prop(0) & 0x1F
    }

    /// Terrain style, with the fourth bit held in the type byte.
    pub fn surface_terrain(&self) -> u8 {
        (self.prop(1) >> 5) | ((self.bytes[0] & 0x01) << 3)
    }

    pub fn surface_terrain_edge(&self) -> u8 {
        (self.prop(0) >> 5) | if self.bytes[0] & 0x80 != 0 { 0x08 } else { 0 }
    }

    pub fn surface_water_height(&self) -> u8 {
        self.prop(1) & 0x1F
    }

    pub fn surface_grass_length(&self) -> u8 {
        self.prop(2)
    }

    pub fn surface_ownership(&self) -> u8 {
        self.prop(3)
    }

    // -- Path --

    /// `(type_nibble << 2) | colour`, the key of the legacy path tables.
    pub fn path_code(&self) -> u8 {
        ((self.prop(0) & 0xF0) >> 4) << 2 | (self.bytes[0] & 0x03)
    }

    pub fn path_is_sloped(&self) -> bool {
        self.prop(0) & 0x04 != 0
    }

    pub fn path_slope_direction(&self) -> u8 {
        self.prop(0) & 0x03
    }

    pub fn path_addition(&self) -> u8 {
        self.prop(1) & 0x0F
    }

    pub fn path_edges(&self) -> u8 {
        self.prop(2)
    }

    pub fn path_addition_status(&self) -> u8 {
        self.prop(3)
    }

    // -- Track --

    pub fn track_type(&self) -> u8 {
        self.prop(0)
    }

    pub fn track_sequence(&self) -> u8 {
        self.prop(1) & 0x0F
    }

    pub fn track_colour_scheme(&self) -> u8 {
        self.prop(2) & 0x03
    }

    pub fn track_ride_index(&self) -> u8 {
        self.prop(3)
    }

    // -- Small scenery --

    pub fn small_scenery_type(&self) -> u8 {
        self.prop(0)
    }

    pub fn small_scenery_age(&self) -> u8 {
        self.prop(1)
    }

    pub fn small_scenery_colours(&self) -> (u8, u8) {
        (self.prop(2) & 0x1F, self.prop(3) & 0x1F)
    }

    // -- Entrance --

    pub fn entrance_type(&self) -> u8 {
        self.prop(0)
    }

    /// Part of a multi-tile entrance; 0 is the primary tile.
    pub fn entrance_sequence(&self) -> u8 {
        self.prop(1) & 0x0F
    }

    pub fn entrance_station(&self) -> u8 {
        (self.prop(1) >> 4) & 0x03
    }

    pub fn entrance_path_type(&self) -> u8 {
        self.prop(2)
    }

    pub fn entrance_ride_index(&self) -> u8 {
        self.prop(3)
    }

    // -- Fence --

    /// Fence colour split over type byte bits 6-7 and fence byte bits 5-7.
    pub fn fence_colour(&self) -> u8 {
        ((self.bytes[0] & 0xC0) >> 3) | (self.prop(0) >> 5)
    }

    /// Decodes the packed wall codes. An edge is absent when its 4-bit field
    /// is 0xF.
    pub fn wall_edges(&self) -> [Option<LegacyWallEdge>; 4] {
        let low = self.prop(1);
        let high = u16::from(self.prop(2)) | (u16::from(self.prop(3)) << 8);
        std::array::from_fn(|edge| {
            let type_a = (low >> (edge * 2)) & 0x03;
            let type_b = ((high >> (edge * 4)) & 0x0F) as u8;
            (type_b != 0x0F).then_some(LegacyWallEdge {
                edge: edge as u8,
                code: type_a | (type_b << 2),
            })
        })
    }

    // -- Large scenery --

    pub fn large_scenery_type(&self) -> u16 {
        (u16::from(self.prop(0)) | (u16::from(self.prop(1)) << 8)) & LARGE_TYPE_MASK
    }

    pub fn large_scenery_sequence(&self) -> u8 {
        self.prop(1) >> 2
    }

    pub fn large_scenery_colours(&self) -> (u8, u8) {
        (self.prop(2) & 0x1F, self.prop(3) & 0x1F)
    }

    // -- Banner --

    pub fn banner_index(&self) -> u8 {
        self.prop(0)
    }

    pub fn banner_position(&self) -> u8 {
        self.prop(1)
    }

    pub fn banner_flags(&self) -> u8 {
        self.prop(2)
    }
}

/// Encodes wall codes into the packed fence property bytes. `None` leaves
/// the edge empty.
pub fn pack_wall_edges(codes: [Option<u8>; 4]) -> [u8; 3] {
    let mut low = 0u8;
    let mut high = 0xFFFFu16;
    for (edge, code) in codes.iter().enumerate() {
        if let Some(code) = code {
            low |= (code & 0x03) << (edge * 2);
            high &= !(0x0F << (edge * 4));
            high |= u16::from(code >> 2 & 0x0F) << (edge * 4);
        }
    }
    [low, high as u8, (high >> 8) as u8]
}

/// Splits the flat element sequence into tiles, in storage order. Stops
/// after [`LEGACY_TILE_COUNT`] tiles; a truncated sequence yields fewer.
pub fn legacy_tiles(elements: &[LegacyMapElement]) -> impl Iterator<Item = &[LegacyMapElement]> {
    elements
        .split_inclusive(LegacyMapElement::is_last_for_tile)
        .take(LEGACY_TILE_COUNT)
}

/// Tile coordinate of the `index`-th stored tile.
pub fn legacy_tile_position(index: usize) -> (usize, usize) {
    (index % LEGACY_MAP_SIZE, index / LEGACY_MAP_SIZE)
}
