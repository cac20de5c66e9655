// ---------------------------------------------------------------------------
// Staged map: destination-shaped elements still holding legacy codes
// ---------------------------------------------------------------------------

use park::colour::Colour;
use park::config::MAP_SIZE_TECHNICAL;
use park::tile_map::{
    BannerElement, EntranceElement, EntranceType, LargeSceneryElement, PathAddition, PathElement,
    SmallSceneryElement, SurfaceElement, TileElement, TileElementKind, TrackElement,
};

use crate::legacy_types::map_element::*;
use crate::object_mapping::entrance_path_code;

/// An element between the copy and the fixup passes. Until the passes that
/// own them have run, type fields hold legacy codes, colours hold legacy
/// palette indices and heights are in legacy half-units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedElement {
    Element(TileElement),
    /// A legacy fence element, expanded into one wall per edge by the walls
    /// pass.
    PackedWalls {
        base_height: u8,
        clearance_height: u8,
        colour: Colour,
        edges: [Option<LegacyWallEdge>; 4],
    },
}

impl StagedElement {
    pub fn element(&self) -> Option<&TileElement> {
        match self {
            StagedElement::Element(element) => Some(element),
            StagedElement::PackedWalls { .. } => None,
        }
    }

    pub fn element_mut(&mut self) -> Option<&mut TileElement> {
        match self {
            StagedElement::Element(element) => Some(element),
            StagedElement::PackedWalls { .. } => None,
        }
    }

    pub fn kind_mut(&mut self) -> Option<&mut TileElementKind> {
        self.element_mut().map(|e| &mut e.kind)
    }

    /// Base and clearance height, whatever the element holds.
    pub fn heights_mut(&mut self) -> (&mut u8, &mut u8) {
        match self {
            StagedElement::Element(element) => {
                (&mut element.base_height, &mut element.clearance_height)
            }
            StagedElement::PackedWalls {
                base_height,
                clearance_height,
                ..
            } => (base_height, clearance_height),
        }
    }
}

/// Technical-size grid of staged tiles.
#[derive(Debug, Clone)]
pub struct StagedMap {
    width: usize,
    tiles: Vec<Vec<StagedElement>>,
}

impl StagedMap {
    /// Copies the legacy tiles into the top-left corner. Every other tile
    /// gets a blank legacy surface.
    pub fn from_legacy(elements: &[LegacyMapElement]) -> Self {
        let width = MAP_SIZE_TECHNICAL;
        let blank = stage_element(&LegacyMapElement::blank_surface());
        let mut tiles = vec![blank.into_iter().collect::<Vec<_>>(); width * width];
        for (index, legacy_tile) in legacy_tiles(elements).enumerate() {
            let (x, y) = legacy_tile_position(index);
            tiles[y * width + x] = legacy_tile.iter().filter_map(stage_element).collect();
        }
        Self { width, tiles }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn tile(&self, x: usize, y: usize) -> &[StagedElement] {
        &self.tiles[y * self.width + x]
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Vec<StagedElement> {
        let idx = y * self.width + x;
        &mut self.tiles[idx]
    }

    pub fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Vec<StagedElement>> + '_ {
        self.tiles.iter_mut()
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut StagedElement> + '_ {
        self.tiles.iter_mut().flatten()
    }

    /// Every element with its tile, x outermost.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &StagedElement)> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.width).flat_map(move |y| self.tile(x, y).iter().map(move |e| (x, y, e)))
        })
    }

    /// Hands the finished tiles out in row order. Packed walls still present
    /// are dropped.
    pub fn into_tiles(self) -> impl Iterator<Item = (usize, usize, Vec<TileElement>)> {
        let width = self.width;
        self.tiles.into_iter().enumerate().map(move |(i, tile)| {
            let elements = tile
                .into_iter()
                .filter_map(|staged| match staged {
                    StagedElement::Element(element) => Some(element),
                    StagedElement::PackedWalls { .. } => None,
                })
                .collect();
            (i % width, i / width, elements)
        })
    }
}

/// Decodes one legacy element. Unknown element types give `None`.
pub fn stage_element(src: &LegacyMapElement) -> Option<StagedElement> {
    let kind = match src.element_type()? {
        LegacyElementType::Surface => TileElementKind::Surface(SurfaceElement {
            slope: src.surface_slope(),
            terrain: src.surface_terrain(),
            terrain_edge: src.surface_terrain_edge(),
            water_height: src.surface_water_height(),
            grass_length: src.surface_grass_length(),
            ownership: src.surface_ownership(),
        }),
        LegacyElementType::Path => {
            let addition = src.path_addition();
            TileElementKind::Path(PathElement {
                entry_index: src.path_code(),
                is_queue: false,
                is_sloped: src.path_is_sloped(),
                slope_direction: src.path_slope_direction(),
                edges: src.path_edges(),
                addition: (addition != 0).then_some(PathAddition {
                    entry_index: addition,
                    is_broken: false,
                }),
                addition_status: src.path_addition_status(),
            })
        }
        LegacyElementType::Track => TileElementKind::Track(TrackElement {
            track_type: src.track_type(),
            sequence: src.track_sequence(),
            colour_scheme: src.track_colour_scheme(),
            ride_index: src.track_ride_index(),
        }),
        LegacyElementType::SmallScenery => {
            let (colour_1, _) = src.small_scenery_colours();
            TileElementKind::SmallScenery(SmallSceneryElement {
                entry_index: src.small_scenery_type(),
                age: src.small_scenery_age(),
                colour_1: Colour(colour_1),
                colour_2: Colour::BLACK,
            })
        }
        LegacyElementType::Entrance => {
            let entrance_type = match src.entrance_type() {
                LEGACY_ENTRANCE_RIDE_ENTRANCE => EntranceType::RideEntrance,
                LEGACY_ENTRANCE_RIDE_EXIT => EntranceType::RideExit,
                LEGACY_ENTRANCE_PARK_ENTRANCE => EntranceType::ParkEntrance,
                _ => return None,
            };
            TileElementKind::Entrance(EntranceElement {
                entrance_type,
                sequence: src.entrance_sequence(),
                station_index: src.entrance_station(),
                path_entry: if entrance_type == EntranceType::ParkEntrance {
                    entrance_path_code(src)
                } else {
                    0
                },
                ride_index: src.entrance_ride_index(),
            })
        }
        LegacyElementType::Fence => {
            return Some(StagedElement::PackedWalls {
                base_height: src.base_height(),
                clearance_height: src.clearance_height(),
                colour: Colour(src.fence_colour()),
                edges: src.wall_edges(),
            });
        }
        LegacyElementType::LargeScenery => {
            let (colour_1, colour_2) = src.large_scenery_colours();
            TileElementKind::LargeScenery(LargeSceneryElement {
                entry_index: src.large_scenery_type(),
                sequence: src.large_scenery_sequence(),
                colour_1: Colour(colour_1),
                colour_2: Colour(colour_2),
            })
        }
        LegacyElementType::Banner => TileElementKind::Banner(BannerElement {
            index: src.banner_index(),
            position: src.banner_position(),
            flags: src.banner_flags(),
        }),
    };
    Some(StagedElement::Element(TileElement {
        base_height: src.base_height(),
        clearance_height: src.clearance_height(),
        direction: src.direction(),
        quadrants: src.quadrants(),
        kind,
    }))
}
