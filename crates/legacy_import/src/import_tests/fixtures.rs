use park::objects::ObjectCatalog;
use park::ParkWorld;

use crate::format_version::FormatVersion;
use crate::import_error::{ImportError, ImportReport};
use crate::importer::{import_park_with, ImportOptions};
use crate::legacy_types::map_element::*;
use crate::legacy_types::save::*;
use crate::legacy_types::sprite::LEGACY_SPRITE_INDEX_NULL;
use crate::legacy_types::{LegacyPeep, LegacyRide, LegacySave, LegacySprite};

/// Legacy height of the fixture terrain; 7 after import.
pub const GROUND: u8 = 14;

/// Builds legacy saves tile by tile.
pub struct SaveBuilder {
    version: FormatVersion,
    tiles: Vec<Vec<LegacyMapElement>>,
    save: LegacySave,
}

impl SaveBuilder {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            tiles: vec![vec![LegacyMapElement::blank_surface()]; LEGACY_TILE_COUNT],
            save: LegacySave::blank(version),
        }
    }

    /// Replaces tile (x, y) with a ground surface plus `elements`.
    pub fn tile(mut self, x: usize, y: usize, elements: Vec<LegacyMapElement>) -> Self {
        let mut stack = vec![LegacyMapElement::new(
            LegacyElementType::Surface,
            GROUND,
            GROUND,
            [0; 4],
        )];
        stack.extend(elements);
        if let Some(last) = stack.last_mut() {
            *last = last.last_for_tile();
        }
        self.tiles[y * LEGACY_MAP_SIZE + x] = stack;
        self
    }

    pub fn path(self, x: usize, y: usize) -> Self {
        self.tile(x, y, vec![tarmac_path()])
    }

    pub fn ride(mut self, slot: usize, ride: LegacyRide) -> Self {
        self.save.rides[slot] = ride;
        self
    }

    pub fn sprite(mut self, slot: usize, sprite: LegacySprite) -> Self {
        if self.save.sprites.len() <= slot {
            self.save.sprites.resize(slot + 1, LegacySprite::Empty);
        }
        self.save.sprites[slot] = sprite;
        self
    }

    pub fn research(mut self, items: Vec<LegacyResearchItem>) -> Self {
        if self.version.has_separate_research_list() {
            self.save.research_items_ll = items;
        } else {
            self.save.research_items = items;
        }
        self
    }

    pub fn edit(mut self, f: impl FnOnce(&mut LegacySave)) -> Self {
        f(&mut self.save);
        self
    }

    pub fn build(mut self) -> LegacySave {
        self.save.map_elements = self.tiles.into_iter().flatten().collect();
        self.save
    }
}

pub fn tarmac_path() -> LegacyMapElement {
    LegacyMapElement::new(LegacyElementType::Path, GROUND, GROUND + 4, [0x10, 0, 0x0F, 0])
}

pub fn park_entrance() -> LegacyMapElement {
    LegacyMapElement::new(
        LegacyElementType::Entrance,
        GROUND,
        GROUND + 8,
        [LEGACY_ENTRANCE_PARK_ENTRANCE, 0, 0, 0],
    )
}

/// Wooden coaster with a steel train, one station starting at (x, y).
pub fn coaster_at(x: u8, y: u8) -> LegacyRide {
    let mut ride = LegacyRide {
        ride_type: 0,
        vehicle_type: 0,
        num_stations: 1,
        num_trains: 2,
        num_cars_per_train: 4,
        ..LegacyRide::default()
    };
    ride.station_starts[0] = u16::from(x) | (u16::from(y) << 8);
    ride.station_height[0] = GROUND;
    ride
}

/// Guest walking at the centre of tile (x, y).
pub fn guest_at(x: i16, y: i16) -> LegacyPeep {
    let mut peep = LegacyPeep {
        state: 5,
        next_in_queue: LEGACY_SPRITE_INDEX_NULL,
        ..LegacyPeep::default()
    };
    peep.position.x = x * 32 + 16;
    peep.position.y = y * 32 + 16;
    peep.position.z = i16::from(GROUND) * 8;
    peep
}

pub fn import_with(
    save: &LegacySave,
    version: FormatVersion,
    catalog: &mut ObjectCatalog,
    options: &ImportOptions,
) -> Result<(ParkWorld, ImportReport), ImportError> {
    let mut world = ParkWorld::default();
    let report = import_park_with(save, version, catalog, &mut world, options)?;
    Ok((world, report))
}

/// Imports with every object available and default options.
pub fn import(save: &LegacySave, version: FormatVersion) -> (ParkWorld, ImportReport) {
    let mut catalog = ObjectCatalog::permissive();
    import_with(save, version, &mut catalog, &ImportOptions::default())
        .expect("fixture import should succeed")
}
