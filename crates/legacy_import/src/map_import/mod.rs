// ---------------------------------------------------------------------------
// Map import: stage the legacy tiles, run the fixup passes, write the map
// ---------------------------------------------------------------------------

pub mod passes;
pub mod staging;

use bevy::log::{debug, info, warn};
use park::ParkWorld;

use crate::legacy_types::LegacySave;
use crate::object_mapping::ObjectMappings;
use passes::{MapPass, MAP_PASSES};
use staging::StagedMap;

/// What [`import_map`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapImport {
    /// Elements in the destination map.
    pub elements: usize,
    pub walls: usize,
    pub banners: usize,
    pub park_entrances: usize,
    /// Paths and scenery dropped because their type has no object slot.
    pub dropped: usize,
}

/// Runs the fixup passes over a staged map in their fixed order.
pub struct MapTranscoder<'a> {
    save: &'a LegacySave,
    mappings: &'a ObjectMappings,
}

impl<'a> MapTranscoder<'a> {
    pub fn new(save: &'a LegacySave, mappings: &'a ObjectMappings) -> Self {
        Self { save, mappings }
    }

    pub fn stage(&self) -> StagedMap {
        StagedMap::from_legacy(&self.save.map_elements)
    }

    pub fn run_pass(
        &self,
        pass: MapPass,
        map: &mut StagedMap,
        world: &mut ParkWorld,
        result: &mut MapImport,
    ) {
        match pass {
            MapPass::Colour => passes::fix_colours(map),
            MapPass::Z => passes::fix_z(map),
            MapPass::Paths => result.dropped += passes::fix_paths(map, self.mappings),
            MapPass::Walls => result.walls = passes::fix_walls(map, self.mappings),
            MapPass::Banners => {
                result.banners = passes::fix_banners(
                    map,
                    self.save,
                    &mut world.banners,
                    &mut world.user_strings,
                )
            }
            MapPass::Terrain => passes::fix_terrain(map),
            MapPass::Entrances => {
                world.tiles.park_entrances = passes::find_park_entrances(map);
                result.park_entrances = world.tiles.park_entrances.len();
            }
            MapPass::EntryTypeRemap => {
                result.dropped += passes::remap_entry_types(map, self.mappings)
            }
        }
        debug!("Map pass {pass} done");
    }
}

/// Transcodes the legacy map into `world.tiles`, importing banners and park
/// entrances on the way.
pub fn import_map(save: &LegacySave, mappings: &ObjectMappings, world: &mut ParkWorld) -> MapImport {
    let transcoder = MapTranscoder::new(save, mappings);
    let mut map = transcoder.stage();
    let mut result = MapImport::default();
    for pass in MAP_PASSES {
        transcoder.run_pass(pass, &mut map, world, &mut result);
    }

    for (x, y, elements) in map.into_tiles() {
        world.tiles.set_tile(x, y, elements);
    }
    result.elements = world.tiles.element_count();

    if result.dropped > 0 {
        warn!(
            "Dropped {} map elements with no object slot",
            result.dropped
        );
    }
    info!(
        "Imported map: {} elements, {} walls, {} banners, {} park entrances",
        result.elements, result.walls, result.banners, result.park_entrances
    );
    result
}
