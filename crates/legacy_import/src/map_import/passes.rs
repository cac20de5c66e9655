// ---------------------------------------------------------------------------
// Map fixup passes
// ---------------------------------------------------------------------------
//
// Each pass rewrites one concern of the staged map in place. They run in
// the order of `MAP_PASSES`; later passes rely on the units and codes the
// earlier ones leave behind (walls read remapped colours, entrances read
// rescaled heights, the colour pass reads legacy scenery types).

use std::fmt;

use park::banners::{Banner, BannerTable, BannerText};
use park::colour::Colour;
use park::config::{COORDS_XY_STEP, COORDS_Z_STEP, MAX_PARK_ENTRANCES};
use park::tile_map::{
    EntranceType, ParkEntrance, PathAddition, TileElement, TileElementKind, WallElement,
};
use park::user_strings::UserStringTable;

use super::staging::{StagedElement, StagedMap};
use crate::legacy_types::LegacySave;
use crate::object_mapping::ObjectMappings;
use crate::tables::colours::convert_colour;
use crate::tables::paths::{normalise_path_addition, path_is_queue};
use crate::tables::scenery::GEOMETRIC_SCULPTURES;
use crate::tables::terrain::{convert_terrain, convert_terrain_edge};
use crate::tables::walls::convert_wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapPass {
    Colour,
    Z,
    Paths,
    Walls,
    Banners,
    Terrain,
    Entrances,
    EntryTypeRemap,
}

pub const MAP_PASSES: [MapPass; 8] = [
    MapPass::Colour,
    MapPass::Z,
    MapPass::Paths,
    MapPass::Walls,
    MapPass::Banners,
    MapPass::Terrain,
    MapPass::Entrances,
    MapPass::EntryTypeRemap,
];

impl fmt::Display for MapPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MapPass::Colour => "colour",
            MapPass::Z => "z",
            MapPass::Paths => "paths",
            MapPass::Walls => "walls",
            MapPass::Banners => "banners",
            MapPass::Terrain => "terrain",
            MapPass::Entrances => "entrances",
            MapPass::EntryTypeRemap => "entry type remap",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Colour / Z
// =============================================================================

pub fn fix_colours(map: &mut StagedMap) {
    for staged in map.elements_mut() {
        match staged {
            StagedElement::Element(element) => match &mut element.kind {
                TileElementKind::SmallScenery(scenery) => {
                    scenery.colour_1 = convert_colour(scenery.colour_1.0);
                    if GEOMETRIC_SCULPTURES.contains(&scenery.entry_index) {
                        scenery.colour_2 = Colour::WHITE;
                    }
                }
                TileElementKind::LargeScenery(scenery) => {
                    scenery.colour_1 = convert_colour(scenery.colour_1.0);
                    scenery.colour_2 = convert_colour(scenery.colour_2.0);
                }
                _ => {}
            },
            StagedElement::PackedWalls { colour, .. } => *colour = convert_colour(colour.0),
        }
    }
}

/// Halves every height. Blank template heights are left alone.
pub fn fix_z(map: &mut StagedMap) {
    for staged in map.elements_mut() {
        let (base, clearance) = staged.heights_mut();
        if *base != TileElement::BLANK_HEIGHT {
            *base /= 2;
            *clearance /= 2;
        }
    }
}

// =============================================================================
// Paths / Walls
// =============================================================================

/// Resolves path surfaces, queue flags and additions to object slots.
/// Paths whose surface has no slot are removed. Returns how many elements
/// were removed.
pub fn fix_paths(map: &mut StagedMap, mappings: &ObjectMappings) -> usize {
    let mut removed = 0;
    for tile in map.tiles_mut() {
        tile.retain_mut(|staged| {
            let Some(kind) = staged.kind_mut() else {
                return true;
            };
            match kind {
                TileElementKind::Path(path) => {
                    let code = path.entry_index;
                    let Some(slot) = mappings.path_map.resolve(code as usize) else {
                        removed += 1;
                        return false;
                    };
                    path.entry_index = slot;
                    path.is_queue = path_is_queue(code);
                    path.addition = path.addition.and_then(|addition| {
                        let raw = addition.entry_index;
                        let normalised = normalise_path_addition(raw);
                        mappings
                            .path_addition_map
                            .resolve(normalised as usize)
                            .map(|slot| PathAddition {
                                entry_index: slot,
                                is_broken: normalised != raw,
                            })
                    });
                    true
                }
                TileElementKind::Entrance(entrance)
                    if entrance.entrance_type == EntranceType::ParkEntrance =>
                {
                    // Park entrances always draw a path; fall back to the first.
                    entrance.path_entry = mappings
                        .path_map
                        .resolve(entrance.path_entry as usize)
                        .unwrap_or(0);
                    true
                }
                _ => true,
            }
        });
    }
    removed
}

/// Replaces each packed fence element with one wall per occupied edge.
/// Edges whose wall has no slot are dropped. Returns the number of walls
/// created.
pub fn fix_walls(map: &mut StagedMap, mappings: &ObjectMappings) -> usize {
    let mut created = 0;
    for tile in map.tiles_mut() {
        if !tile
            .iter()
            .any(|staged| matches!(staged, StagedElement::PackedWalls { .. }))
        {
            continue;
        }
        let staged_tile = std::mem::take(tile);
        for staged in staged_tile {
            let StagedElement::PackedWalls {
                base_height,
                clearance_height,
                colour,
                edges,
            } = staged
            else {
                tile.push(staged);
                continue;
            };
            for edge in edges.into_iter().flatten() {
                let converted = convert_wall(edge.code, colour);
                let Some(slot) = mappings.wall_map.resolve(converted.code as usize) else {
                    continue;
                };
                let [colour_1, colour_2, colour_3] = converted.colours;
                tile.push(StagedElement::Element(TileElement {
                    base_height,
                    clearance_height,
                    direction: edge.edge,
                    quadrants: 0,
                    kind: TileElementKind::Wall(WallElement {
                        entry_index: slot,
                        colour_1,
                        colour_2,
                        colour_3,
                    }),
                }));
                created += 1;
            }
        }
    }
    created
}

// =============================================================================
// Banners / Terrain / Entrances
// =============================================================================

/// Imports the banner record behind every banner element once. Returns the
/// number of banners imported.
pub fn fix_banners(
    map: &StagedMap,
    save: &LegacySave,
    banners: &mut BannerTable,
    strings: &mut UserStringTable,
) -> usize {
    let mut imported = 0;
    for (_, _, staged) in map.iter() {
        let Some(TileElementKind::Banner(element)) = staged.element().map(|e| &e.kind) else {
            continue;
        };
        let index = element.index as usize;
        if banners.get(index).is_some() {
            continue;
        }
        let Some(src) = save.banners.get(index) else {
            continue;
        };
        let text = save
            .user_string(src.string_idx)
            .and_then(|text| strings.allocate(text))
            .map_or(BannerText::Default, BannerText::Custom);
        let banner = Banner {
            entry_index: src.banner_type,
            flags: src.flags,
            text,
            colour: convert_colour(src.colour),
            text_colour: src.text_colour,
            x: src.x,
            y: src.y,
        };
        if banners.set(index, banner) {
            imported += 1;
        }
    }
    imported
}

pub fn fix_terrain(map: &mut StagedMap) {
    for kind in map.elements_mut().filter_map(StagedElement::kind_mut) {
        if let TileElementKind::Surface(surface) = kind {
            surface.terrain = convert_terrain(surface.terrain);
            surface.terrain_edge = convert_terrain_edge(surface.terrain_edge);
        }
    }
}

/// World positions of the first park entrances, by primary tile, in x-major
/// tile order.
pub fn find_park_entrances(map: &StagedMap) -> Vec<ParkEntrance> {
    map.iter()
        .filter_map(|(x, y, staged)| {
            let element = staged.element()?;
            let entrance = element.as_entrance()?;
            (entrance.entrance_type == EntranceType::ParkEntrance && entrance.sequence == 0)
                .then(|| ParkEntrance {
                    x: x as i32 * COORDS_XY_STEP,
                    y: y as i32 * COORDS_XY_STEP,
                    z: i32::from(element.base_height) * COORDS_Z_STEP,
                    direction: element.direction,
                })
        })
        .take(MAX_PARK_ENTRANCES)
        .collect()
}

// =============================================================================
// Entry type remap
// =============================================================================

/// Points small and large scenery at their object slots. Scenery without a
/// slot is removed. Returns how many elements were removed.
pub fn remap_entry_types(map: &mut StagedMap, mappings: &ObjectMappings) -> usize {
    let mut removed = 0;
    for tile in map.tiles_mut() {
        tile.retain_mut(|staged| {
            let resolved = match staged.kind_mut() {
                Some(TileElementKind::SmallScenery(scenery)) => mappings
                    .small_scenery_map
                    .resolve(scenery.entry_index as usize)
                    .map(|slot| scenery.entry_index = slot),
                Some(TileElementKind::LargeScenery(scenery)) => mappings
                    .large_scenery_map
                    .resolve(scenery.entry_index as usize)
                    .map(|slot| scenery.entry_index = u16::from(slot)),
                _ => Some(()),
            };
            if resolved.is_none() {
                removed += 1;
            }
            resolved.is_some()
        });
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy_types::map_element::{pack_wall_edges, LegacyElementType, LegacyMapElement};
    use crate::legacy_types::save::USER_STRING_START;
    use crate::legacy_types::LegacyBanner;
    use crate::format_version::FormatVersion;
    use crate::map_import::staging::stage_element;
    use park::tile_map::{
        BannerElement, EntranceElement, LargeSceneryElement, PathElement, SmallSceneryElement,
        SurfaceElement,
    };

    fn single(element: TileElement) -> StagedMap {
        let mut map = StagedMap::from_legacy(&[]);
        map.tile_mut(2, 3).push(StagedElement::Element(element));
        map
    }

    fn element(base: u8, kind: TileElementKind) -> TileElement {
        TileElement {
            base_height: base,
            clearance_height: base + 4,
            direction: 1,
            quadrants: 0,
            kind,
        }
    }

    fn last(map: &StagedMap) -> &TileElement {
        map.tile(2, 3).last().and_then(StagedElement::element).unwrap()
    }

    #[test]
    fn test_pass_order() {
        let names: Vec<String> = MAP_PASSES.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            [
                "colour",
                "z",
                "paths",
                "walls",
                "banners",
                "terrain",
                "entrances",
                "entry type remap"
            ]
        );
    }

    #[test]
    fn test_geometric_sculpture_second_colour() {
        let mut map = single(element(
            10,
            TileElementKind::SmallScenery(SmallSceneryElement {
                entry_index: 162,
                colour_1: Colour(3),
                ..SmallSceneryElement::default()
            }),
        ));
        fix_colours(&mut map);
        let TileElementKind::SmallScenery(scenery) = &last(&map).kind else {
            panic!("expected small scenery");
        };
        assert_eq!(scenery.colour_1, convert_colour(3));
        assert_eq!(scenery.colour_2, Colour::WHITE);
    }

    #[test]
    fn test_large_scenery_both_colours() {
        let mut map = single(element(
            10,
            TileElementKind::LargeScenery(LargeSceneryElement {
                colour_1: Colour(4),
                colour_2: Colour(9),
                ..LargeSceneryElement::default()
            }),
        ));
        fix_colours(&mut map);
        let TileElementKind::LargeScenery(scenery) = &last(&map).kind else {
            panic!("expected large scenery");
        };
        assert_eq!(scenery.colour_1, convert_colour(4));
        assert_eq!(scenery.colour_2, convert_colour(9));
    }

    #[test]
    fn test_z_halves_except_blank() {
        let mut map = single(element(15, TileElementKind::Surface(SurfaceElement::default())));
        map.tile_mut(2, 3)
            .push(StagedElement::Element(TileElement::blank_surface(
                TileElement::BLANK_HEIGHT,
            )));
        fix_z(&mut map);
        let tile = map.tile(2, 3);
        let surface = tile[1].element().unwrap();
        assert_eq!((surface.base_height, surface.clearance_height), (7, 9));
        assert_eq!(
            tile[2].element().unwrap().base_height,
            TileElement::BLANK_HEIGHT
        );
        // Blank padding surfaces go from 2 to 1.
        assert_eq!(map.tile(100, 100)[0].element().unwrap().base_height, 1);
    }

    fn path_mappings() -> ObjectMappings {
        let mut mappings = ObjectMappings::default();
        mappings.path_map.assign(4, 0);
        mappings.path_map.assign(1, 1);
        mappings.path_addition_map.assign(1, 3);
        mappings.path_addition_map.assign(8, 3);
        mappings
    }

    #[test]
    fn test_paths_resolve_queue_and_broken_addition() {
        let mut map = single(element(
            7,
            TileElementKind::Path(PathElement {
                entry_index: 1,
                addition: Some(PathAddition {
                    entry_index: 8,
                    is_broken: false,
                }),
                ..PathElement::default()
            }),
        ));
        let removed = fix_paths(&mut map, &path_mappings());
        assert_eq!(removed, 0);
        let path = last(&map).as_path().unwrap();
        assert_eq!(path.entry_index, 1);
        assert!(path.is_queue);
        assert_eq!(
            path.addition,
            Some(PathAddition {
                entry_index: 3,
                is_broken: true
            })
        );
    }

    #[test]
    fn test_unmapped_path_is_removed() {
        let mut map = single(element(
            7,
            TileElementKind::Path(PathElement {
                entry_index: 20,
                ..PathElement::default()
            }),
        ));
        assert_eq!(fix_paths(&mut map, &path_mappings()), 1);
        assert_eq!(map.tile(2, 3).len(), 1);
    }

    #[test]
    fn test_park_entrance_path_resolved() {
        let mut map = single(element(
            7,
            TileElementKind::Entrance(EntranceElement {
                entrance_type: EntranceType::ParkEntrance,
                sequence: 0,
                station_index: 0,
                path_entry: 1,
                ride_index: 0,
            }),
        ));
        fix_paths(&mut map, &path_mappings());
        assert_eq!(last(&map).as_entrance().map(|e| e.path_entry), Some(1));
    }

    #[test]
    fn test_walls_expand_per_edge() {
        let [p1, p2, p3] = pack_wall_edges([Some(5), None, Some(26), Some(40)]);
        let fence = LegacyMapElement::new(LegacyElementType::Fence, 10, 14, [0, p1, p2, p3]);
        let mut map = StagedMap::from_legacy(&[]);
        map.tile_mut(2, 3).push(stage_element(&fence).unwrap());
        let mut mappings = ObjectMappings::default();
        mappings.wall_map.assign(5, 0);
        mappings.wall_map.assign(12, 1);

        let created = fix_walls(&mut map, &mappings);
        // Code 40 has no slot and is dropped.
        assert_eq!(created, 2);
        let walls: Vec<(u8, &WallElement)> = map
            .tile(2, 3)
            .iter()
            .filter_map(StagedElement::element)
            .filter_map(|e| e.as_wall().map(|w| (e.direction, w)))
            .collect();
        assert_eq!(walls.len(), 2);
        assert_eq!(walls[0].0, 0);
        assert_eq!(walls[0].1.entry_index, 0);
        // Code 26 draws as code 12 in white.
        assert_eq!(walls[1].0, 2);
        assert_eq!(walls[1].1.entry_index, 1);
        assert_eq!(walls[1].1.colour_1, Colour::WHITE);
        assert!(map
            .tile(2, 3)
            .iter()
            .all(|s| matches!(s, StagedElement::Element(_))));
    }

    #[test]
    fn test_four_wall_edges_give_four_walls() {
        let [p1, p2, p3] = pack_wall_edges([Some(5), Some(26), Some(13), Some(2)]);
        let fence = LegacyMapElement::new(LegacyElementType::Fence, 10, 14, [0, p1, p2, p3]);
        let mut map = StagedMap::from_legacy(&[]);
        map.tile_mut(2, 3).push(stage_element(&fence).unwrap());
        let Some(StagedElement::PackedWalls { colour, .. }) = map.tile_mut(2, 3).last_mut() else {
            panic!("expected packed walls");
        };
        *colour = Colour::TEAL;
        let mut mappings = ObjectMappings::default();
        mappings.wall_map.assign(5, 0);
        mappings.wall_map.assign(12, 1);
        mappings.wall_map.assign(13, 2);
        mappings.wall_map.assign(2, 3);

        assert_eq!(fix_walls(&mut map, &mappings), 4);
        let walls: Vec<(u8, WallElement)> = map
            .tile(2, 3)
            .iter()
            .filter_map(StagedElement::element)
            .filter_map(|e| e.as_wall().map(|w| (e.direction, *w)))
            .collect();
        assert_eq!(walls.len(), 4);
        let directions: Vec<u8> = walls.iter().map(|(d, _)| *d).collect();
        assert_eq!(directions, vec![0, 1, 2, 3]);
        let entries: Vec<u8> = walls.iter().map(|(_, w)| w.entry_index).collect();
        assert_eq!(entries, vec![0, 1, 2, 3]);

        // Plain codes keep the fence colour.
        assert_eq!(walls[0].1.colour_1, Colour::TEAL);
        assert_eq!(walls[0].1.colour_2, Colour::BLACK);
        // Code 26 draws as code 12 in white.
        assert_eq!(walls[1].1.colour_1, Colour::WHITE);
        // Code 13 moves the fence colour to the second channel.
        assert_eq!(walls[2].1.colour_1, Colour::DARK_BROWN);
        assert_eq!(walls[2].1.colour_2, Colour::TEAL);
        assert_eq!(walls[3].1.colour_1, Colour::TEAL);
        assert_eq!(walls[3].1.colour_2, Colour::BLACK);
    }

    #[test]
    fn test_banner_imported_once_with_text() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.user_strings[0] = "Exit".to_string();
        save.banners[5] = LegacyBanner {
            banner_type: 2,
            string_idx: USER_STRING_START,
            colour: 4,
            x: 2,
            y: 3,
            ..LegacyBanner::default()
        };
        let banner = element(
            7,
            TileElementKind::Banner(BannerElement {
                index: 5,
                position: 0,
                flags: 0,
            }),
        );
        let mut map = single(banner.clone());
        map.tile_mut(2, 3).push(StagedElement::Element(banner));
        let mut banners = BannerTable::default();
        let mut strings = UserStringTable::default();

        assert_eq!(fix_banners(&map, &save, &mut banners, &mut strings), 1);
        let imported = banners.get(5).unwrap();
        assert_eq!(imported.entry_index, 2);
        assert_eq!(imported.colour, convert_colour(4));
        let BannerText::Custom(id) = imported.text else {
            panic!("expected custom text");
        };
        assert_eq!(strings.get(id), Some("Exit"));
        assert_eq!(strings.len(), 1);
    }

    #[test]
    fn test_banner_without_text_uses_default() {
        let mut save = LegacySave::blank(FormatVersion::Classic);
        save.banners[0].colour = 1;
        let map = single(element(
            7,
            TileElementKind::Banner(BannerElement::default()),
        ));
        let mut banners = BannerTable::default();
        fix_banners(&map, &save, &mut banners, &mut UserStringTable::default());
        assert_eq!(banners.get(0).map(|b| b.text), Some(BannerText::Default));
    }

    #[test]
    fn test_terrain_codes_converted() {
        let mut map = single(element(
            7,
            TileElementKind::Surface(SurfaceElement {
                terrain: 3,
                terrain_edge: 2,
                ..SurfaceElement::default()
            }),
        ));
        fix_terrain(&mut map);
        let surface = last(&map).as_surface().unwrap();
        assert_eq!(surface.terrain, convert_terrain(3));
        assert_eq!(surface.terrain_edge, convert_terrain_edge(2));
    }

    #[test]
    fn test_park_entrances_primary_tiles_only() {
        let mut map = StagedMap::from_legacy(&[]);
        let entrance = |sequence| {
            StagedElement::Element(element(
                7,
                TileElementKind::Entrance(EntranceElement {
                    entrance_type: EntranceType::ParkEntrance,
                    sequence,
                    station_index: 0,
                    path_entry: 0,
                    ride_index: 0,
                }),
            ))
        };
        map.tile_mut(5, 1).push(entrance(0));
        map.tile_mut(5, 2).push(entrance(1));
        map.tile_mut(1, 9).push(entrance(0));
        for x in 10..15 {
            map.tile_mut(x, 0).push(entrance(0));
        }
        let found = find_park_entrances(&map);
        assert_eq!(found.len(), 4);
        assert_eq!(
            found[0],
            ParkEntrance {
                x: 32,
                y: 9 * 32,
                z: 56,
                direction: 1
            }
        );
        assert_eq!((found[1].x, found[1].y), (5 * 32, 32));
        assert_eq!(found[2].x, 10 * 32);
    }

    #[test]
    fn test_entry_types_remapped() {
        let mut map = single(element(
            7,
            TileElementKind::SmallScenery(SmallSceneryElement {
                entry_index: 40,
                ..SmallSceneryElement::default()
            }),
        ));
        map.tile_mut(2, 3).push(StagedElement::Element(element(
            7,
            TileElementKind::LargeScenery(LargeSceneryElement {
                entry_index: 700,
                ..LargeSceneryElement::default()
            }),
        )));
        map.tile_mut(2, 3).push(StagedElement::Element(element(
            7,
            TileElementKind::SmallScenery(SmallSceneryElement {
                entry_index: 41,
                ..SmallSceneryElement::default()
            }),
        )));
        let mut mappings = ObjectMappings::default();
        mappings.small_scenery_map.assign(40, 2);
        mappings.large_scenery_map.assign(700, 9);

        assert_eq!(remap_entry_types(&mut map, &mappings), 1);
        let tile = map.tile(2, 3);
        assert_eq!(tile.len(), 3);
        let TileElementKind::SmallScenery(small) = &tile[1].element().unwrap().kind else {
            panic!("expected small scenery");
        };
        assert_eq!(small.entry_index, 2);
        let TileElementKind::LargeScenery(large) = &tile[2].element().unwrap().kind else {
            panic!("expected large scenery");
        };
        assert_eq!(large.entry_index, 9);
    }
}
