use park::objects::ObjectType;
use park::research::{ResearchCategory, ResearchItem};
use park::rides::{RideName, RideStatus};
use park::tile_map::EntranceType;

use super::fixtures::*;
use crate::format_version::FormatVersion;
use crate::legacy_types::save::*;
use crate::legacy_types::LegacySprite;
use crate::tables::scenery::DEFAULT_SCENERY_GROUPS;

#[test]
fn test_blank_park() {
    let save = SaveBuilder::new(FormatVersion::Classic).build();
    let (world, report) = import(&save, FormatVersion::Classic);

    assert_eq!(report.rides_imported, 0);
    assert_eq!(report.peeps_imported, 0);
    assert_eq!(report.objects_of(ObjectType::Ride), 0);
    assert_eq!(report.objects_of(ObjectType::Banner), 9);
    assert_eq!(report.objects_of(ObjectType::ParkEntrance), 1);
    assert_eq!(report.objects_of(ObjectType::Water), 1);
    assert_eq!(report.tile_elements, 256 * 256);
    assert_eq!(report.research_entries, DEFAULT_SCENERY_GROUPS.len());
    assert!(report.diagnostics.is_empty());
    assert_eq!(world.tiles.size, 128);
}

#[test]
fn test_small_park_end_to_end() {
    let version = FormatVersion::AddedAttractions;
    let save = SaveBuilder::new(version)
        .path(10, 11)
        .tile(12, 12, vec![park_entrance()])
        .ride(3, coaster_at(10, 10))
        .sprite(0, LegacySprite::Peep(Box::new(guest_at(10, 11))))
        .research(vec![
            LegacyResearchItem::vehicle(0, 0),
            LegacyResearchItem::ride(0),
            LegacyResearchItem::marker(RESEARCH_END_AVAILABLE),
            LegacyResearchItem::marker(RESEARCH_END),
        ])
        .edit(|save| {
            save.scenario.name = "Pokey Park".to_owned();
            save.finance.cash = 10_000;
            let name = save.add_user_string("Big Dipper").unwrap_or_default();
            save.rides[3].name = name;
        })
        .build();
    let (world, report) = import(&save, version);

    // Ride kept in its slot, closed, pointing at the steel train object.
    assert_eq!(report.rides_imported, 1);
    let ride = world.rides.get(3).unwrap();
    assert_eq!(ride.status, RideStatus::Closed);
    assert_eq!(ride.stations[0].start, Some((10, 10)));
    assert_eq!(ride.stations[0].height, GROUND / 2);
    let RideName::Custom(name) = ride.name else {
        panic!("expected a custom ride name");
    };
    assert_eq!(world.user_strings.get(name), Some("Big Dipper"));
    let object = world.objects.ride(ride.subtype as usize).unwrap();
    assert_eq!(object.identifier.name(), "SCHT1");

    // The research list unlocks the same object.
    assert!(world
        .research
        .researched()
        .any(|item| *item
            == ResearchItem::RideEntry {
                slot: ride.subtype,
                category: ResearchCategory::Rollercoaster,
            }));

    // Map and entrance.
    assert!(world.tiles.tile(10, 11).iter().any(|e| e.as_path().is_some()));
    let entrance = world.tiles.tile(12, 12)[1].as_entrance().unwrap();
    assert_eq!(entrance.entrance_type, EntranceType::ParkEntrance);
    assert_eq!(world.tiles.park_entrances.len(), 1);

    // Scalars.
    assert_eq!(report.peeps_imported, 1);
    assert_eq!(world.sprites.guests_in_park, 1);
    assert_eq!(world.finance.cash, 10_000);
    assert_eq!(world.scenario.name, "Pokey Park");
    assert_eq!(
        world.park.name.and_then(|id| world.user_strings.get(id)),
        Some("Pokey Park")
    );
}

#[test]
fn test_heights_are_halved_everywhere() {
    let save = SaveBuilder::new(FormatVersion::Classic)
        .path(5, 5)
        .edit(|save| {
            save.map_animations = vec![park::park_state::MapAnimation {
                base_z: GROUND,
                animation_type: 1,
                x: 5 * 32,
                y: 5 * 32,
            }];
        })
        .build();
    let (world, _) = import(&save, FormatVersion::Classic);

    let tile = world.tiles.tile(5, 5);
    assert!(tile.iter().all(|e| e.base_height == GROUND / 2));
    assert_eq!(world.tiles.surface_height(5, 5), Some(GROUND / 2));
    assert_eq!(world.park.map_animations[0].base_z, GROUND / 2);
}

#[test]
fn test_reimport_replaces_world() {
    let version = FormatVersion::Classic;
    let busy = SaveBuilder::new(version)
        .ride(0, coaster_at(1, 1))
        .sprite(0, LegacySprite::Peep(Box::new(guest_at(3, 3))))
        .build();
    let blank = SaveBuilder::new(version).build();

    let mut catalog = park::objects::ObjectCatalog::permissive();
    let mut world = park::ParkWorld::default();
    crate::importer::import_park(&busy, version, &mut catalog, &mut world).unwrap();
    assert_eq!(world.rides.count(), 1);

    crate::importer::import_park(&blank, version, &mut catalog, &mut world).unwrap();
    assert_eq!(world.rides.count(), 0);
    assert!(world.sprites.is_empty());
}

#[test]
fn test_loopy_landscapes_reads_its_own_research_list() {
    let version = FormatVersion::LoopyLandscapes;
    let save = SaveBuilder::new(version)
        .research(vec![
            LegacyResearchItem::theme(3),
            LegacyResearchItem::marker(RESEARCH_END_AVAILABLE),
            LegacyResearchItem::marker(RESEARCH_END),
        ])
        .edit(|save| {
            // The shared list is ignored by this release.
            save.research_items = vec![
                LegacyResearchItem::theme(4),
                LegacyResearchItem::marker(RESEARCH_END),
            ];
        })
        .build();
    let (world, report) = import(&save, version);

    assert_eq!(report.research_entries, 7);
    let groups: Vec<_> = (0..world.objects.slot_count(ObjectType::SceneryGroup))
        .filter_map(|slot| world.objects.get(ObjectType::SceneryGroup, slot))
        .map(|object| object.identifier.name().to_owned())
        .collect();
    assert!(groups.iter().any(|name| name == "SCGEGYPT"));
    assert!(!groups.iter().any(|name| name == "SCGMART"));
}
