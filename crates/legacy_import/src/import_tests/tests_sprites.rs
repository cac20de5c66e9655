use park::config::LOCATION_NULL;
use park::sprites::{PeepState, SpriteIndex};

use super::fixtures::*;
use crate::format_version::FormatVersion;
use crate::import_error::{ImportDiagnostic, UnsupportedEntity};
use crate::importer::ImportOptions;
use crate::legacy_types::sprite::{LEGACY_PEEP_STATE_ON_RIDE, MISC_DUCK};
use crate::legacy_types::{LegacyLitter, LegacyMisc, LegacyPeep, LegacySave, LegacySprite};

fn rider_on(ride: u8) -> LegacyPeep {
    let mut peep = guest_at(0, 0);
    peep.position.x = LOCATION_NULL;
    peep.state = LEGACY_PEEP_STATE_ON_RIDE;
    peep.current_ride = ride;
    peep.current_ride_station = 0;
    peep
}

fn park_with_rider() -> LegacySave {
    SaveBuilder::new(FormatVersion::Classic)
        .path(20, 21)
        .ride(4, coaster_at(20, 20))
        .sprite(3, LegacySprite::Peep(Box::new(rider_on(4))))
        .build()
}

#[test]
fn test_rider_is_moved_to_nearest_path() {
    let save = park_with_rider();
    let (world, report) = import(&save, FormatVersion::Classic);

    let peep = world.sprites.peep(SpriteIndex(0)).unwrap();
    assert_eq!(peep.state, PeepState::Falling);
    assert_eq!(
        (peep.position.x, peep.position.y),
        (20 * 32 + 16, 21 * 32 + 16)
    );
    assert_eq!(peep.position.z, i16::from(GROUND / 2) * 8);
    assert!(report.diagnostics.contains(&ImportDiagnostic::UnsupportedEntity(
        UnsupportedEntity::PeepOnRide { legacy_sprite: 3 }
    )));
}

#[test]
fn test_rider_left_in_place_without_autoposition() {
    let save = park_with_rider();
    let options = ImportOptions {
        autoposition_displaced_peeps: false,
        ..Default::default()
    };
    let mut catalog = park::objects::ObjectCatalog::permissive();
    let (world, _) = import_with(&save, FormatVersion::Classic, &mut catalog, &options).unwrap();

    let peep = world.sprites.peep(SpriteIndex(0)).unwrap();
    assert_eq!(peep.state, PeepState::Falling);
    assert_eq!(peep.position.x, LOCATION_NULL);
}

#[test]
fn test_queue_head_survives_remap() {
    let mut tail = guest_at(20, 21);
    tail.state = 6;
    let mut head = guest_at(20, 21);
    head.state = 6;
    head.next_in_queue = 5;
    let save = SaveBuilder::new(FormatVersion::AddedAttractions)
        .path(20, 21)
        .ride(4, coaster_at(20, 20))
        .sprite(0, LegacySprite::Litter(LegacyLitter::default()))
        .sprite(2, LegacySprite::Peep(Box::new(head)))
        .sprite(5, LegacySprite::Peep(Box::new(tail)))
        .edit(|save| {
            save.rides[4].last_peep_in_queue[0] = 2;
            save.rides[4].num_peeps_in_queue[0] = 2;
        })
        .build();
    let (world, report) = import(&save, FormatVersion::AddedAttractions);

    assert_eq!(report.peeps_imported, 2);
    assert_eq!(report.litter_imported, 1);
    let station = &world.rides.get(4).unwrap().stations[0];
    assert_eq!(station.last_peep_in_queue, Some(SpriteIndex(0)));
    assert_eq!(station.queue_length, 0);
    let head = world.sprites.peep(SpriteIndex(0)).unwrap();
    assert_eq!(head.next_in_queue, Some(SpriteIndex(1)));
    assert_eq!(head.state, PeepState::Queuing);
}

#[test]
fn test_litter_and_misc_options() {
    let duck = LegacyMisc {
        misc_type: MISC_DUCK,
        ..LegacyMisc::default()
    };
    let unknown = LegacyMisc {
        misc_type: 42,
        ..LegacyMisc::default()
    };
    let save = SaveBuilder::new(FormatVersion::Classic)
        .sprite(0, LegacySprite::Litter(LegacyLitter::default()))
        .sprite(1, LegacySprite::Misc(duck))
        .sprite(2, LegacySprite::Misc(unknown))
        .sprite(3, LegacySprite::Vehicle)
        .build();

    let (_, kept) = import(&save, FormatVersion::Classic);
    assert_eq!(kept.litter_imported, 1);
    assert_eq!(kept.misc_sprites_imported, 1);
    assert!(kept.diagnostics.contains(&ImportDiagnostic::UnsupportedEntity(
        UnsupportedEntity::UnknownMiscSprite {
            legacy_sprite: 2,
            misc_type: 42,
        }
    )));

    let options = ImportOptions {
        keep_litter: false,
        ..Default::default()
    };
    let mut catalog = park::objects::ObjectCatalog::permissive();
    let (world, dropped) =
        import_with(&save, FormatVersion::Classic, &mut catalog, &options).unwrap();
    assert_eq!(dropped.litter_imported, 0);
    assert_eq!(world.sprites.len(), 1);
}
