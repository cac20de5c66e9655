use park::objects::{ObjectCatalog, ObjectIdentifier, ObjectType};
use park::ParkWorld;

use super::fixtures::*;
use crate::format_version::FormatVersion;
use crate::import_error::{ImportDiagnostic, ImportError};
use crate::importer::{import_park, ImportOptions};
use crate::legacy_types::map_element::{LegacyElementType, LegacyMapElement};
use crate::legacy_types::save::*;

#[test]
fn test_missing_ride_object_aborts() {
    let version = FormatVersion::Classic;
    let save = SaveBuilder::new(version).ride(0, coaster_at(3, 3)).build();
    let mut catalog = ObjectCatalog::permissive();
    catalog.deny(ObjectIdentifier::from_static("SCHT1"));
    let mut world = ParkWorld::default();

    let err = import_park(&save, version, &mut catalog, &mut world).unwrap_err();
    match err {
        ImportError::ObjectLoadFailure {
            object_type,
            identifier,
        } => {
            assert_eq!(object_type, ObjectType::Ride);
            assert_eq!(identifier.name(), "SCHT1");
        }
        other => panic!("unexpected error: {other}"),
    }
    // Nothing after object loading ran.
    assert_eq!(world.rides.count(), 0);
}

#[test]
fn test_missing_scenery_group_is_not_fatal() {
    let version = FormatVersion::AddedAttractions;
    let save = SaveBuilder::new(version)
        .research(vec![
            LegacyResearchItem::theme(7),
            LegacyResearchItem::marker(RESEARCH_END),
        ])
        .build();
    let mut catalog = ObjectCatalog::permissive();
    catalog.deny(ObjectIdentifier::from_static("SCGJURAS"));

    let (world, report) =
        import_with(&save, version, &mut catalog, &ImportOptions::default()).unwrap();
    assert_eq!(
        report.diagnostics,
        vec![ImportDiagnostic::SceneryGroupMissing {
            identifier: ObjectIdentifier::from_static("SCGJURAS"),
        }]
    );
    assert_eq!(world.objects.slot_count(ObjectType::SceneryGroup), 7);
    assert!(world.objects.get(ObjectType::SceneryGroup, 6).is_none());
    // The research entry keeps its slot even though the object is missing.
    assert!(world.research.contains(ObjectType::SceneryGroup, 6));
}

#[test]
fn test_scenery_group_overflow_is_reported() {
    let version = FormatVersion::Classic;
    let mut items: Vec<_> = (1..=17)
        .filter(|theme| ![5, 11].contains(theme))
        .map(LegacyResearchItem::theme)
        .collect();
    items.push(LegacyResearchItem::marker(RESEARCH_END));
    let save = SaveBuilder::new(version).research(items).build();

    let (world, report) = import(&save, version);
    assert_eq!(world.objects.slot_count(ObjectType::SceneryGroup), 19);
    let overflow: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| matches!(d, ImportDiagnostic::CapacityExceeded { .. }))
        .collect();
    assert_eq!(overflow.len(), 2);
}

#[test]
fn test_missing_catalogue_object_is_skipped() {
    let version = FormatVersion::Classic;
    let save = SaveBuilder::new(version).build();
    let tww = ObjectIdentifier::from_static("TWW");
    let mut catalog = ObjectCatalog::permissive();
    catalog.deny(tww);

    let (world, report) =
        import_with(&save, version, &mut catalog, &ImportOptions::default()).unwrap();
    assert!(report.diagnostics.is_empty());
    let slots = world.objects.slot_count(ObjectType::SmallScenery);
    assert!(slots > 0);
    assert!((0..slots).all(|slot| {
        world
            .objects
            .get(ObjectType::SmallScenery, slot)
            .is_some_and(|object| object.identifier != tww)
    }));
    assert!(!catalog.load_log().iter().any(|(_, id)| *id == tww));
}

#[test]
fn test_missing_placed_scenery_still_aborts() {
    let version = FormatVersion::Classic;
    // Small scenery code 39 is TWW.
    let save = SaveBuilder::new(version)
        .tile(
            4,
            4,
            vec![LegacyMapElement::new(
                LegacyElementType::SmallScenery,
                GROUND,
                GROUND + 4,
                [39, 0, 0, 0],
            )],
        )
        .build();
    let mut catalog = ObjectCatalog::permissive();
    catalog.deny(ObjectIdentifier::from_static("TWW"));

    let err = import_with(&save, version, &mut catalog, &ImportOptions::default()).unwrap_err();
    match err {
        ImportError::ObjectLoadFailure {
            object_type,
            identifier,
        } => {
            assert_eq!(object_type, ObjectType::SmallScenery);
            assert_eq!(identifier.name(), "TWW");
        }
        other => panic!("unexpected error: {other}"),
    }
}
