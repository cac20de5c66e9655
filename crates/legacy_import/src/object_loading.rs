// ---------------------------------------------------------------------------
// Object loading: fetch every discovered object from the repository
// ---------------------------------------------------------------------------

use bevy::log::{info, warn};
use park::objects::{LoadedObjects, ObjectIdentifier, ObjectRepository, ObjectType};

use crate::import_error::{ImportDiagnostic, ImportError};
use crate::object_mapping::ObjectMappings;

/// Sign objects every park gets, one per legacy banner style.
pub const BANNER_OBJECTS: [ObjectIdentifier; 9] = [
    ObjectIdentifier::from_static("BN1"),
    ObjectIdentifier::from_static("BN2"),
    ObjectIdentifier::from_static("BN3"),
    ObjectIdentifier::from_static("BN4"),
    ObjectIdentifier::from_static("BN5"),
    ObjectIdentifier::from_static("BN6"),
    ObjectIdentifier::from_static("BN7"),
    ObjectIdentifier::from_static("BN8"),
    ObjectIdentifier::from_static("BN9"),
];

pub const PARK_ENTRANCE_OBJECT: ObjectIdentifier = ObjectIdentifier::from_static("PKENT1");
pub const WATER_OBJECT: ObjectIdentifier = ObjectIdentifier::from_static("WTRCYAN");

/// Loads the discovered objects in domain order, then the fixed banner,
/// park entrance and water objects. Slot numbers in `objects` match the
/// entry list positions.
///
/// A missing scenery group keeps its slot empty and is reported through
/// `diagnostics`; any other missing object fails the import.
pub fn load_objects(
    mappings: &ObjectMappings,
    repository: &mut dyn ObjectRepository,
    objects: &mut LoadedObjects,
    diagnostics: &mut Vec<ImportDiagnostic>,
) -> Result<Vec<(ObjectType, usize)>, ImportError> {
    objects.clear();
    let mut loaded = Vec::new();

    for list in mappings.lists() {
        let object_type = list.object_type();
        for identifier in list.entries() {
            load_one(repository, objects, diagnostics, object_type, identifier)?;
        }
        loaded.push((object_type, objects.loaded_count(object_type)));
    }

    let fixed: [(ObjectType, &[ObjectIdentifier]); 3] = [
        (ObjectType::Banner, &BANNER_OBJECTS),
        (ObjectType::ParkEntrance, &[PARK_ENTRANCE_OBJECT]),
        (ObjectType::Water, &[WATER_OBJECT]),
    ];
    for (object_type, identifiers) in fixed {
        for identifier in identifiers {
            load_one(repository, objects, diagnostics, object_type, identifier)?;
        }
        loaded.push((object_type, objects.loaded_count(object_type)));
    }

    for (object_type, count) in &loaded {
        info!("Loaded {count} {object_type} objects");
    }
    Ok(loaded)
}

fn load_one(
    repository: &mut dyn ObjectRepository,
    objects: &mut LoadedObjects,
    diagnostics: &mut Vec<ImportDiagnostic>,
    object_type: ObjectType,
    identifier: &ObjectIdentifier,
) -> Result<(), ImportError> {
    match repository.load_object(object_type, identifier) {
        Some(object) => {
            objects.push(object_type, Some(object));
            Ok(())
        }
        None if object_type == ObjectType::SceneryGroup => {
            warn!("Scenery group [{identifier}] is not installed, leaving its slot empty");
            diagnostics.push(ImportDiagnostic::SceneryGroupMissing {
                identifier: *identifier,
            });
            objects.push(object_type, None);
            Ok(())
        }
        None => Err(ImportError::ObjectLoadFailure {
            object_type,
            identifier: *identifier,
        }),
    }
}
