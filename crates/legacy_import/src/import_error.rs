// ---------------------------------------------------------------------------
// ImportError / ImportReport: outcome of a legacy import
// ---------------------------------------------------------------------------

use std::fmt;

use park::objects::{ObjectIdentifier, ObjectType};
use thiserror::Error;

use crate::format_version::FormatVersion;

/// Failures that abort an import. The world being written is left in an
/// undefined state and must be discarded by the caller.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The container could not be read or decoded.
    #[error("Could not read legacy park: {0}")]
    LoadFailure(String),
    /// The object repository has no definition for a required object.
    #[error("Failed to load {object_type} object {identifier}")]
    ObjectLoadFailure {
        object_type: ObjectType,
        identifier: ObjectIdentifier,
    },
    /// An entity refers to a legacy type that discovery never mapped to an
    /// object slot.
    #[error("No {domain} object for legacy type {legacy_type}")]
    UnresolvedObject {
        domain: ObjectType,
        legacy_type: u16,
    },
    /// Discovery needed more objects in a domain than a park can hold.
    #[error("More than {} {object_type} objects, cannot add {identifier}", .object_type.capacity())]
    CapacityExceeded {
        object_type: ObjectType,
        identifier: ObjectIdentifier,
    },
    /// A resource the Bevy import system needs was never inserted.
    #[error("Missing resource: {0}")]
    MissingResource(&'static str),
}

/// Entity kinds the importer coerces instead of reproducing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedEntity {
    /// Peep that was on, entering, leaving or at the front of a ride.
    PeepOnRide { legacy_sprite: u16 },
    /// Peep state code outside the known range.
    UnknownPeepState { legacy_sprite: u16, state: u8 },
    UnknownMiscSprite { legacy_sprite: u16, misc_type: u8 },
}

impl fmt::Display for UnsupportedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedEntity::PeepOnRide { legacy_sprite } => {
                write!(f, "peep {legacy_sprite} was on a ride and now falls")
            }
            UnsupportedEntity::UnknownPeepState {
                legacy_sprite,
                state,
            } => write!(f, "peep {legacy_sprite} has unknown state {state}"),
            UnsupportedEntity::UnknownMiscSprite {
                legacy_sprite,
                misc_type,
            } => write!(f, "sprite {legacy_sprite} has unknown misc type {misc_type}"),
        }
    }
}

/// Something the import degraded on but carried on past.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDiagnostic {
    /// A domain had no room left for another object.
    CapacityExceeded {
        object_type: ObjectType,
        identifier: ObjectIdentifier,
    },
    UnsupportedEntity(UnsupportedEntity),
    /// A scenery group object could not be loaded; its slot stays empty.
    SceneryGroupMissing { identifier: ObjectIdentifier },
    /// A legacy type code has no object in the lookup tables.
    UnknownLegacyType { domain: ObjectType, legacy_type: u16 },
}

impl fmt::Display for ImportDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportDiagnostic::CapacityExceeded {
                object_type,
                identifier,
            } => write!(
                f,
                "More than {} {object_type} objects, [{identifier}] not added",
                object_type.capacity()
            ),
            ImportDiagnostic::UnsupportedEntity(entity) => write!(f, "Coerced {entity}"),
            ImportDiagnostic::SceneryGroupMissing { identifier } => {
                write!(f, "Scenery group [{identifier}] is not installed")
            }
            ImportDiagnostic::UnknownLegacyType {
                domain,
                legacy_type,
            } => write!(f, "Unknown legacy {domain} type {legacy_type}"),
        }
    }
}

/// Summary of a finished import.
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Release the save was written by.
    pub version: FormatVersion,
    /// Objects loaded per domain, in load order.
    pub objects_loaded: Vec<(ObjectType, usize)>,
    pub rides_imported: usize,
    pub peeps_imported: usize,
    pub litter_imported: usize,
    pub misc_sprites_imported: usize,
    /// Destination tile elements after every map pass.
    pub tile_elements: usize,
    pub research_entries: usize,
    /// Soft failures, in the order they happened.
    pub diagnostics: Vec<ImportDiagnostic>,
}

impl ImportReport {
    pub fn new(version: FormatVersion) -> Self {
        Self {
            version,
            objects_loaded: Vec::new(),
            rides_imported: 0,
            peeps_imported: 0,
            litter_imported: 0,
            misc_sprites_imported: 0,
            tile_elements: 0,
            research_entries: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn objects_of(&self, object_type: ObjectType) -> usize {
        self.objects_loaded
            .iter()
            .filter(|(t, _)| *t == object_type)
            .map(|(_, n)| n)
            .sum()
    }
}
