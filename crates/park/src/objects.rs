use std::collections::{HashMap, HashSet};
use std::fmt;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// =============================================================================
// Object domains
// =============================================================================

/// Kind of dynamically loaded object definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectType {
    Ride,
    SmallScenery,
    LargeScenery,
    Wall,
    Banner,
    Path,
    PathAddition,
    SceneryGroup,
    ParkEntrance,
    Water,
}

impl ObjectType {
    pub const ALL: [ObjectType; 10] = [
        ObjectType::Ride,
        ObjectType::SmallScenery,
        ObjectType::LargeScenery,
        ObjectType::Wall,
        ObjectType::Banner,
        ObjectType::Path,
        ObjectType::PathAddition,
        ObjectType::SceneryGroup,
        ObjectType::ParkEntrance,
        ObjectType::Water,
    ];

    /// Maximum number of objects of this type a park can have loaded at once.
    pub fn capacity(self) -> usize {
        match self {
            ObjectType::Ride => 128,
            ObjectType::SmallScenery => 252,
            ObjectType::LargeScenery => 128,
            ObjectType::Wall => 128,
            ObjectType::Banner => 32,
            ObjectType::Path => 16,
            ObjectType::PathAddition => 15,
            ObjectType::SceneryGroup => 19,
            ObjectType::ParkEntrance => 1,
            ObjectType::Water => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ObjectType::Ride => "ride",
            ObjectType::SmallScenery => "small scenery",
            ObjectType::LargeScenery => "large scenery",
            ObjectType::Wall => "wall",
            ObjectType::Banner => "banner",
            ObjectType::Path => "path",
            ObjectType::PathAddition => "path addition",
            ObjectType::SceneryGroup => "scenery group",
            ObjectType::ParkEntrance => "park entrance",
            ObjectType::Water => "water",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Object identifier
// =============================================================================

/// Eight character, space padded object name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectIdentifier([u8; 8]);

impl ObjectIdentifier {
    pub const LEN: usize = 8;

    /// Builds an identifier from a name of at most eight ASCII characters,
    /// padding with spaces. Returns `None` for longer or non-ASCII names.
    pub fn new(name: &str) -> Option<Self> {
        if name.len() > Self::LEN || !name.is_ascii() {
            return None;
        }
        let mut bytes = [b' '; 8];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Some(Self(bytes))
    }

    /// Identifier from compile-time table data. Panics on invalid names, so
    /// only use it with literals.
    pub const fn from_static(name: &'static str) -> Self {
        let src = name.as_bytes();
        assert!(src.len() <= 8, "object identifiers are at most 8 bytes");
        let mut bytes = [b' '; 8];
        let mut i = 0;
        while i < src.len() {
            bytes[i] = src[i];
            i += 1;
        }
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// The name without trailing padding.
    pub fn name(&self) -> &str {
        std::str::from_utf8(&self.0)
            .unwrap_or("")
            .trim_end_matches(' ')
    }
}

impl fmt::Debug for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectIdentifier({:?})", self.name())
    }
}

impl fmt::Display for ObjectIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Loaded objects
// =============================================================================

/// Train layout data carried by ride objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RideObjectInfo {
    /// Cars that never carry riders (locomotives, tenders).
    pub zero_cars: u8,
    pub min_cars_in_train: u8,
    pub max_cars_in_train: u8,
}

/// An object definition returned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedObject {
    pub identifier: ObjectIdentifier,
    pub object_type: ObjectType,
    pub ride_info: Option<RideObjectInfo>,
}

/// Source of object definitions.
pub trait ObjectRepository {
    /// Loads the named object, or `None` when it is not installed.
    fn load_object(
        &mut self,
        object_type: ObjectType,
        identifier: &ObjectIdentifier,
    ) -> Option<LoadedObject>;

    /// Whether [`load_object`](Self::load_object) would find the object.
    /// Used to skip optional objects the player does not have.
    fn is_installed(&self, object_type: ObjectType, identifier: &ObjectIdentifier) -> bool;
}

/// Objects loaded for the current park, indexed by type then slot.
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadedObjects {
    slots: HashMap<ObjectType, Vec<Option<LoadedObject>>>,
}

impl LoadedObjects {
    /// Appends a slot for `object_type`. `None` keeps the slot number taken
    /// even though nothing could be loaded for it.
    pub fn push(&mut self, object_type: ObjectType, object: Option<LoadedObject>) -> usize {
        let list = self.slots.entry(object_type).or_default();
        list.push(object);
        list.len() - 1
    }

    pub fn get(&self, object_type: ObjectType, slot: usize) -> Option<&LoadedObject> {
        self.slots
            .get(&object_type)
            .and_then(|list| list.get(slot))
            .and_then(Option::as_ref)
    }

    pub fn ride(&self, slot: usize) -> Option<&LoadedObject> {
        self.get(ObjectType::Ride, slot)
    }

    /// Number of slots taken for `object_type`, loaded or not.
    pub fn slot_count(&self, object_type: ObjectType) -> usize {
        self.slots.get(&object_type).map_or(0, Vec::len)
    }

    pub fn loaded_count(&self, object_type: ObjectType) -> usize {
        self.slots
            .get(&object_type)
            .map_or(0, |list| list.iter().flatten().count())
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

// =============================================================================
// In-memory repository
// =============================================================================

/// Repository backed by an in-memory catalogue.
///
/// In permissive mode every identifier that has not been explicitly denied
/// loads as a generic object, which is what headless tools and tests want.
#[derive(Debug, Clone, Default)]
pub struct ObjectCatalog {
    known: HashMap<(ObjectType, ObjectIdentifier), LoadedObject>,
    denied: HashSet<ObjectIdentifier>,
    permissive: bool,
    load_log: Vec<(ObjectType, ObjectIdentifier)>,
}

impl ObjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permissive() -> Self {
        Self {
            permissive: true,
            ..Self::default()
        }
    }

    pub fn insert(&mut self, object: LoadedObject) {
        self.known
            .insert((object.object_type, object.identifier), object);
    }

    /// Makes `identifier` fail to load regardless of mode.
    pub fn deny(&mut self, identifier: ObjectIdentifier) {
        self.denied.insert(identifier);
    }

    /// Every load request seen so far, in call order.
    pub fn load_log(&self) -> &[(ObjectType, ObjectIdentifier)] {
        &self.load_log
    }
}

impl ObjectRepository for ObjectCatalog {
    fn load_object(
        &mut self,
        object_type: ObjectType,
        identifier: &ObjectIdentifier,
    ) -> Option<LoadedObject> {
        self.load_log.push((object_type, *identifier));
        if self.denied.contains(identifier) {
            return None;
        }
        if let Some(found) = self.known.get(&(object_type, *identifier)) {
            return Some(found.clone());
        }
        if !self.permissive {
            return None;
        }
        Some(LoadedObject {
            identifier: *identifier,
            object_type,
            ride_info: (object_type == ObjectType::Ride).then(|| RideObjectInfo {
                zero_cars: 0,
                min_cars_in_train: 1,
                max_cars_in_train: 8,
            }),
        })
    }

    fn is_installed(&self, object_type: ObjectType, identifier: &ObjectIdentifier) -> bool {
        !self.denied.contains(identifier)
            && (self.permissive || self.known.contains_key(&(object_type, *identifier)))
    }
}
